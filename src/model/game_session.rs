use chrono::{Local, NaiveDateTime, SubsecRound};
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::BTreeSet;
use tracing::debug;

use crate::error::TombolaError;
use crate::model::game_save::GameSave;
use crate::model::tier::Tier;

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 90;
pub const TOTAL_NUMBERS: usize = MAX_NUMBER as usize;

/// Format used for log entry prefixes and the persisted `date` field.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Authoritative state of one tombola game.
///
/// Fields are private so the only way to change a session is through the
/// methods below, which keep `last_called` inside `called` and only ever
/// append to the log.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    name: String,
    created_at: NaiveDateTime,
    called: BTreeSet<u8>,
    last_called: Option<u8>,
    tier: Tier,
    log: Vec<String>,
}

impl GameSession {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            // whole seconds, the precision of the saved `date`
            created_at: Local::now().naive_local().trunc_subsecs(0),
            called: BTreeSet::new(),
            last_called: None,
            tier: Tier::default(),
            log: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Called numbers in ascending order.
    pub fn called(&self) -> impl Iterator<Item = u8> + '_ {
        self.called.iter().copied()
    }

    pub fn called_count(&self) -> usize {
        self.called.len()
    }

    pub fn is_called(&self, number: u8) -> bool {
        self.called.contains(&number)
    }

    pub fn last_called(&self) -> Option<u8> {
        self.last_called
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Marks `number` as called and makes it the last-called number.
    pub fn add_number(&mut self, number: i64) -> Result<u8, TombolaError> {
        let n = checked_number(number)?;
        if self.called.contains(&n) {
            return Err(TombolaError::AlreadyCalled(n));
        }

        self.called.insert(n);
        self.last_called = Some(n);
        self.log_action(format!("Added number {n}"));
        debug!(game = %self.name, number = n, "number added");
        Ok(n)
    }

    /// Un-calls `number`. If it was the last-called number, the highest
    /// remaining called number takes its place.
    pub fn remove_number(&mut self, number: i64) -> Result<u8, TombolaError> {
        let n = u8::try_from(number)
            .ok()
            .filter(|n| self.called.contains(n))
            .ok_or(TombolaError::NotCalled(number))?;

        self.called.remove(&n);
        if self.last_called == Some(n) {
            self.recompute_last_called();
        }
        self.log_action(format!("Removed number {n}"));
        debug!(game = %self.name, number = n, last = ?self.last_called, "number removed");
        Ok(n)
    }

    /// Calls a uniformly chosen number that has not been called yet.
    pub fn draw_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<u8, TombolaError> {
        let n = (MIN_NUMBER..=MAX_NUMBER)
            .filter(|n| !self.called.contains(n))
            .choose(rng)
            .ok_or(TombolaError::BoardComplete)?;
        self.add_number(i64::from(n))
    }

    pub fn set_tier(&mut self, tier: Tier) {
        let previous = self.tier;
        self.tier = tier;
        self.log_action(format!("State changed from {previous} to {tier}"));
    }

    pub fn log_action(&mut self, message: impl AsRef<str>) {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        self.log.push(format!("[{timestamp}] {}", message.as_ref()));
    }

    pub fn snapshot(&self) -> GameSave {
        GameSave {
            name: self.name.clone(),
            numbers: self.called.iter().copied().collect(),
            date: self.created_at,
            log: self.log.clone(),
            last_number: self.last_called,
            state: self.tier,
        }
    }

    /// Rebuilds a session from a snapshot, checking only that the numbers
    /// are in range and that the last-called number is one of them.
    pub fn restore(save: GameSave) -> Result<Self, TombolaError> {
        let mut called = BTreeSet::new();
        for n in save.numbers {
            if !(MIN_NUMBER..=MAX_NUMBER).contains(&n) {
                return Err(TombolaError::load_failure(
                    &save.name,
                    format!("number {n} is outside {MIN_NUMBER}..={MAX_NUMBER}"),
                ));
            }
            called.insert(n);
        }

        if let Some(last) = save.last_number {
            if !called.contains(&last) {
                return Err(TombolaError::load_failure(
                    &save.name,
                    format!("last number {last} is not among the called numbers"),
                ));
            }
        }

        Ok(Self {
            name: save.name,
            created_at: save.date,
            called,
            last_called: save.last_number,
            tier: save.state,
            log: save.log,
        })
    }

    fn recompute_last_called(&mut self) {
        self.last_called = self.called.last().copied();
    }
}

fn checked_number(number: i64) -> Result<u8, TombolaError> {
    u8::try_from(number)
        .ok()
        .filter(|n| (MIN_NUMBER..=MAX_NUMBER).contains(n))
        .ok_or(TombolaError::OutOfRange(number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entry_text(entry: &str) -> &str {
        // "[YYYY-MM-DD HH:MM:SS] " is 22 bytes
        &entry[22..]
    }

    #[test]
    fn new_session_is_empty() {
        let s = GameSession::new("friday");
        assert_eq!(s.name(), "friday");
        assert_eq!(s.called_count(), 0);
        assert_eq!(s.last_called(), None);
        assert_eq!(s.tier(), Tier::Ambo);
        assert!(s.log().is_empty());
    }

    #[test]
    fn created_at_has_no_sub_second_part() {
        use chrono::Timelike;
        let s = GameSession::new("g");
        assert_eq!(s.created_at().nanosecond(), 0);
    }

    #[test]
    fn add_sets_last_called_and_logs() {
        let mut s = GameSession::new("g");
        assert_eq!(s.add_number(7), Ok(7));
        assert!(s.is_called(7));
        assert_eq!(s.last_called(), Some(7));
        assert_eq!(s.log().len(), 1);
        assert_eq!(entry_text(&s.log()[0]), "Added number 7");
        assert!(s.log()[0].starts_with('['));
    }

    #[test]
    fn duplicate_add_is_rejected_without_side_effects() {
        let mut s = GameSession::new("g");
        s.add_number(7).unwrap();
        s.add_number(3).unwrap();
        let before = s.clone();

        assert_eq!(s.add_number(7), Err(TombolaError::AlreadyCalled(7)));
        assert_eq!(s, before);
    }

    #[test]
    fn out_of_range_add_is_rejected() {
        let mut s = GameSession::new("g");
        for n in [0, 91, -5, 256, i64::MAX] {
            assert_eq!(s.add_number(n), Err(TombolaError::OutOfRange(n)));
        }
        assert_eq!(s.called_count(), 0);
        assert!(s.log().is_empty());
    }

    #[test]
    fn remove_of_uncalled_number_is_rejected() {
        let mut s = GameSession::new("g");
        s.add_number(10).unwrap();
        let before = s.clone();

        assert_eq!(s.remove_number(11), Err(TombolaError::NotCalled(11)));
        assert_eq!(s.remove_number(-1), Err(TombolaError::NotCalled(-1)));
        assert_eq!(s, before);
    }

    #[test]
    fn removing_last_called_falls_back_to_highest_remaining() {
        let mut s = GameSession::new("g");
        s.add_number(40).unwrap();
        s.add_number(5).unwrap();
        s.add_number(12).unwrap();
        assert_eq!(s.last_called(), Some(12));

        s.remove_number(12).unwrap();
        assert_eq!(s.last_called(), Some(40));

        s.remove_number(40).unwrap();
        assert_eq!(s.last_called(), Some(5));

        s.remove_number(5).unwrap();
        assert_eq!(s.last_called(), None);
    }

    #[test]
    fn removing_other_number_keeps_last_called() {
        let mut s = GameSession::new("g");
        s.add_number(80).unwrap();
        s.add_number(3).unwrap();
        s.remove_number(80).unwrap();
        assert_eq!(s.last_called(), Some(3));
        assert_eq!(entry_text(&s.log()[2]), "Removed number 80");
    }

    #[test]
    fn set_tier_records_transition() {
        let mut s = GameSession::new("g");
        s.set_tier(Tier::Cinquina);
        s.set_tier(Tier::Terno);
        assert_eq!(s.tier(), Tier::Terno);
        assert_eq!(entry_text(&s.log()[0]), "State changed from Ambo to Cinquina");
        assert_eq!(entry_text(&s.log()[1]), "State changed from Cinquina to Terno");
    }

    #[test]
    fn draw_random_never_repeats_and_stops_when_full() {
        let mut s = GameSession::new("g");
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = BTreeSet::new();
        for _ in 0..TOTAL_NUMBERS {
            let n = s.draw_random(&mut rng).unwrap();
            assert!(seen.insert(n));
            assert_eq!(s.last_called(), Some(n));
        }
        assert_eq!(s.called_count(), TOTAL_NUMBERS);
        assert_eq!(s.draw_random(&mut rng), Err(TombolaError::BoardComplete));
    }

    #[test]
    fn snapshot_restores_identically() {
        let mut s = GameSession::new("g");
        s.add_number(33).unwrap();
        s.add_number(2).unwrap();
        s.set_tier(Tier::Tombola);
        s.log_action("note");

        let save = s.snapshot();
        assert_eq!(save.numbers, vec![2, 33]);
        let restored = GameSession::restore(save).unwrap();
        assert_eq!(restored, s);
    }

    #[test]
    fn restore_rejects_structurally_invalid_saves() {
        let mut save = GameSession::new("broken").snapshot();
        save.numbers = vec![1, 95];
        assert!(matches!(
            GameSession::restore(save.clone()),
            Err(TombolaError::LoadFailure { .. })
        ));

        save.numbers = vec![1, 2];
        save.last_number = Some(3);
        assert!(matches!(
            GameSession::restore(save),
            Err(TombolaError::LoadFailure { .. })
        ));
    }
}
