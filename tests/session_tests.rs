//! Game session integration tests.
//!
//! These cover the operator-facing behaviour of a session: calling and
//! un-calling numbers, prize changes, and snapshot/restore.

use proptest::prelude::*;

use tombola_manager::model::game_session::GameSession;
use tombola_manager::model::statistics::Statistics;
use tombola_manager::model::tier::Tier;
use tombola_manager::TombolaError;

// =============================================================================
// Scenarios
// =============================================================================

/// A short evening: one number, a duplicate, and a prize change.
#[test]
fn test_first_numbers_of_a_game() {
    let mut session = GameSession::new("evening");

    assert_eq!(session.add_number(7), Ok(7));
    assert_eq!(session.called().collect::<Vec<_>>(), vec![7]);
    assert_eq!(session.last_called(), Some(7));

    assert_eq!(session.add_number(7), Err(TombolaError::AlreadyCalled(7)));

    session.set_tier(Tier::Terno);
    assert_eq!(session.tier(), Tier::Terno);

    let save = session.snapshot();
    assert_eq!(save.numbers, vec![7]);
    assert_eq!(save.last_number, Some(7));
    assert_eq!(save.state, Tier::Terno);
    assert_eq!(save.log.len(), 2);

    let json = serde_json::to_value(&save).unwrap();
    assert_eq!(json["state"], "Terno");
    assert_eq!(json["last_number"], 7);
}

/// Removing the last-called number hands the highlight to the highest
/// number still on the board.
#[test]
fn test_last_called_after_removal() {
    let mut session = GameSession::new("fallback");
    session.add_number(5).unwrap();
    session.add_number(12).unwrap();
    assert_eq!(session.last_called(), Some(12));

    session.remove_number(12).unwrap();
    assert_eq!(session.last_called(), Some(5));
}

/// Percentage shown on the console.
#[test]
fn test_percentage_called() {
    let mut session = GameSession::new("stats");
    for n in [3, 14, 15, 26, 35, 48, 59, 77, 90] {
        session.add_number(n).unwrap();
    }
    let stats = Statistics::from_session(&session);
    assert_eq!(stats.percentage(), 9.0 / 90.0 * 100.0);
    assert_eq!(format!("{:.1}%", stats.percentage()), "10.0%");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_double_add_grows_by_one(n in 1i64..=90) {
        let mut session = GameSession::new("p");
        prop_assert!(session.add_number(n).is_ok());
        prop_assert_eq!(session.add_number(n), Err(TombolaError::AlreadyCalled(n as u8)));
        prop_assert_eq!(session.called_count(), 1);
    }

    #[test]
    fn prop_out_of_range_is_rejected(n in prop_oneof![i64::MIN..=0i64, 91i64..=i64::MAX]) {
        let mut session = GameSession::new("p");
        session.add_number(45).unwrap();
        let before = session.clone();
        prop_assert_eq!(session.add_number(n), Err(TombolaError::OutOfRange(n)));
        prop_assert_eq!(session, before);
    }

    #[test]
    fn prop_remove_uncalled_is_rejected(
        called in proptest::collection::btree_set(1i64..=90, 0..30),
        n in -10i64..=100,
    ) {
        prop_assume!(!called.contains(&n));
        let mut session = GameSession::new("p");
        for c in &called {
            session.add_number(*c).unwrap();
        }
        let before = session.clone();
        prop_assert_eq!(session.remove_number(n), Err(TombolaError::NotCalled(n)));
        prop_assert_eq!(session, before);
    }

    #[test]
    fn prop_last_called_stays_on_the_board(
        ops in proptest::collection::vec((any::<bool>(), 1i64..=90), 0..120),
    ) {
        let mut session = GameSession::new("p");
        let mut log_len = 0;
        for (add, n) in ops {
            let _ = if add { session.add_number(n) } else { session.remove_number(n) };
            if let Some(last) = session.last_called() {
                prop_assert!(session.is_called(last));
            }
            prop_assert!(session.log().len() >= log_len);
            log_len = session.log().len();
        }
    }

    #[test]
    fn prop_snapshot_restore_roundtrip(
        called in proptest::collection::vec(1i64..=90, 0..40),
        tier_idx in 0usize..6,
    ) {
        let mut session = GameSession::new("p");
        for n in called {
            let _ = session.add_number(n);
        }
        session.set_tier(Tier::ALL[tier_idx]);

        let restored = GameSession::restore(session.snapshot()).unwrap();
        prop_assert_eq!(restored.called().collect::<Vec<_>>(), session.called().collect::<Vec<_>>());
        prop_assert_eq!(restored.last_called(), session.last_called());
        prop_assert_eq!(restored.tier(), session.tier());
        prop_assert_eq!(restored.log(), session.log());
    }
}
