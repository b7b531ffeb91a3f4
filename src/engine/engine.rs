use rand::Rng;
use tracing::{info, warn};

use crate::engine::apply_command::{apply_command, record_invalid_input};
use crate::engine::protocol::{parse_number, EntryAction, OperatorCommand};
use crate::error::TombolaError;
use crate::model::event_result::CommandOutcome;
use crate::model::game_session::GameSession;
use crate::persistence::GameStore;

/// Drives one open game: mutate the session, then save and bump the
/// revision so the views know to rebuild.
///
/// The session never calls back into anything; whoever holds the
/// controller compares `revision()` and refreshes its views.
pub struct GameController {
    session: GameSession,
    store: GameStore,
    revision: u64,
}

impl GameController {
    pub fn start_new(store: GameStore, name: &str) -> Result<Self, TombolaError> {
        let name = store.reserve(name)?;
        let mut session = GameSession::new(name);
        session.log_action("Game created");

        store.save(&session.snapshot())?;
        info!(game = %session.name(), "new game started");

        Ok(Self {
            session,
            store,
            revision: 0,
        })
    }

    pub fn open_existing(store: GameStore, name: &str) -> Result<Self, TombolaError> {
        let save = store.load(name)?;
        let mut session = GameSession::restore(save)?;
        session.log_action("Game loaded");

        store.save(&session.snapshot())?;
        info!(
            game = %session.name(),
            called = session.called_count(),
            tier = %session.tier(),
            "game reopened"
        );

        Ok(Self {
            session,
            store,
            revision: 0,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn store(&self) -> &GameStore {
        &self.store
    }

    /// Increases every time the session changes, including rejected
    /// commands that only added a log line.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies a command and saves on success.
    ///
    /// A failed save is returned as `Err` but the in-memory change stays;
    /// the next successful save will carry it.
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        command: OperatorCommand,
        rng: &mut R,
    ) -> Result<CommandOutcome, TombolaError> {
        let outcome = apply_command(&mut self.session, command, rng);
        self.revision += 1;

        match &outcome {
            CommandOutcome::Applied { message } => {
                info!(game = %self.session.name(), "{message}");
                self.save()?;
            }
            CommandOutcome::Rejected { error } => {
                warn!(game = %self.session.name(), ?command, %error, "command rejected");
            }
        }

        Ok(outcome)
    }

    /// Parses the operator's free-text entry and submits it.
    pub fn submit_entry<R: Rng + ?Sized>(
        &mut self,
        action: EntryAction,
        text: &str,
        rng: &mut R,
    ) -> Result<CommandOutcome, TombolaError> {
        match parse_number(text) {
            Ok(n) => self.submit(action.command(n), rng),
            Err(error) => {
                record_invalid_input(&mut self.session, action);
                self.revision += 1;
                warn!(game = %self.session.name(), %error, "invalid entry");
                Ok(CommandOutcome::Rejected { error })
            }
        }
    }

    pub fn save(&self) -> Result<(), TombolaError> {
        self.store.save(&self.session.snapshot()).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tier::Tier;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn temp_store(tag: &str) -> GameStore {
        let dir = std::env::temp_dir().join(format!("tombola-ctrl-{}-{tag}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        GameStore::new(dir)
    }

    #[test]
    fn new_game_is_saved_with_creation_entry() {
        let store = temp_store("new");
        let ctrl = GameController::start_new(store.clone(), "  sagra ").unwrap();

        assert_eq!(ctrl.session().name(), "sagra");
        assert!(ctrl.session().log()[0].ends_with("Game created"));
        assert_eq!(store.load("sagra").unwrap(), ctrl.session().snapshot());

        let again = GameController::start_new(store.clone(), "sagra");
        assert!(matches!(again, Err(TombolaError::NameCollision(_))));

        std::fs::remove_dir_all(store.dir()).unwrap();
    }

    #[test]
    fn successful_commands_are_persisted() {
        let store = temp_store("persist");
        let mut rng = StdRng::seed_from_u64(3);
        let mut ctrl = GameController::start_new(store.clone(), "g").unwrap();

        ctrl.submit(OperatorCommand::AddNumber(9), &mut rng).unwrap();
        ctrl.submit(OperatorCommand::SetTier(Tier::Quaterna), &mut rng).unwrap();
        assert_eq!(ctrl.revision(), 2);

        let saved = store.load("g").unwrap();
        assert_eq!(saved.numbers, vec![9]);
        assert_eq!(saved.state, Tier::Quaterna);

        std::fs::remove_dir_all(store.dir()).unwrap();
    }

    #[test]
    fn rejected_entry_bumps_revision_without_mutation() {
        let store = temp_store("reject");
        let mut rng = StdRng::seed_from_u64(3);
        let mut ctrl = GameController::start_new(store.clone(), "g").unwrap();

        let outcome = ctrl.submit_entry(EntryAction::Add, "sette", &mut rng).unwrap();
        assert_eq!(outcome.error(), Some(&TombolaError::InvalidInput("sette".into())));
        assert_eq!(ctrl.revision(), 1);
        assert_eq!(ctrl.session().called_count(), 0);
        assert!(ctrl.session().log().last().unwrap().ends_with("Failed to add invalid input"));

        std::fs::remove_dir_all(store.dir()).unwrap();
    }

    #[test]
    fn rejected_entry_lines_reach_disk_on_save() {
        let store = temp_store("reject-save");
        let mut rng = StdRng::seed_from_u64(3);
        let mut ctrl = GameController::start_new(store.clone(), "g").unwrap();
        ctrl.submit(OperatorCommand::AddNumber(4), &mut rng).unwrap();
        ctrl.submit(OperatorCommand::AddNumber(4), &mut rng).unwrap();
        ctrl.submit_entry(EntryAction::Remove, "x", &mut rng).unwrap();

        let on_disk = store.load("g").unwrap();
        assert_eq!(on_disk.log.len(), 2);

        ctrl.save().unwrap();
        let on_disk = store.load("g").unwrap();
        assert_eq!(on_disk.log, ctrl.session().log());
        assert_eq!(on_disk.log.len(), 4);

        std::fs::remove_dir_all(store.dir()).unwrap();
    }

    #[test]
    fn reopen_appends_loaded_entry() {
        let store = temp_store("reopen");
        let mut rng = StdRng::seed_from_u64(3);
        {
            let mut ctrl = GameController::start_new(store.clone(), "g").unwrap();
            ctrl.submit(OperatorCommand::AddNumber(50), &mut rng).unwrap();
        }

        let ctrl = GameController::open_existing(store.clone(), "g").unwrap();
        assert_eq!(ctrl.session().last_called(), Some(50));
        assert_eq!(ctrl.session().log().len(), 3);
        assert!(ctrl.session().log()[2].ends_with("Game loaded"));

        std::fs::remove_dir_all(store.dir()).unwrap();
    }
}
