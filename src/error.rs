use thiserror::Error;

/// Everything that can go wrong while running or storing a game.
///
/// None of these are fatal: the UI shows the message and the session
/// stays as it was before the failed call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TombolaError {
    #[error("number {0} is outside 1..=90")]
    OutOfRange(i64),

    #[error("number {0} has already been called")]
    AlreadyCalled(u8),

    #[error("number {0} has not been called")]
    NotCalled(i64),

    #[error("'{0}' is not a valid number")]
    InvalidInput(String),

    #[error("all 90 numbers have been called")]
    BoardComplete,

    #[error("invalid game name '{0}'")]
    InvalidName(String),

    #[error("a game named '{0}' already exists")]
    NameCollision(String),

    #[error("could not load game '{name}': {reason}")]
    LoadFailure { name: String, reason: String },

    #[error("could not save game '{name}': {reason}")]
    SaveFailure { name: String, reason: String },
}

impl TombolaError {
    pub fn load_failure(name: &str, reason: impl ToString) -> Self {
        TombolaError::LoadFailure {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn save_failure(name: &str, reason: impl ToString) -> Self {
        TombolaError::SaveFailure {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
