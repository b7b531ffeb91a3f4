use crate::error::TombolaError;
use crate::model::tier::Tier;

/// Commands the operator console can send to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorCommand {
    AddNumber(i64),
    RemoveNumber(i64),
    SetTier(Tier),
    DrawRandom,
}

/// Which button the free-text entry was submitted with; used when logging
/// unparseable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    Add,
    Remove,
}

impl EntryAction {
    pub fn command(self, number: i64) -> OperatorCommand {
        match self {
            EntryAction::Add => OperatorCommand::AddNumber(number),
            EntryAction::Remove => OperatorCommand::RemoveNumber(number),
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            EntryAction::Add => "add",
            EntryAction::Remove => "remove",
        }
    }
}

/// Parses the number entry field. Range checks belong to the session.
pub fn parse_number(text: &str) -> Result<i64, TombolaError> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| TombolaError::InvalidInput(trimmed.to_string()))
}
