use crate::error::TombolaError;

/// What happened to one operator command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied { message: String },
    Rejected { error: TombolaError },
}

impl CommandOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CommandOutcome::Applied { .. })
    }

    pub fn error(&self) -> Option<&TombolaError> {
        match self {
            CommandOutcome::Applied { .. } => None,
            CommandOutcome::Rejected { error } => Some(error),
        }
    }
}
