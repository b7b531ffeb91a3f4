use rand::Rng;

use crate::engine::protocol::{EntryAction, OperatorCommand};
use crate::error::TombolaError;
use crate::model::event_result::CommandOutcome;
use crate::model::game_session::GameSession;

/// Apply an OperatorCommand to the session, returning the outcome.
///
/// Rejected commands leave numbers, last-called and tier untouched but do
/// add a "Failed to ..." line to the action log so the operator can see
/// what was attempted.
pub fn apply_command<R: Rng + ?Sized>(
    session: &mut GameSession,
    command: OperatorCommand,
    rng: &mut R,
) -> CommandOutcome {
    let result = match command {
        OperatorCommand::AddNumber(n) => session
            .add_number(n)
            .map(|n| format!("Added number {n}")),

        OperatorCommand::RemoveNumber(n) => session
            .remove_number(n)
            .map(|n| format!("Removed number {n}")),

        OperatorCommand::SetTier(tier) => {
            session.set_tier(tier);
            Ok(format!("State changed to {tier}"))
        }

        OperatorCommand::DrawRandom => session
            .draw_random(rng)
            .map(|n| format!("Drew number {n}")),
    };

    match result {
        Ok(message) => CommandOutcome::Applied { message },
        Err(error) => {
            session.log_action(rejection_entry(command, &error));
            CommandOutcome::Rejected { error }
        }
    }
}

/// Logs an entry that could not be parsed as a number.
pub fn record_invalid_input(session: &mut GameSession, action: EntryAction) {
    session.log_action(format!("Failed to {} invalid input", action.verb()));
}

fn rejection_entry(command: OperatorCommand, error: &TombolaError) -> String {
    match (command, error) {
        (OperatorCommand::AddNumber(n), TombolaError::AlreadyCalled(_)) => {
            format!("Failed to add number {n} (already called)")
        }
        (OperatorCommand::AddNumber(n), TombolaError::OutOfRange(_)) => {
            format!("Failed to add invalid number {n} (out of range)")
        }
        (OperatorCommand::RemoveNumber(n), TombolaError::NotCalled(_)) => {
            format!("Failed to remove number {n} (not called)")
        }
        (OperatorCommand::DrawRandom, TombolaError::BoardComplete) => {
            "Failed to draw a number (all numbers called)".to_string()
        }
        (_, other) => format!("Command failed: {other}"),
    }
}
