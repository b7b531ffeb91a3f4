use crate::model::game_session::{GameSession, MAX_NUMBER, MIN_NUMBER, TOTAL_NUMBERS};

/// Summary counters shown on the operator console.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub called: usize,
    pub remaining: usize,
}

impl Statistics {
    pub fn from_session(session: &GameSession) -> Self {
        let called = session.called_count();
        Self {
            called,
            remaining: TOTAL_NUMBERS - called,
        }
    }

    pub fn percentage(&self) -> f64 {
        self.called as f64 / TOTAL_NUMBERS as f64 * 100.0
    }
}

pub fn remaining_numbers(session: &GameSession) -> Vec<u8> {
    (MIN_NUMBER..=MAX_NUMBER)
        .filter(|n| !session.is_called(*n))
        .collect()
}

/// Splits `numbers` into rows of at most `width` for the list view.
pub fn number_rows(numbers: &[u8], width: usize) -> Vec<String> {
    numbers
        .chunks(width.max(1))
        .map(|row| {
            row.iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect()
}
