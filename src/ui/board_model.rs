use crate::model::game_session::{GameSession, MAX_NUMBER, MIN_NUMBER};
use crate::model::statistics::{number_rows, remaining_numbers, Statistics};
use crate::model::tier::Tier;

const ROW_WIDTH: usize = 10;

/// How one slot of the board should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Uncalled,
    Called,
    LastCalled,
}

/// Everything the caller board and operator console draw, copied out of
/// the session after each change so the views never hold the session.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardModel {
    pub name: String,
    pub tier: Tier,
    pub last_called: Option<u8>,
    pub cells: Vec<(u8, CellState)>,
    pub stats: Statistics,
    pub called_rows: Vec<String>,
    pub remaining_rows: Vec<String>,
    pub log: Vec<String>,
    pub revision: u64,
}

impl BoardModel {
    pub fn build(session: &GameSession, revision: u64) -> Self {
        let last = session.last_called();
        let cells = (MIN_NUMBER..=MAX_NUMBER)
            .map(|n| {
                let state = if Some(n) == last {
                    CellState::LastCalled
                } else if session.is_called(n) {
                    CellState::Called
                } else {
                    CellState::Uncalled
                };
                (n, state)
            })
            .collect();

        let called: Vec<u8> = session.called().collect();

        Self {
            name: session.name().to_string(),
            tier: session.tier(),
            last_called: last,
            cells,
            stats: Statistics::from_session(session),
            called_rows: number_rows(&called, ROW_WIDTH),
            remaining_rows: number_rows(&remaining_numbers(session), ROW_WIDTH),
            log: session.log().to_vec(),
            revision,
        }
    }

    /// Cells grouped ten to a row, the way the board is laid out.
    pub fn rows(&self) -> impl Iterator<Item = &[(u8, CellState)]> {
        self.cells.chunks(ROW_WIDTH)
    }

    pub fn is_stale(&self, revision: u64) -> bool {
        self.revision != revision
    }
}
