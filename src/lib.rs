//! Number tracking, caller board and save files for running a tombola.
//!
//! [`model::game_session::GameSession`] holds the game; everything else
//! either drives it ([`engine`]), stores it ([`persistence`]) or draws
//! it ([`ui`]).

pub mod engine;
pub mod error;
pub mod model;
pub mod persistence;
pub mod ui;

pub use error::TombolaError;
