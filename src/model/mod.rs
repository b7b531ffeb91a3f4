pub mod event_result;
pub mod game_save;
pub mod game_session;
pub mod statistics;
pub mod tier;
