pub mod engine;
pub mod protocol;
pub mod apply_command;

pub use engine::GameController;
