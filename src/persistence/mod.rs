pub mod store;

pub use store::{validate_name, GameStore};
