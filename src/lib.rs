pub mod cli;
pub mod error;
pub mod models;

pub use error::InputError;
pub use models::{Task, TaskList};
