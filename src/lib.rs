pub mod cli;
pub mod commands;
pub mod core;
pub mod error;

pub use self::core::storage::{Recipe, Step, Store};
pub use error::{GcmdError, Result};
