pub mod commands;
pub mod config;
pub mod console;
pub mod logging;

pub use commands::{Action, Flow, Presenter, dispatch};
pub use console::{ConsoleCommand, ConsoleSession};
