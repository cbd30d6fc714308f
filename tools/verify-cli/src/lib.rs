pub mod config;
pub mod reporter;
pub mod runner;
pub mod setup;
pub mod steps;
pub mod verify;

pub use runner::{CommandCall, CommandResult, CommandRunner, RealCommandRunner};
