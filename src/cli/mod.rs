//! Command-line interface: argument parsing, output, and handlers

mod commands;
pub mod handlers;
mod output;
pub mod utils;

pub use commands::{Cli, Commands, TicketCommands, UserCommands};
pub use output::OutputFormatter;
