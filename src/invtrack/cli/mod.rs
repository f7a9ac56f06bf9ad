//! # CLI
//!
//! One possible client of the invtrack library, and the only place that knows
//! about stdin/stdout, exit codes and colors.
//!
//! Running `invtrack` with no subcommand starts the interactive menu
//! ([`shell`]). Every other subcommand performs one operation, saves if it
//! changed anything, and exits, which makes the tool scriptable.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context initialization and per-subcommand handlers
//! - `shell`: The menu loop
//! - `prompt`: Line prompts with bounded re-prompting
//! - `render`: Tables, detail views, summaries and messages

mod commands;
mod prompt;
mod render;
pub mod setup;
mod shell;

pub use commands::run;
