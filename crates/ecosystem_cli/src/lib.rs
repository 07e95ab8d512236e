//! The `ecosystem` command line tool
//!
//! Operates on a project directory holding an optional `ecosystem.toml`.
//! Store state is persisted under the configured state directory, so
//! consecutive invocations behave like one long-running session.

pub mod cli;
pub mod commands;
pub mod project;

pub use cli::Cli;
pub use commands::run;
