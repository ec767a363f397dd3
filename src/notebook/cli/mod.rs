//! # CLI Layer
//!
//! This module is **one possible UI client** for the notebook, not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Handles argument parsing
//! - Formats notes for human consumption
//!
//! Without a subcommand it runs the numbered menu loop (`menu.rs`). Each
//! subcommand performs one operation and exits (`commands.rs`).
//!
//! ## Structure
//!
//! - `args.rs`: clap definitions
//! - `commands.rs`: `run()`, context setup and one-shot handlers
//! - `menu.rs`: the interactive loop
//! - `prompt.rs`: line-oriented input
//! - `print.rs`: rendering

mod args;
mod commands;
mod menu;
mod print;
mod prompt;

pub use commands::run;
