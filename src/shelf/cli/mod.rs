//! # CLI Layer
//!
//! One client of the shelf library. This is the only code that parses
//! arguments, writes to the terminal, or decides exit codes.
//!
//! - `setup`: clap definitions
//! - `commands`: `run()` and the per-command handlers
//! - `render`: cards, charts, and message printing
//! - `styles`: the colour theme

mod commands;
mod render;
mod setup;
mod styles;

pub use commands::run;
