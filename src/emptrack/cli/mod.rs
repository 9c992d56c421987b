//! # CLI Layer
//!
//! This module is **one possible UI client** for the tracker, not the tracker itself.
//! It is the only place that:
//! - Parses process arguments
//! - Initializes logging
//! - Writes to stdout and stderr
//! - Picks colors and table layout
//!
//! ## Structure
//!
//! - `setup`: clap argument definitions
//! - `commands`: `run()`, which opens the database and drives the menu loop
//! - `render`: turns `CmdResult`s and errors into strings
//! - `styles`: shared terminal styles

mod commands;
mod render;
mod setup;
mod styles;

pub use commands::run;
