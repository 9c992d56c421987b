//! # Emptrack Architecture
//!
//! Emptrack is a small **menu-driven tracker** for a relational schema of departments,
//! roles and employees. The binary is one client of this library: everything that
//! knows about terminals, exit codes and colors lives in the CLI layer, everything
//! else is plain Rust taking values and returning `Result`s.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables and messages            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Menu Controller (menu.rs) + API facade (api.rs)            │
//! │  - Iterative loop: show menu, dispatch, present, repeat     │
//! │  - Uniform policy: report handler errors, back to the menu  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One handler per menu action                              │
//! │  - Reads choice lists, asks prompts, performs one effect    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data Access (store/) and Prompts (prompt/)                 │
//! │  - `Database` trait: positional-parameter queries           │
//! │  - `Prompter` trait: batch of prompt specs -> answers       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Capabilities, not globals
//!
//! The connection handle is owned by [`api::TrackerApi`] and passed by reference to
//! every handler. The prompter is passed the same way. Tests swap in
//! [`store::memory::InMemoryDatabase`] and [`prompt::lines::LinePrompter`] over
//! in-memory buffers; no handler touches ambient state.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade owning the connection, one method per menu action
//! - [`menu`]: Menu actions and the controller loop
//! - [`commands`]: Action handlers and structured results
//! - [`store`]: The `Database` contract, SQLite backend and the statements
//! - [`prompt`]: Prompt specs and the interactive / line-based prompters
//! - [`model`]: Scalars, rows, entities and tables
//! - [`validation`]: Salary normalization
//! - [`config`]: Configuration resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod menu;
pub mod model;
pub mod prompt;
pub mod store;
pub mod validation;
