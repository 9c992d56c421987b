//! # Data Access Layer
//!
//! The [`Database`] trait is the boundary between the tracker and whatever holds the
//! three tables. It is deliberately tiny: a statement template with `?` placeholders
//! plus an ordered list of positional parameters. Parameters are always bound, never
//! spliced into the SQL text.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteDatabase`]: Production backend over a SQLite file (rusqlite)
//! - [`memory::InMemoryDatabase`]: Private in-memory SQLite with the reference schema
//!   loaded, for tests and throwaway sessions
//!
//! The statements themselves, and the typed helpers that wrap them, live in
//! [`queries`]. Nothing here validates input; validation happens at the prompts.
//!
//! ## Lifetime
//!
//! A connection is opened once at startup and released once on exit through
//! [`Database::close`]. Every call after that fails with
//! [`TrackerError::ConnectionClosed`](crate::error::TrackerError::ConnectionClosed).

use crate::error::Result;
use crate::model::{Row, Value};

pub mod memory;
pub mod queries;
pub mod sqlite;

/// Abstract interface for the relational store.
pub trait Database {
    /// Run a statement that returns rows
    fn query(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>>;

    /// Run a statement that modifies rows, returning the affected count
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64>;

    /// Release the underlying connection
    fn close(&mut self) -> Result<()>;
}
