//! # Action Handlers
//!
//! One handler per menu action, grouped by entity. Every handler has one of three
//! shapes:
//!
//! - **Read-and-display**: one read query, returned as a [`Table`]
//! - **Create**: fresh choice lists for the required foreign keys, prompts for the
//!   remaining fields, one insert, one confirmation
//! - **Update**: two fresh choice lists, two selections, one update, one confirmation
//!
//! Choice lists are read at the moment the handler runs and never cached. When a
//! required list is empty the handler stops before prompting and returns a warning
//! telling the user what to create first.
//!
//! Handlers return structured [`CmdResult`]s and never print.

use crate::model::Table;

pub mod departments;
pub mod employees;
pub mod roles;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CmdResult {
    pub table: Option<Table>,
    pub affected_rows: u64,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.table = Some(table);
        self
    }

    pub fn with_affected_rows(mut self, affected: u64) -> Self {
        self.affected_rows = affected;
        self
    }
}
