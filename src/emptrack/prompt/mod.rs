//! # Prompt Layer
//!
//! Handlers describe what they need from the user as an ordered batch of
//! [`PromptSpec`]s and get back an [`Answers`] map keyed by field name. How the
//! questions are shown is up to the [`Prompter`]:
//!
//! - [`terminal::DialoguerPrompter`]: arrow-key selection and inline validation on a TTY
//! - [`lines::LinePrompter`]: one answer per line over any reader/writer pair, used
//!   when stdin is piped and throughout the tests
//!
//! A call blocks until every prompt in the batch has an accepted answer. Validated
//! prompts re-ask in place until their validator passes, so invalid input never
//! reaches a handler.

use crate::error::{Result, TrackerError};
use crate::model::Row;
use std::collections::HashMap;
use std::fmt;

pub mod lines;
pub mod terminal;

/// Returns `Err(message)` to reject an answer and re-ask.
pub type Validator = fn(&str) -> std::result::Result<(), String>;

/// One selectable option: what the user sees and the id it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: i64,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Builds a choice list from rows, reading the label and id from the named
    /// columns.
    pub fn from_rows(rows: &[Row], label_column: &str, value_column: &str) -> Result<Vec<Self>> {
        rows.iter()
            .map(|row| Ok(Self::new(row.get_string(label_column)?, row.get_i64(value_column)?)))
            .collect()
    }
}

#[derive(Clone)]
pub enum PromptKind {
    Input,
    Validated(Validator),
    Select(Vec<Choice>),
}

impl fmt::Debug for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptKind::Input => write!(f, "Input"),
            PromptKind::Validated(_) => write!(f, "Validated"),
            PromptKind::Select(choices) => f.debug_tuple("Select").field(choices).finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PromptSpec {
    pub name: String,
    pub message: String,
    pub kind: PromptKind,
}

impl PromptSpec {
    pub fn input(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            kind: PromptKind::Input,
        }
    }

    pub fn validated(
        name: impl Into<String>,
        message: impl Into<String>,
        validator: Validator,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            kind: PromptKind::Validated(validator),
        }
    }

    pub fn select(name: impl Into<String>, message: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            kind: PromptKind::Select(choices),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    Choice(i64),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: HashMap<String, Answer>,
}

impl Answers {
    pub fn insert(&mut self, name: impl Into<String>, answer: Answer) {
        self.values.insert(name.into(), answer);
    }

    pub fn text(&self, name: &str) -> Result<&str> {
        match self.values.get(name) {
            Some(Answer::Text(s)) => Ok(s),
            _ => Err(TrackerError::Prompt(format!("No text answer for `{}`", name))),
        }
    }

    pub fn choice(&self, name: &str) -> Result<i64> {
        match self.values.get(name) {
            Some(Answer::Choice(v)) => Ok(*v),
            _ => Err(TrackerError::Prompt(format!("No selection for `{}`", name))),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Something that can ask the user questions.
///
/// Implementors provide the three primitive interactions; [`Prompter::ask`]
/// runs a batch through them in order.
pub trait Prompter {
    /// Free text, returned as typed
    fn input(&mut self, message: &str) -> Result<String>;

    /// Free text, re-asked until `validator` accepts it
    fn input_validated(&mut self, message: &str, validator: Validator) -> Result<String>;

    /// Single choice, returns the chosen value
    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<i64>;

    fn ask(&mut self, specs: &[PromptSpec]) -> Result<Answers> {
        let mut answers = Answers::default();
        for spec in specs {
            let answer = match &spec.kind {
                PromptKind::Input => Answer::Text(self.input(&spec.message)?),
                PromptKind::Validated(validator) => {
                    Answer::Text(self.input_validated(&spec.message, *validator)?)
                }
                PromptKind::Select(choices) => {
                    if choices.is_empty() {
                        return Err(TrackerError::Prompt(format!(
                            "Nothing to choose from for `{}`",
                            spec.name
                        )));
                    }
                    Answer::Choice(self.select(&spec.message, choices)?)
                }
            };
            answers.insert(spec.name.clone(), answer);
        }
        Ok(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    #[test]
    fn test_choices_from_rows() {
        let rows = vec![
            Row::new().with("id", 3_i64).with("name", "Legal"),
            Row::new().with("id", 7_i64).with("name", "Sales"),
        ];
        let choices = Choice::from_rows(&rows, "name", "id").unwrap();
        assert_eq!(
            choices,
            vec![Choice::new("Legal", 3), Choice::new("Sales", 7)]
        );
    }

    #[test]
    fn test_choices_from_rows_needs_both_columns() {
        let rows = vec![Row::new().with("id", 3_i64)];
        assert!(Choice::from_rows(&rows, "title", "id").is_err());
    }

    #[test]
    fn test_choices_from_no_rows() {
        assert!(Choice::from_rows(&[], "name", "id").unwrap().is_empty());
    }

    #[test]
    fn test_answers_are_typed() {
        let mut answers = Answers::default();
        answers.insert("name", Answer::Text("Engineering".into()));
        answers.insert("department_id", Answer::Choice(1));

        assert_eq!(answers.text("name").unwrap(), "Engineering");
        assert_eq!(answers.choice("department_id").unwrap(), 1);
        assert!(answers.choice("name").is_err());
        assert!(answers.text("missing").is_err());
    }
}
