use super::{Choice, Prompter, Validator};
use crate::error::{Result, TrackerError};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

/// Interactive prompter for a real terminal.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

fn prompt_error(e: dialoguer::Error) -> TrackerError {
    TrackerError::Prompt(e.to_string())
}

impl Prompter for DialoguerPrompter {
    fn input(&mut self, message: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    fn input_validated(&mut self, message: &str, validator: Validator) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .validate_with(move |input: &String| validator(input))
            .interact_text()
            .map_err(prompt_error)
    }

    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<i64> {
        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
        let idx = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(&labels[..])
            .default(0)
            .interact()
            .map_err(prompt_error)?;
        choices
            .get(idx)
            .map(|c| c.value)
            .ok_or_else(|| TrackerError::Prompt(format!("Selection {} out of range", idx)))
    }
}
