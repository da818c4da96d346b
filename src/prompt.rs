//! User input and interaction handling.
//! Interactive prompts are backed by dialoguer; [`DefaultPrompter`] answers
//! every question with its default for unattended runs.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Input, Select};

/// Validation hook applied to free-text answers.
pub type Validator = fn(&str) -> Result<()>;

/// Asks the user questions, each with a default used on empty input.
pub trait Prompter {
    /// Free-text question. `validate`, when given, is applied until it passes.
    fn text(&self, help: &str, default: &str, validate: Option<Validator>) -> Result<String>;

    /// Yes/no question.
    fn confirm(&self, help: &str, default: bool) -> Result<bool>;

    /// Single choice among `choices`, returns the selected index.
    fn select(&self, help: &str, choices: &[&str], default: usize) -> Result<usize>;
}

/// Terminal prompter.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, help: &str, default: &str, validate: Option<Validator>) -> Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(help)
            .default(default.to_string());

        if let Some(validate) = validate {
            input = input.validate_with(move |value: &String| -> std::result::Result<(), String> {
                validate(value).map_err(|e| e.to_string())
            });
        }

        let value = input.interact_text().map_err(|e| Error::PromptError(e.to_string()))?;
        Ok(value.trim().to_string())
    }

    fn confirm(&self, help: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(help)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn select(&self, help: &str, choices: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(help)
            .default(default)
            .items(choices)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Answers every question with its default, still running validators.
#[derive(Debug, Default)]
pub struct DefaultPrompter;

impl DefaultPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DefaultPrompter {
    fn text(&self, _help: &str, default: &str, validate: Option<Validator>) -> Result<String> {
        if let Some(validate) = validate {
            validate(default)?;
        }
        Ok(default.to_string())
    }

    fn confirm(&self, _help: &str, default: bool) -> Result<bool> {
        Ok(default)
    }

    fn select(&self, _help: &str, choices: &[&str], default: usize) -> Result<usize> {
        if default >= choices.len() {
            return Err(Error::PromptError(format!(
                "default choice {default} out of range"
            )));
        }
        Ok(default)
    }
}
