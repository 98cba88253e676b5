//! User input and interaction handling.
//! Prompts are issued through the [`Prompter`] trait so the argument resolution
//! loop can run against a terminal or a scripted source alike.

use crate::error::{Error, Result};
use dialoguer::{Input, Select};

/// Source of interactive answers.
pub trait Prompter {
    /// Asks the user to pick one of `items` and returns its index.
    fn select(&self, prompt: String, items: &[String]) -> Result<usize>;

    /// Asks the user for a line of text.
    fn input(&self, prompt: String) -> Result<String>;
}

/// Terminal prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: String, items: &[String]) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .default(0)
            .items(items)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn input(&self, prompt: String) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
