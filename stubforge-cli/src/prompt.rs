//! Interactive prompts and console output
//!
//! Commands only talk to the user through [`Prompter`], so the question flow can
//! be driven by [`crate::testing::ScriptedPrompter`] in tests and by
//! [`TerminalPrompter`] for real.

use console::{style, Emoji};
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Input, MultiSelect};

use crate::config::PromptTheme;
use crate::error::{Result, ScaffoldError};

static SUCCESS: Emoji<'_, '_> = Emoji("✓ ", "");
static FAILURE: Emoji<'_, '_> = Emoji("✗ ", "");

/// Question and message primitives used by the commands
///
/// Each question blocks until a single answer is given.
pub trait Prompter {
    /// Ask a yes/no question
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Prompt`] if the question cannot be asked.
    fn confirm(&mut self, question: &str) -> Result<bool>;

    /// Ask for free text; an empty answer is allowed
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Prompt`] if the question cannot be asked.
    fn input(&mut self, question: &str) -> Result<String>;

    /// Ask for any number of items, returning the chosen indices
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Prompt`] if the question cannot be asked.
    fn multi_select(&mut self, question: &str, items: &[&str]) -> Result<Vec<usize>>;

    /// Print an informational line
    fn info(&mut self, message: &str);

    /// Print an error line
    fn error(&mut self, message: &str);

    /// Print a success line
    fn success(&mut self, message: &str);
}

/// Prompter backed by the terminal
pub struct TerminalPrompter {
    theme: Box<dyn Theme>,
}

impl TerminalPrompter {
    /// Create a prompter using the given theme
    #[must_use]
    pub fn new(theme: PromptTheme) -> Self {
        let theme: Box<dyn Theme> = match theme {
            PromptTheme::Colorful => Box::new(ColorfulTheme::default()),
            PromptTheme::Plain => Box::new(SimpleTheme),
        };

        Self { theme }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new(PromptTheme::default())
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        Confirm::with_theme(&*self.theme)
            .with_prompt(question)
            .default(false)
            .interact()
            .map_err(ScaffoldError::prompt)
    }

    fn input(&mut self, question: &str) -> Result<String> {
        Input::<String>::with_theme(&*self.theme)
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map_err(ScaffoldError::prompt)
    }

    fn multi_select(&mut self, question: &str, items: &[&str]) -> Result<Vec<usize>> {
        MultiSelect::with_theme(&*self.theme)
            .with_prompt(question)
            .items(items)
            .interact()
            .map_err(ScaffoldError::prompt)
    }

    fn info(&mut self, message: &str) {
        println!("{}", style(message).cyan());
    }

    fn error(&mut self, message: &str) {
        eprintln!("{}{}", FAILURE, style(message).red().bold());
    }

    fn success(&mut self, message: &str) {
        println!("{}{}", SUCCESS, style(message).green().bold());
    }
}
