use crate::ports::outbound::ConfirmationPrompt;
use std::io::{self, BufRead, Write};

/// StdinConfirmationPrompt adapter - asks on stderr, reads the answer from stdin
///
/// Only `y` or `yes` (any case) confirms. EOF, read errors and anything
/// else count as a no.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirmationPrompt;

impl StdinConfirmationPrompt {
    pub fn new() -> Self {
        Self
    }

    fn is_yes(answer: &str) -> bool {
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

impl ConfirmationPrompt for StdinConfirmationPrompt {
    fn confirm(&self, question: &str) -> bool {
        eprint!("⚠️  {} [y/N] ", question);
        if io::stderr().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => Self::is_yes(&answer),
        }
    }
}

/// AssumeYes adapter - confirms without asking (`--yes`)
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl ConfirmationPrompt for AssumeYes {
    fn confirm(&self, question: &str) -> bool {
        tracing::debug!(question, "confirmation assumed");
        true
    }
}

/// Either prompt, chosen at runtime from CLI flags.
#[derive(Debug, Clone, Copy)]
pub enum ConsoleConfirmation {
    Ask(StdinConfirmationPrompt),
    Assume(AssumeYes),
}

impl ConsoleConfirmation {
    pub fn new(assume_yes: bool) -> Self {
        if assume_yes {
            ConsoleConfirmation::Assume(AssumeYes)
        } else {
            ConsoleConfirmation::Ask(StdinConfirmationPrompt::new())
        }
    }
}

impl ConfirmationPrompt for ConsoleConfirmation {
    fn confirm(&self, question: &str) -> bool {
        match self {
            ConsoleConfirmation::Ask(prompt) => prompt.confirm(question),
            ConsoleConfirmation::Assume(prompt) => prompt.confirm(question),
        }
    }
}
