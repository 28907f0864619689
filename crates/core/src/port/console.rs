// Console Port (Interface)
// The interaction loop talks to the operator only through this trait.

use crate::domain::RosterListing;
use crate::error::{AppError, Result};
use std::collections::VecDeque;

/// Operator console interface
///
/// Implementations:
/// - TerminalConsole: stdin/stdout (infra-terminal crate)
/// - ScriptedConsole: pre-recorded answers (tests)
#[cfg_attr(test, mockall::automock)]
pub trait Console {
    /// Ask the operator for one line of input
    ///
    /// Returns `Ok(None)` when the operator cancelled the prompt.
    ///
    /// # Errors
    /// - AppError::InputClosed if no further input will ever arrive
    /// - AppError::Io if the underlying stream failed
    fn prompt(&mut self, message: &str) -> Result<Option<String>>;

    /// Show a status message
    fn alert(&mut self, message: &str) -> Result<()>;

    /// Clear previously displayed output
    fn clear(&mut self) -> Result<()>;

    /// Render a roster listing
    fn show_listing(&mut self, listing: &RosterListing) -> Result<()>;
}

/// Everything a scripted session showed the operator, in order
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleEvent {
    Prompt(String),
    Alert(String),
    Clear,
    Listing(RosterListing),
}

/// Console fed from a fixed script (for tests)
///
/// Each answer is consumed by one prompt; `None` answers act as a cancelled
/// prompt. Once the script runs out, prompts fail with `InputClosed`.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<Option<String>>,
    transcript: Vec<ConsoleEvent>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| Some(a.into())).collect(),
            transcript: Vec::new(),
        }
    }

    /// Queue another answer
    pub fn answer(mut self, line: impl Into<String>) -> Self {
        self.answers.push_back(Some(line.into()));
        self
    }

    /// Queue a cancelled prompt
    pub fn cancel(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    pub fn transcript(&self) -> &[ConsoleEvent] {
        &self.transcript
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn alerts(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|event| match event {
                ConsoleEvent::Alert(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn listings(&self) -> Vec<&RosterListing> {
        self.transcript
            .iter()
            .filter_map(|event| match event {
                ConsoleEvent::Listing(listing) => Some(listing),
                _ => None,
            })
            .collect()
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        self.transcript.push(ConsoleEvent::Prompt(message.to_string()));
        self.answers.pop_front().ok_or(AppError::InputClosed)
    }

    fn alert(&mut self, message: &str) -> Result<()> {
        self.transcript.push(ConsoleEvent::Alert(message.to_string()));
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.transcript.push(ConsoleEvent::Clear);
        Ok(())
    }

    fn show_listing(&mut self, listing: &RosterListing) -> Result<()> {
        self.transcript.push(ConsoleEvent::Listing(listing.clone()));
        Ok(())
    }
}
