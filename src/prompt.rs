use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::models::Item;
use crate::ui::util::format_amount;

/// The user's answer to a destructive-action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    Cancel,
    Confirm,
}

impl Decision {
    /// Read a typed answer. Only an explicit yes/ok confirms; anything else,
    /// including an empty line, cancels.
    pub(crate) fn from_answer(answer: &str) -> Self {
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" | "ok" => Self::Confirm,
            _ => Self::Cancel,
        }
    }
}

/// What the user is being asked to confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Confirmation {
    pub(crate) title: &'static str,
    pub(crate) message: String,
    pub(crate) subject: String,
}

impl Confirmation {
    pub(crate) fn remove_item(item: &Item) -> Self {
        Self {
            title: "Delete item",
            message: "Are you sure you want to remove this item?".into(),
            subject: format!("{} - {}", item.text, format_amount(item.price)),
        }
    }
}

pub(crate) trait Prompt {
    fn confirm(&mut self, request: &Confirmation) -> Result<Decision>;
}

/// Asks on a line-oriented stream, `[y/N]` style.
pub(crate) struct LinePrompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> LinePrompt<'a, R, W> {
    pub(crate) fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<'_, R, W> {
    fn confirm(&mut self, request: &Confirmation) -> Result<Decision> {
        writeln!(self.output, "{}: {}", request.title, request.subject)?;
        write!(self.output, "{} [y/N] ", request.message)?;
        self.output.flush()?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .context("Failed to read confirmation")?;
        if read == 0 {
            // EOF cancels
            writeln!(self.output)?;
            return Ok(Decision::Cancel);
        }
        Ok(Decision::from_answer(&answer))
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
