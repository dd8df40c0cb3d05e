//! Numbered single-choice prompts.
//!
//! The prompt renders a raw list:
//!
//! ```text
//! ? Choose the mode:
//!   1) local
//!   2) action
//!   Answer:
//! ```
//!
//! An answer is either the 1-based number or the exact label. Anything else,
//! including an empty line, prints the validation message and asks again.

use std::io::{BufRead, Write};

use crate::error::{DepbotError, Result};
use crate::types::{Interval, Mode, Selection};

pub const MODE_MESSAGE: &str = "Choose the mode:";
pub const MODE_REQUIRED: &str = "You must choose a mode.";
pub const INTERVAL_MESSAGE: &str = "Set the interval for Dependabot updates:";
pub const INTERVAL_REQUIRED: &str = "You must choose an interval.";

pub struct ChoicePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ChoicePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask until a valid choice is made. Returns the index into `choices`.
    ///
    /// `what` names the answer in the error returned when input ends early.
    pub fn choose(
        &mut self,
        message: &str,
        choices: &[&str],
        required: &str,
        what: &str,
    ) -> Result<usize> {
        writeln!(self.output, "? {message}")?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, choice)?;
        }

        loop {
            write!(self.output, "  Answer: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(DepbotError::PromptClosed(what.to_string()));
            }

            match parse_answer(line.trim(), choices) {
                Some(idx) => return Ok(idx),
                None => writeln!(self.output, ">> {required}")?,
            }
        }
    }

    pub fn choose_mode(&mut self) -> Result<Mode> {
        let labels: Vec<&str> = Mode::all().iter().map(|m| m.as_str()).collect();
        let idx = self.choose(MODE_MESSAGE, &labels, MODE_REQUIRED, "mode")?;
        Ok(Mode::all()[idx])
    }

    pub fn choose_interval(&mut self) -> Result<Interval> {
        let labels: Vec<&str> = Interval::all().iter().map(|i| i.as_str()).collect();
        let idx = self.choose(INTERVAL_MESSAGE, &labels, INTERVAL_REQUIRED, "interval")?;
        Ok(Interval::all()[idx])
    }
}

fn parse_answer(answer: &str, choices: &[&str]) -> Option<usize> {
    if answer.is_empty() {
        return None;
    }
    if let Ok(n) = answer.parse::<usize>() {
        return (1..=choices.len()).contains(&n).then(|| n - 1);
    }
    choices.iter().position(|c| *c == answer)
}

/// Build a [`Selection`], prompting only for the fields not already given.
pub fn prompt_selection<R: BufRead, W: Write>(
    prompt: &mut ChoicePrompt<R, W>,
    mode: Option<Mode>,
    interval: Option<Interval>,
) -> Result<Selection> {
    let mode = match mode {
        Some(m) => m,
        None => prompt.choose_mode()?,
    };
    let interval = match interval {
        Some(i) => i,
        None => prompt.choose_interval()?,
    };
    Ok(Selection::new(mode, interval))
}
