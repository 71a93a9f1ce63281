#![deny(clippy::all, clippy::pedantic)]
//! Agents that drive the Brainfuck environment.
//!
//! The only agent in scope is [`FileReadAgent`], which replays a program
//! file one character per step and signals end-of-program with
//! [`Action::Nop`] once the text is exhausted.

use anyhow::{Context, Result};
use brainfuck::{Action, Observation};
use std::fs;
use std::path::Path;

/// A policy choosing one action per environment step.
pub trait Agent {
    /// Picks the next action given the latest observation.
    fn act(&mut self, observation: &Observation) -> Action;

    /// Rewinds the agent for a fresh episode.
    fn reset(&mut self);
}

/// Replays a Brainfuck source file one character at a time.
///
/// The whole program text is read once at construction. Each [`act`] call
/// maps the next character through [`Action::from_char`]; after the last
/// character the agent emits [`Action::Nop`] forever, which the environment
/// treats as the unconditional end-of-episode signal.
///
/// [`act`]: Agent::act
pub struct FileReadAgent {
    content: Vec<char>,
    cursor: usize,
}

impl FileReadAgent {
    /// Reads the program at `path`.
    ///
    /// # Errors
    ///
    /// Propagates the underlying I/O error when the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read program file {}", path.display()))?;
        Ok(Self::from_source(&content))
    }

    /// Wraps an in-memory program text.
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        Self { content: source.chars().collect(), cursor: 0 }
    }

    /// Number of characters left to replay.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.content.len().saturating_sub(self.cursor)
    }
}

impl Agent for FileReadAgent {
    fn act(&mut self, _observation: &Observation) -> Action {
        match self.content.get(self.cursor) {
            Some(&c) => {
                self.cursor += 1;
                Action::from_char(c)
            }
            None => Action::Nop,
        }
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}
