#![deny(clippy::all, clippy::pedantic)]
//! JSON-lines episode records.
//!
//! An episode is a problem statement paired with the exact output a correct
//! program should produce. Records are stored one JSON object per line, as
//! written by the offline generation pipeline, and consumed here to supply
//! the environment's expected output.

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// One problem/solution pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Natural-language problem statement.
    pub problem: String,
    /// The exact text a solving program must print.
    pub solution: String,
}

/// Streams [`Episode`] records from a `.jsonl` file.
pub struct EpisodeFactory {
    file_path: PathBuf,
}

impl EpisodeFactory {
    /// Validates the episodes file path.
    ///
    /// # Errors
    ///
    /// Fails when the path does not end in `.jsonl` or does not exist.
    pub fn new(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        ensure!(
            file_path.extension().is_some_and(|ext| ext == "jsonl"),
            "episodes file needs to be a jsonl: {}",
            file_path.display()
        );
        ensure!(
            file_path.exists(),
            "episodes file does not exist, check the path: {}",
            file_path.display()
        );
        Ok(Self { file_path })
    }

    /// The validated file path.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Lazily yields every record in file order.
    ///
    /// Each item is its own `Result` so a malformed line surfaces where it
    /// occurs instead of discarding the records before it.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be opened.
    pub fn episodes(&self) -> Result<impl Iterator<Item = Result<Episode>> + '_> {
        let file = File::open(&self.file_path)
            .with_context(|| format!("failed to open {}", self.file_path.display()))?;
        let reader = BufReader::new(file);
        Ok(reader.lines().enumerate().map(|(number, line)| {
            let line = line.context("failed to read episodes file")?;
            serde_json::from_str(&line)
                .with_context(|| format!("malformed episode record on line {}", number + 1))
        }))
    }

    /// Reads the record at `index` (zero-based, file order).
    ///
    /// # Errors
    ///
    /// Fails on I/O or parse errors, or when the file has no such line.
    pub fn episode(&self, index: usize) -> Result<Episode> {
        self.episodes()?
            .nth(index)
            .with_context(|| {
                format!("no episode at index {index} in {}", self.file_path.display())
            })?
    }
}
