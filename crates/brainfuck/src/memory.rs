use crate::error::EnvError;

/// The classical Brainfuck tape length.
pub const CLASSIC_TAPE_CAPACITY: usize = 30_000;

/// Fixed-length tape of signed cells with bounds-checked random access.
///
/// The tape is a dumb bounded store: it rejects out-of-range indices as a
/// contract error but performs no value clamping of its own. The clamp
/// policy lives in the environment, which is the tape's only caller.
#[derive(Debug, Clone)]
pub struct Memory {
    cells: Vec<i64>,
}

impl Memory {
    /// Creates a zero-filled tape with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { cells: vec![0; capacity] }
    }

    /// Reads the cell at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::OutOfBounds`] when `index` is not in
    /// `[0, capacity)`.
    pub fn get(&self, index: usize) -> Result<i64, EnvError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(EnvError::OutOfBounds { index, capacity: self.cells.len() })
    }

    /// Writes `value` to the cell at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::OutOfBounds`] when `index` is not in
    /// `[0, capacity)`.
    pub fn set(&mut self, index: usize, value: i64) -> Result<(), EnvError> {
        let capacity = self.cells.len();
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(EnvError::OutOfBounds { index, capacity }),
        }
    }

    /// Number of cells; immutable after construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// The whole tape, for observation snapshots.
    #[must_use]
    pub fn cells(&self) -> &[i64] {
        &self.cells
    }

    /// Zero-fills every cell, keeping the capacity.
    pub fn reset(&mut self) {
        self.cells.fill(0);
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(CLASSIC_TAPE_CAPACITY)
    }
}
