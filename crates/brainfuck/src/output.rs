/// Fixed-capacity, tail-saturating write queue for produced characters.
///
/// The buffer never grows and never wraps: while the write cursor is inside
/// the buffer each write lands at the cursor, and once the cursor has
/// reached or passed the last index every further write overwrites the last
/// slot. Writes therefore become lossy at capacity but never fail. Unwritten
/// slots stay zero, so [`read`] always renders the full capacity, padded
/// with NUL characters.
///
/// [`read`]: OutputBuffer::read
#[derive(Debug, Clone)]
pub struct OutputBuffer {
    slots: Vec<i64>,
    cursor: usize,
}

impl OutputBuffer {
    /// Creates a zero-filled buffer with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { slots: vec![0; capacity], cursor: 0 }
    }

    /// Appends `value`, overwriting the last slot once the buffer is full.
    pub fn write(&mut self, value: i64) {
        if let Some(slot) = self.slots.get_mut(self.cursor) {
            *slot = value;
        } else if let Some(last) = self.slots.last_mut() {
            *last = value;
        }
        self.cursor += 1;
    }

    /// Renders every slot as a character, zero padding included.
    ///
    /// Stored values are interpreted as character codes; a value with no
    /// `char` mapping (negative, or beyond the Unicode range) renders as
    /// U+FFFD. The result always has `capacity` characters.
    #[must_use]
    pub fn read(&self) -> String {
        self.slots
            .iter()
            .map(|&code| {
                u32::try_from(code)
                    .ok()
                    .and_then(char::from_u32)
                    .unwrap_or(char::REPLACEMENT_CHARACTER)
            })
            .collect()
    }

    /// The raw slots, for observation snapshots.
    #[must_use]
    pub fn raw(&self) -> &[i64] {
        &self.slots
    }

    /// Number of slots; immutable after construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Zero-fills the slots and rewinds the cursor.
    pub fn reset(&mut self) {
        self.slots.fill(0);
        self.cursor = 0;
    }
}
