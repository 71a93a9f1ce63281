/// The closed Brainfuck instruction set, plus a no-op end-of-program marker.
///
/// Only the first six actions have executable semantics in the environment;
/// [`Input`], [`StartLoop`] and [`EndLoop`] are part of the language's
/// alphabet but carry no transition and are rejected at dispatch.
///
/// [`Input`]: Action::Input
/// [`StartLoop`]: Action::StartLoop
/// [`EndLoop`]: Action::EndLoop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// End of program; the unique terminating action.
    Nop,
    /// `>` — move the pointer right, saturating at the tape's end.
    IncrementPointer,
    /// `<` — move the pointer left, saturating at zero.
    DecrementPointer,
    /// `+` — increment the current cell, saturating at the clamp ceiling.
    IncrementValue,
    /// `-` — decrement the current cell, saturating at the clamp floor.
    DecrementValue,
    /// `.` — append the current cell to the output buffer.
    Output,
    /// `,` — reserved, no transition defined.
    Input,
    /// `[` — reserved, no transition defined.
    StartLoop,
    /// `]` — reserved, no transition defined.
    EndLoop,
}

impl Action {
    /// Every action, in discrete-index order.
    pub const ALL: [Self; 9] = [
        Self::Nop,
        Self::IncrementPointer,
        Self::DecrementPointer,
        Self::IncrementValue,
        Self::DecrementValue,
        Self::Output,
        Self::Input,
        Self::StartLoop,
        Self::EndLoop,
    ];

    /// Total mapping from a source character to an action.
    ///
    /// The eight Brainfuck symbols map to their instruction; every other
    /// character, comments and end-of-input included, maps to [`Action::Nop`].
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        match c {
            '>' => Self::IncrementPointer,
            '<' => Self::DecrementPointer,
            '+' => Self::IncrementValue,
            '-' => Self::DecrementValue,
            '.' => Self::Output,
            ',' => Self::Input,
            '[' => Self::StartLoop,
            ']' => Self::EndLoop,
            _ => Self::Nop,
        }
    }

    /// Stable discrete encoding, 0 through 8.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Nop => 0,
            Self::IncrementPointer => 1,
            Self::DecrementPointer => 2,
            Self::IncrementValue => 3,
            Self::DecrementValue => 4,
            Self::Output => 5,
            Self::Input => 6,
            Self::StartLoop => 7,
            Self::EndLoop => 8,
        }
    }
}
