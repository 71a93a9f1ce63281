use crate::action::Action;
use thiserror::Error;

/// Contract violations surfaced by the environment and its tape.
///
/// Saturation (pointer at a tape edge, cell at the value clamp, output
/// buffer full) is deliberately *not* represented here: those conditions
/// are absorbed silently so that every action stays legal in every state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("memory index {index} out of bounds for capacity {capacity}")]
    OutOfBounds { index: usize, capacity: usize },
    #[error("no transition defined for action {0:?}")]
    UnsupportedAction(Action),
    #[error("expected output was never configured")]
    MissingExpectedOutput,
}
