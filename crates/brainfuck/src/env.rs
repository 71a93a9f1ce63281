use crate::action::Action;
use crate::distance::levenshtein;
use crate::error::EnvError;
use crate::memory::Memory;
use crate::output::OutputBuffer;
use std::collections::HashMap;

/// Default tape length. The classical size is 30000; the environment keeps
/// a shorter tape so the observation stays small.
pub const DEFAULT_MEMORY_CAPACITY: usize = 1000;
/// Default output buffer length.
pub const DEFAULT_OUTPUT_CAPACITY: usize = 100;
/// Step budget before an episode is truncated.
pub const MAX_STEPS: usize = 100;
/// Reward handed back for every executed instruction.
pub const INSTRUCTION_PENALTY: f32 = -0.1;

const ASCII_MAX_VALUE: i64 = 256;
const COUNTER_MAX_VALUE: i64 = 1001;

/// Auxiliary per-transition information. Currently always empty.
pub type Info = HashMap<String, String>;

/// Owned snapshot of the environment state.
///
/// Produced fresh on every `reset` and `step` by copying the live state, so
/// callers may hold on to it across further mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// Current tape cursor, in `[0, memory.len())`.
    pub pointer: usize,
    /// Full tape contents.
    pub memory: Vec<i64>,
    /// Full output buffer contents, zero padding included.
    pub standard_output: Vec<i64>,
}

/// Result of one `step` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub observation: Observation,
    pub reward: f32,
    /// True only for the [`Action::Nop`] end-of-program transition.
    pub terminated: bool,
    /// True once the step budget is exhausted.
    pub truncated: bool,
    pub info: Info,
}

/// Moves `value` by `delta`, clamping the result to `[floor, ceil]`.
///
/// Shared by pointer movement and cell mutation so the silent-saturation
/// boundary policy lives in exactly one place.
const fn clamped_step(value: i64, delta: i64, floor: i64, ceil: i64) -> i64 {
    let moved = value.saturating_add(delta);
    if moved < floor {
        floor
    } else if moved > ceil {
        ceil
    } else {
        moved
    }
}

/// Restricted Brainfuck interpreter exposed as a step-based environment.
///
/// One action is executed per [`step`] call. Pointer and cell mutations
/// saturate at their bounds instead of wrapping or erroring, which keeps
/// every implemented action legal in every state. An episode ends either
/// naturally, when the agent plays [`Action::Nop`], or by truncation after
/// [`MAX_STEPS`] steps. Only the natural ending carries the shaped terminal
/// reward, computed from the edit distance between the produced output and
/// the configured expected output.
///
/// [`step`]: BrainfuckEnv::step
#[derive(Debug, Clone)]
pub struct BrainfuckEnv {
    memory: Memory,
    standard_output: OutputBuffer,
    pointer: usize,
    current_step: usize,
    max_steps: usize,
    value_clamp: i64,
    max_reward: f32,
    expected_output: Option<String>,
}

impl BrainfuckEnv {
    /// Creates an environment with the default capacities.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacities(DEFAULT_MEMORY_CAPACITY, DEFAULT_OUTPUT_CAPACITY)
    }

    /// Creates an environment with explicit tape and output capacities.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn with_capacities(memory_capacity: usize, output_capacity: usize) -> Self {
        let value_clamp = ASCII_MAX_VALUE.max((COUNTER_MAX_VALUE - 1) / 2);
        let max_reward = -(MAX_STEPS as f32 * INSTRUCTION_PENALTY) * 10.0;
        Self {
            memory: Memory::new(memory_capacity),
            standard_output: OutputBuffer::new(output_capacity),
            pointer: 0,
            current_step: 0,
            max_steps: MAX_STEPS,
            value_clamp,
            max_reward,
            expected_output: None,
        }
    }

    /// Configures the string the final reward is scored against.
    ///
    /// Must be called before the episode reaches its [`Action::Nop`]
    /// transition; reaching it unconfigured is a fatal misconfiguration,
    /// not a comparison against the empty string.
    pub fn set_expected_output(&mut self, expected: impl Into<String>) {
        self.expected_output = Some(expected.into());
    }

    /// Tape length, fixed at construction.
    #[must_use]
    pub fn memory_capacity(&self) -> usize {
        self.memory.capacity()
    }

    /// Output buffer length, fixed at construction.
    #[must_use]
    pub fn output_capacity(&self) -> usize {
        self.standard_output.capacity()
    }

    /// Reinitializes tape, output buffer, pointer and step counter.
    ///
    /// Always succeeds and returns a fresh observation plus an empty info
    /// map. The expected output survives a reset; it is configuration, not
    /// episode state.
    pub fn reset(&mut self) -> (Observation, Info) {
        self.pointer = 0;
        self.current_step = 0;
        self.memory.reset();
        self.standard_output.reset();
        (self.observation(), Info::new())
    }

    /// Executes one action.
    ///
    /// [`Action::Nop`] terminates the episode and yields the terminal
    /// reward `min(0, max_reward - d)` where `d` is the edit distance
    /// between the rendered output buffer and the expected output. Every
    /// other implemented action mutates the state, costs
    /// [`INSTRUCTION_PENALTY`], and reports truncation once the step budget
    /// is spent.
    ///
    /// # Errors
    ///
    /// - [`EnvError::UnsupportedAction`] for [`Action::Input`],
    ///   [`Action::StartLoop`] and [`Action::EndLoop`], which have no
    ///   defined transition.
    /// - [`EnvError::MissingExpectedOutput`] when [`Action::Nop`] arrives
    ///   before [`set_expected_output`] was called.
    /// - [`EnvError::OutOfBounds`] only on an internal pointer contract
    ///   violation; unreachable through this API.
    ///
    /// [`set_expected_output`]: BrainfuckEnv::set_expected_output
    pub fn step(&mut self, action: Action) -> Result<Transition, EnvError> {
        self.current_step += 1;

        match action {
            Action::Nop => {
                let reward = self.final_reward()?;
                tracing::debug!(step = self.current_step, reward, "episode terminated");
                return Ok(Transition {
                    observation: self.observation(),
                    reward,
                    terminated: true,
                    truncated: false,
                    info: Info::new(),
                });
            }
            Action::IncrementPointer => self.move_pointer(1),
            Action::DecrementPointer => self.move_pointer(-1),
            Action::IncrementValue => self.adjust_value(1)?,
            Action::DecrementValue => self.adjust_value(-1)?,
            Action::Output => {
                let value = self.memory.get(self.pointer)?;
                self.standard_output.write(value);
            }
            Action::Input | Action::StartLoop | Action::EndLoop => {
                return Err(EnvError::UnsupportedAction(action));
            }
        }

        let truncated = self.current_step >= self.max_steps;
        if truncated {
            tracing::debug!(step = self.current_step, "episode truncated");
        }
        Ok(Transition {
            observation: self.observation(),
            reward: INSTRUCTION_PENALTY,
            terminated: false,
            truncated,
            info: Info::new(),
        })
    }

    /// Prints the decoded output buffer. Display only, no state change.
    pub fn render(&self) {
        println!("{}", self.standard_output.read());
    }

    #[allow(clippy::cast_precision_loss)]
    fn final_reward(&self) -> Result<f32, EnvError> {
        let expected = self
            .expected_output
            .as_deref()
            .ok_or(EnvError::MissingExpectedOutput)?;
        let distance = levenshtein(&self.standard_output.read(), expected);
        Ok(f32::min(0.0, self.max_reward - distance as f32))
    }

    #[allow(
        clippy::cast_possible_wrap,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn move_pointer(&mut self, delta: i64) {
        let ceil = (self.memory.capacity() as i64 - 1).max(0);
        let moved = clamped_step(self.pointer as i64, delta, 0, ceil);
        self.pointer = moved as usize;
    }

    fn adjust_value(&mut self, delta: i64) -> Result<(), EnvError> {
        let value = self.memory.get(self.pointer)?;
        let moved = clamped_step(value, delta, -self.value_clamp, self.value_clamp);
        self.memory.set(self.pointer, moved)
    }

    fn observation(&self) -> Observation {
        Observation {
            pointer: self.pointer,
            memory: self.memory.cells().to_vec(),
            standard_output: self.standard_output.raw().to_vec(),
        }
    }
}

impl Default for BrainfuckEnv {
    fn default() -> Self {
        Self::new()
    }
}
