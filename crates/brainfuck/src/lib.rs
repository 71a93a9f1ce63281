#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Brainfuck execution environment
//!
//! A restricted Brainfuck interpreter packaged as a step-based
//! reinforcement-learning environment. An external agent feeds the
//! environment one instruction per step; the environment mutates a bounded
//! memory tape and an output buffer and hands back an observation snapshot,
//! a per-step penalty, and episode-termination flags. When the agent signals
//! the end of its program (a no-op action) the environment scores the
//! accumulated output against an expected string using the Levenshtein edit
//! distance.
//!
//! ## Key Components
//!
//! -   **Tape:** [`Memory`] is a fixed-length, bounds-checked array of
//!     signed cells. It performs no clamping of its own; the environment
//!     owns the saturation policy.
//! -   **Output:** [`OutputBuffer`] is a fixed-capacity, tail-saturating
//!     write queue. Once full, further writes keep overwriting the last
//!     slot rather than wrapping or growing.
//! -   **Actions:** [`Action`] is the closed nine-symbol instruction set.
//!     [`Action::from_char`] is total: unknown characters map to
//!     [`Action::Nop`].
//! -   **Environment:** [`BrainfuckEnv`] ties the pieces together and
//!     exposes the `reset`/`step`/`render` protocol.
//!
//! ## Usage
//!
//! ```rust
//! use brainfuck::{Action, BrainfuckEnv};
//!
//! let mut env = BrainfuckEnv::new();
//! env.set_expected_output("H");
//! let (_obs, _info) = env.reset();
//! for _ in 0..72 {
//!     env.step(Action::IncrementValue).unwrap();
//! }
//! env.step(Action::Output).unwrap();
//! let transition = env.step(Action::Nop).unwrap();
//! assert!(transition.terminated);
//! ```

pub mod action;
pub mod distance;
pub mod env;
pub mod error;
pub mod memory;
pub mod output;

pub use action::Action;
pub use distance::levenshtein;
pub use env::{BrainfuckEnv, Observation, Transition};
pub use error::EnvError;
pub use memory::Memory;
pub use output::OutputBuffer;
