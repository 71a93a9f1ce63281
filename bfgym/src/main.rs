#![deny(clippy::all, clippy::pedantic)]
//! # bfgym
//!
//! Entry point for the Brainfuck gym driver.
//!
//! Wires an execution environment to the file-replay agent: the agent walks
//! a Brainfuck source file one character per step, and the environment
//! scores the produced output against an expected string at the end of the
//! episode. The expected string comes either from `--expected` or from a
//! JSON-lines episode file.

mod app;

use anyhow::Result;
use brainfuck::env::{DEFAULT_MEMORY_CAPACITY, DEFAULT_OUTPUT_CAPACITY};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Replay a Brainfuck program through the gym environment")]
struct Args {
    /// Brainfuck source file replayed one character per step.
    #[arg(long, default_value = "programs/print_h.bf")]
    program: PathBuf,

    /// Expected output the final reward is scored against.
    #[arg(long, conflicts_with = "episodes")]
    expected: Option<String>,

    /// JSON-lines episode file supplying the expected output.
    #[arg(long)]
    episodes: Option<PathBuf>,

    /// Zero-based record index into the episode file.
    #[arg(long, default_value_t = 0, requires = "episodes")]
    episode: usize,

    /// Tape length of the environment.
    #[arg(long, default_value_t = DEFAULT_MEMORY_CAPACITY)]
    memory_capacity: usize,

    /// Output buffer length of the environment.
    #[arg(long, default_value_t = DEFAULT_OUTPUT_CAPACITY)]
    output_capacity: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = app::Config {
        program: args.program,
        expected: args.expected,
        episodes: args.episodes,
        episode: args.episode,
        memory_capacity: args.memory_capacity,
        output_capacity: args.output_capacity,
    };
    let total_reward = app::run(&config)?;
    println!("Total Reward = {total_reward}");
    Ok(())
}
