//! Episode wiring: build the environment and agent, run one episode.

use agents::{Agent, FileReadAgent};
use anyhow::{bail, Result};
use brainfuck::BrainfuckEnv;
use episodes::EpisodeFactory;
use std::path::PathBuf;
use tracing::info;

/// Resolved driver configuration.
pub struct Config {
    pub program: PathBuf,
    pub expected: Option<String>,
    pub episodes: Option<PathBuf>,
    pub episode: usize,
    pub memory_capacity: usize,
    pub output_capacity: usize,
}

/// Runs one full episode and returns the total reward.
///
/// # Errors
///
/// Fails when no expected output can be resolved, when the program file
/// cannot be read, or when the environment rejects an action.
pub fn run(config: &Config) -> Result<f32> {
    let expected = resolve_expected(config)?;
    info!(program = %config.program.display(), expected = %expected, "starting episode");

    let mut env = BrainfuckEnv::with_capacities(config.memory_capacity, config.output_capacity);
    env.set_expected_output(expected);
    let mut agent = FileReadAgent::from_path(&config.program)?;

    run_episode(&mut env, &mut agent)
}

/// Drives the environment with the agent until termination or truncation.
///
/// # Errors
///
/// Propagates environment contract errors, e.g. a replayed action with no
/// defined transition.
pub fn run_episode(env: &mut BrainfuckEnv, agent: &mut dyn Agent) -> Result<f32> {
    let (mut observation, _info) = env.reset();
    let mut total_reward = 0.0;

    println!("=== Rendering environment ===");
    env.render();
    println!("=============================");

    loop {
        let action = agent.act(&observation);
        let transition = env.step(action)?;
        total_reward += transition.reward;
        if transition.terminated || transition.truncated {
            info!(
                terminated = transition.terminated,
                truncated = transition.truncated,
                total_reward,
                "episode finished"
            );
            break;
        }
        observation = transition.observation;
    }

    println!("=== Rendering environment ===");
    env.render();
    println!("=============================");

    Ok(total_reward)
}

fn resolve_expected(config: &Config) -> Result<String> {
    if let Some(expected) = &config.expected {
        return Ok(expected.clone());
    }
    if let Some(path) = &config.episodes {
        let factory = EpisodeFactory::new(path)?;
        let episode = factory.episode(config.episode)?;
        info!(problem = %episode.problem, "scoring against episode solution");
        return Ok(episode.solution);
    }
    bail!("an expected output is required: pass --expected or --episodes");
}
