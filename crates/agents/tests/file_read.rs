use agents::{Agent, FileReadAgent};
use brainfuck::{Action, BrainfuckEnv};

fn dummy_observation() -> brainfuck::Observation {
    let mut env = BrainfuckEnv::with_capacities(1, 1);
    env.reset().0
}

#[test]
fn replays_characters_in_order() {
    let obs = dummy_observation();
    let mut agent = FileReadAgent::from_source("+>-.");
    assert_eq!(agent.act(&obs), Action::IncrementValue);
    assert_eq!(agent.act(&obs), Action::IncrementPointer);
    assert_eq!(agent.act(&obs), Action::DecrementValue);
    assert_eq!(agent.act(&obs), Action::Output);
}

#[test]
fn emits_nop_forever_once_exhausted() {
    let obs = dummy_observation();
    let mut agent = FileReadAgent::from_source("+");
    agent.act(&obs);
    for _ in 0..5 {
        assert_eq!(agent.act(&obs), Action::Nop);
    }
    assert_eq!(agent.remaining(), 0);
}

#[test]
fn comment_characters_replay_as_nop() {
    let obs = dummy_observation();
    let mut agent = FileReadAgent::from_source("x+");
    // The unknown character maps to Nop mid-program; a replayed episode
    // would terminate right there.
    assert_eq!(agent.act(&obs), Action::Nop);
}

#[test]
fn reset_rewinds_to_the_start() {
    let obs = dummy_observation();
    let mut agent = FileReadAgent::from_source("+-");
    agent.act(&obs);
    agent.act(&obs);
    agent.reset();
    assert_eq!(agent.act(&obs), Action::IncrementValue);
    assert_eq!(agent.remaining(), 1);
}

#[test]
fn reads_program_from_disk() {
    let agent = FileReadAgent::from_path("tests/data/print_h.bf").unwrap();
    assert_eq!(agent.remaining(), 73);
}

#[test]
fn missing_file_propagates_the_io_error() {
    let err = FileReadAgent::from_path("tests/data/no_such_program.bf");
    assert!(err.is_err());
}
