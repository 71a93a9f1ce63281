use brainfuck::{EnvError, Memory};

#[test]
fn starts_zero_filled() {
    let mem = Memory::new(8);
    assert_eq!(mem.capacity(), 8);
    assert!(mem.cells().iter().all(|&c| c == 0));
}

#[test]
fn set_then_get_round_trips() {
    let mut mem = Memory::new(4);
    mem.set(2, -17).unwrap();
    assert_eq!(mem.get(2).unwrap(), -17);
    assert_eq!(mem.get(3).unwrap(), 0);
}

#[test]
fn out_of_bounds_access_is_a_contract_error() {
    let mut mem = Memory::new(4);
    assert_eq!(
        mem.get(4),
        Err(EnvError::OutOfBounds { index: 4, capacity: 4 })
    );
    assert_eq!(
        mem.set(100, 1),
        Err(EnvError::OutOfBounds { index: 100, capacity: 4 })
    );
}

#[test]
fn no_clamping_inside_the_tape() {
    // The clamp policy belongs to the environment; the tape stores whatever
    // integer it is handed.
    let mut mem = Memory::new(1);
    mem.set(0, i64::MAX).unwrap();
    assert_eq!(mem.get(0).unwrap(), i64::MAX);
}

#[test]
fn reset_zeroes_every_cell_and_keeps_capacity() {
    let mut mem = Memory::new(16);
    for i in 0..16 {
        mem.set(i, 7).unwrap();
    }
    mem.reset();
    assert_eq!(mem.capacity(), 16);
    assert!(mem.cells().iter().all(|&c| c == 0));
}

#[test]
fn default_uses_the_classic_tape_size() {
    assert_eq!(Memory::default().capacity(), 30_000);
}
