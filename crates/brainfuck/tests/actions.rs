use brainfuck::Action;

#[test]
fn brainfuck_symbols_map_to_their_instruction() {
    assert_eq!(Action::from_char('>'), Action::IncrementPointer);
    assert_eq!(Action::from_char('<'), Action::DecrementPointer);
    assert_eq!(Action::from_char('+'), Action::IncrementValue);
    assert_eq!(Action::from_char('-'), Action::DecrementValue);
    assert_eq!(Action::from_char('.'), Action::Output);
    assert_eq!(Action::from_char(','), Action::Input);
    assert_eq!(Action::from_char('['), Action::StartLoop);
    assert_eq!(Action::from_char(']'), Action::EndLoop);
}

#[test]
fn everything_else_maps_to_nop() {
    for c in ['x', ' ', '\n', '0', 'é', '\0'] {
        assert_eq!(Action::from_char(c), Action::Nop);
    }
}

#[test]
fn discrete_indices_are_stable_and_dense() {
    for (i, action) in Action::ALL.iter().enumerate() {
        assert_eq!(action.index(), i);
    }
}
