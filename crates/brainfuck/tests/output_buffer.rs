use brainfuck::OutputBuffer;

#[test]
fn writes_advance_through_the_buffer() {
    let mut buf = OutputBuffer::new(4);
    buf.write(72);
    buf.write(105);
    assert_eq!(buf.raw(), &[72, 105, 0, 0]);
}

#[test]
fn saturates_at_the_tail_instead_of_wrapping() {
    let mut buf = OutputBuffer::new(3);
    for v in [1, 2, 3, 4, 5] {
        buf.write(v);
    }
    // Earlier slots keep their contents; only the last slot keeps being
    // overwritten by the most recent write.
    assert_eq!(buf.raw(), &[1, 2, 5]);
    assert_eq!(buf.capacity(), 3);
}

#[test]
fn read_renders_full_length_with_nul_padding() {
    let mut buf = OutputBuffer::new(5);
    buf.write(i64::from(b'H'));
    buf.write(i64::from(b'i'));
    assert_eq!(buf.read(), "Hi\0\0\0");
}

#[test]
fn unmappable_codes_render_as_replacement() {
    let mut buf = OutputBuffer::new(2);
    buf.write(-42);
    assert_eq!(buf.read(), "\u{fffd}\0");
}

#[test]
fn reset_rewinds_the_cursor() {
    let mut buf = OutputBuffer::new(2);
    buf.write(1);
    buf.write(2);
    buf.write(3);
    buf.reset();
    assert_eq!(buf.raw(), &[0, 0]);
    buf.write(9);
    assert_eq!(buf.raw(), &[9, 0]);
}
