//! Tests for xorshift1024*
//!
//! Critical invariants tested:
//! - Cursor stays in [0, 16)
//! - Jump stays aligned with the rotating cursor
//! - Resuming from (state, cursor) continues the same stream

use xorshift_core_rs::{
    generate_n, seed_with_splitmix64, Generator, GeneratorError, Jump, SeedableGenerator,
    Xorshift1024,
};

#[test]
fn test_known_answer_seeded_from_splitmix64() {
    let mut rng: Xorshift1024 = seed_with_splitmix64(42);
    assert_eq!(rng.cursor(), 0);
    assert_eq!(rng.state()[0], 0xbdd7_3226_2feb_6e95);
    assert_eq!(rng.state()[15], 0x3414_52c5_4d7c_33f2);

    let expected = [
        0xb526_143a_b503_3a10,
        0x208b_9224_c416_64d3,
        0x6962_371a_9388_f185,
        0x4203_d303_8438_b471,
        0x5618_1d83_9d5b_4403,
    ];
    assert_eq!(generate_n(&mut rng, 5), expected);
}

#[test]
fn test_cursor_bound_over_many_steps() {
    let mut rng: Xorshift1024 = seed_with_splitmix64(1);
    for i in 1..=1000usize {
        rng.next_u64();
        assert!(rng.cursor() < 16);
        assert_eq!(rng.cursor(), i % 16);
    }
}

#[test]
fn test_never_reaches_zero_state() {
    let mut state = [0u64; 16];
    state[7] = 1;
    let mut rng = Xorshift1024::new(state);
    for i in 0..10_000 {
        rng.next_u64();
        assert_ne!(rng.state(), [0u64; 16], "Zero state reached at step {}", i);
    }
}

#[test]
fn test_jump_changes_state_at_every_cursor() {
    let mut rng: Xorshift1024 = seed_with_splitmix64(77);
    for _ in 0..16 {
        let mut jumped = rng;
        jumped.jump();
        assert_eq!(jumped.cursor(), rng.cursor());
        assert_ne!(jumped.state(), rng.state());
        rng.next_u64();
    }
}

#[test]
fn test_jump_does_not_collapse_distinct_states() {
    let mut a: Xorshift1024 = seed_with_splitmix64(10);
    let mut b: Xorshift1024 = seed_with_splitmix64(11);
    a.jump();
    b.jump();
    assert_ne!(a.state(), b.state());
}

#[test]
fn test_resume_from_parts() {
    let mut rng: Xorshift1024 = seed_with_splitmix64(5);
    generate_n(&mut rng, 37);

    let mut resumed = Xorshift1024::from_parts(rng.state(), rng.cursor()).unwrap();
    assert_eq!(generate_n(&mut resumed, 50), generate_n(&mut rng, 50));
}

#[test]
fn test_resume_with_wrong_cursor_diverges() {
    let mut rng: Xorshift1024 = seed_with_splitmix64(5);
    generate_n(&mut rng, 3);

    // Dropping the cursor loses the stream position
    let mut reset = Xorshift1024::new(rng.state());
    assert_ne!(reset.next_u64(), rng.next_u64());
}

#[test]
fn test_from_parts_cursor_out_of_range() {
    let err = Xorshift1024::from_parts([1; 16], 42).unwrap_err();
    assert_eq!(err, GeneratorError::CursorOutOfRange(42));
    assert_eq!(err.to_string(), "Cursor 42 out of range [0, 16)");
}
