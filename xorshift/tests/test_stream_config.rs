//! Tests for StreamConfig
//!
//! Covers validation, building every algorithm, jumps applied after
//! seeding, and deserialization from JSON.

use xorshift_core_rs::{
    generate_n, seed_with_splitmix64, Algorithm, AnyGenerator, ConfigError, Generator,
    GeneratorError, Jump, SeedSource, SplitMix64, StreamConfig, Xoroshiro128, Xorshift1024,
    Xorshift128,
};

#[test]
fn test_build_matches_direct_seeding() {
    let rng = StreamConfig::new(Algorithm::Xorshift1024, 42).build().unwrap();
    assert_eq!(
        rng,
        AnyGenerator::Xorshift1024(seed_with_splitmix64::<Xorshift1024>(42))
    );

    let rng = StreamConfig::new(Algorithm::Xorshift128, 42).build().unwrap();
    assert_eq!(
        rng,
        AnyGenerator::Xorshift128(seed_with_splitmix64::<Xorshift128>(42))
    );
}

#[test]
fn test_jumps_applied_after_seeding() {
    let config = StreamConfig {
        algorithm: Algorithm::Xoroshiro128,
        seed: SeedSource::SplitMix64 { seed: 9 },
        jumps: 2,
    };

    let mut expected: Xoroshiro128 = seed_with_splitmix64(9);
    expected.jump();
    expected.jump();

    assert_eq!(config.build().unwrap(), AnyGenerator::Xoroshiro128(expected));
}

#[test]
fn test_explicit_state() {
    let config = StreamConfig {
        algorithm: Algorithm::Xorshift128,
        seed: SeedSource::State {
            words: vec![1, 2],
            cursor: None,
        },
        jumps: 0,
    };
    let mut rng = config.build().unwrap();
    assert_eq!(rng.next_u64(), 3);
    assert_eq!(rng.state_words(), vec![2, 0x80_0023]);
}

#[test]
fn test_explicit_state_wrong_length() {
    let config = StreamConfig {
        algorithm: Algorithm::Xoroshiro128,
        seed: SeedSource::State {
            words: vec![1, 2, 3],
            cursor: None,
        },
        jumps: 0,
    };
    let err = config.validate().unwrap_err();
    assert_eq!(
        err,
        ConfigError::Generator(GeneratorError::StateLength {
            expected: 2,
            actual: 3
        })
    );
    assert_eq!(
        err.to_string(),
        "State length mismatch: expected 2 words, got 3"
    );
}

#[test]
fn test_splitmix64_rejects_jumps() {
    let config = StreamConfig {
        jumps: 3,
        ..StreamConfig::new(Algorithm::SplitMix64, 0)
    };
    match config.build() {
        Err(ConfigError::InvalidConfig(msg)) => assert!(msg.contains("splitmix64"), "{}", msg),
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_splitmix64_explicit_state() {
    let config = StreamConfig {
        algorithm: Algorithm::SplitMix64,
        seed: SeedSource::State {
            words: vec![5],
            cursor: None,
        },
        jumps: 0,
    };
    assert_eq!(
        config.build().unwrap(),
        AnyGenerator::SplitMix64(SplitMix64::new(5))
    );
}

#[test]
fn test_deserialize_from_json() {
    let json = r#"{
        "algorithm": "xorshift1024",
        "seed": { "type": "splitmix64", "seed": 12345 },
        "jumps": 1
    }"#;
    let config: StreamConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.algorithm, Algorithm::Xorshift1024);
    assert_eq!(config.seed, SeedSource::SplitMix64 { seed: 12345 });
    assert_eq!(config.jumps, 1);
}

#[test]
fn test_deserialize_jumps_default_to_zero() {
    let json = r#"{
        "algorithm": "xorshift128",
        "seed": { "type": "state", "words": [1, 2] }
    }"#;
    let config: StreamConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.jumps, 0);
    assert_eq!(
        config.seed,
        SeedSource::State {
            words: vec![1, 2],
            cursor: None,
        }
    );
}

#[test]
fn test_unknown_algorithm_rejected() {
    let json = r#"{ "algorithm": "mersenne", "seed": { "type": "splitmix64", "seed": 1 } }"#;
    assert!(serde_json::from_str::<StreamConfig>(json).is_err());
}

#[test]
fn test_every_algorithm_builds() {
    for algorithm in Algorithm::ALL {
        let mut a = StreamConfig::new(algorithm, 1).build().unwrap();
        let mut b = StreamConfig::new(algorithm, 1).build().unwrap();
        assert_eq!(a.algorithm(), algorithm);
        assert_eq!(a.next_u64(), b.next_u64());
        assert_eq!(a.jump().is_ok(), algorithm.supports_jump());
    }
}

#[test]
fn test_rebuild_xorshift1024_mid_rotation() {
    let mut original = StreamConfig::new(Algorithm::Xorshift1024, 8).build().unwrap();
    generate_n(&mut original, 3);
    assert_eq!(original.cursor(), Some(3));

    let config = StreamConfig {
        algorithm: Algorithm::Xorshift1024,
        seed: SeedSource::State {
            words: original.state_words(),
            cursor: original.cursor(),
        },
        jumps: 0,
    };
    let mut restored = config.build().unwrap();

    assert_eq!(restored, original);
    assert_eq!(generate_n(&mut restored, 40), generate_n(&mut original, 40));
}

#[test]
fn test_seed_source_rebuilds_every_algorithm() {
    for algorithm in Algorithm::ALL {
        let mut original = StreamConfig::new(algorithm, 21).build().unwrap();
        generate_n(&mut original, 21);

        let config = StreamConfig {
            algorithm,
            seed: original.seed_source(),
            jumps: 0,
        };
        let mut restored = config.build().unwrap();
        assert_eq!(
            generate_n(&mut restored, 20),
            generate_n(&mut original, 20),
            "{} diverged after rebuild",
            algorithm
        );
    }
}

#[test]
fn test_deserialize_state_with_cursor() {
    let json = r#"{
        "algorithm": "xorshift1024",
        "seed": {
            "type": "state",
            "words": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16],
            "cursor": 5
        }
    }"#;
    let config: StreamConfig = serde_json::from_str(json).unwrap();
    let rng = config.build().unwrap();
    assert_eq!(rng.cursor(), Some(5));
}
