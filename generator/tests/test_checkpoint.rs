//! Checkpoint Tests - Save/Load Generator State
//!
//! Critical invariants tested:
//! - Determinism: Restored generator produces identical draws
//! - Pending normal: A cached Box–Muller sample survives save/load
//! - Validation: Snapshots with malformed state are rejected

use random_generator_core_rs::{CheckpointError, GeneratorSnapshot, RandomGenerator, Seed};

#[test]
fn test_restore_continues_uniform_stream() {
    let mut rng = RandomGenerator::with_seed(42);
    for _ in 0..25 {
        rng.random();
    }

    let json = rng.snapshot().to_json().unwrap();
    let snapshot = GeneratorSnapshot::from_json(&json).unwrap();
    let mut restored = RandomGenerator::from_snapshot(&snapshot).unwrap();

    assert_eq!(restored, rng);
    for _ in 0..100 {
        assert_eq!(restored.random(), rng.random());
    }
}

#[test]
fn test_restore_keeps_pending_normal() {
    let mut rng = RandomGenerator::with_seed(42);
    rng.random_normal();
    assert!(rng.pending_normal().is_some());

    let json = rng.snapshot().to_json().unwrap();
    let mut restored =
        RandomGenerator::from_snapshot(&GeneratorSnapshot::from_json(&json).unwrap()).unwrap();

    for _ in 0..11 {
        assert_eq!(restored.random_normal(), rng.random_normal());
    }
}

#[test]
fn test_restore_keeps_seed_without_rehashing() {
    let mut rng = RandomGenerator::with_seed(Seed::from_parts(1, 2));
    rng.random();

    let restored = RandomGenerator::from_snapshot(&rng.snapshot()).unwrap();
    assert_eq!(restored.seed(), Seed::from_parts(1, 2));
    assert_eq!(restored.raw_state(), rng.raw_state());
}

#[test]
fn test_snapshot_json_shape() {
    let json = RandomGenerator::new().snapshot().to_json().unwrap();
    assert_eq!(
        json,
        r#"{"seed":88172645463325252,"state":"0x0c2ea4bab1fa6908"}"#
    );
}

#[test]
fn test_snapshot_from_handwritten_json() {
    let json = r#"{"seed": 7, "state": "0xff", "pending_normal": 0.5}"#;
    let snapshot = GeneratorSnapshot::from_json(json).unwrap();
    let mut rng = RandomGenerator::from_snapshot(&snapshot).unwrap();

    assert_eq!(rng.seed().as_u64(), 7);
    assert_eq!(rng.raw_state(), 255);
    assert_eq!(rng.random_normal(), 0.5);
    assert_eq!(rng.raw_state(), 255);
}

#[test]
fn test_malformed_snapshot_json_rejected() {
    let result = GeneratorSnapshot::from_json("{\"seed\": 1}");
    assert!(matches!(result, Err(CheckpointError::Serialization(_))));
}

#[test]
fn test_malformed_snapshot_state_rejected() {
    let snapshot = GeneratorSnapshot {
        seed: Seed::DEFAULT,
        state: "0x1234zz".to_string(),
        pending_normal: None,
    };

    let err = RandomGenerator::from_snapshot(&snapshot).unwrap_err();
    assert!(matches!(err, CheckpointError::InvalidState(_)));
    assert!(err.to_string().contains("zz"), "{}", err);
}
