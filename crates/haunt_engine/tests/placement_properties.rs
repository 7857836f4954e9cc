//! Integration tests for scattered placement
//!
//! Exercises the public placement API the way the scene builder uses it.

use haunt_engine::foundation::math::{utils, Vec3};
use haunt_engine::procedural::random::{seeded, SequenceSource};
use haunt_engine::procedural::{
    place_scattered, AnnulusSpec, BushFactory, PlacedObject, PlacementError, PropKind, ScaleMargin, TombstoneFactory,
    DEFAULT_MAX_ATTEMPTS,
};

#[test]
fn test_accepted_tombstones_keep_clear() {
    let rule = ScaleMargin::default();
    for seed in 0..8 {
        let mut rng = seeded(seed);
        let batch = place_scattered(
            100,
            &AnnulusSpec::new(8.0, 23.0),
            DEFAULT_MAX_ATTEMPTS,
            Some(&rule),
            &TombstoneFactory::default(),
            &mut rng,
        )
        .unwrap();

        assert_eq!(batch.len(), 100);
        for (j, later) in batch.objects.iter().enumerate() {
            if batch.is_exhausted(j) {
                continue;
            }
            for earlier in &batch.objects[..j] {
                let distance = utils::ground_distance(&earlier.position, &later.position);
                assert!(
                    distance >= earlier.scale + 1.0,
                    "seed {seed}: tombstone {j} is {distance} from a neighbour of scale {}",
                    earlier.scale
                );
            }
        }
    }
}

#[test]
fn test_three_without_collision_stay_in_ring() {
    let mut rng = seeded(42);
    let annulus = AnnulusSpec::new(8.0, 23.0);
    let batch = place_scattered(3, &annulus, 100, None, &TombstoneFactory::default(), &mut rng).unwrap();

    assert_eq!(batch.len(), 3);
    for object in &batch.objects {
        let radius = utils::ground(&object.position).magnitude();
        assert!((8.0 - 1e-4..23.0 + 1e-4).contains(&radius));
        assert_eq!(object.kind, PropKind::Tombstone);
        assert!(object.casts_shadow);
    }
}

#[test]
fn test_crowded_ring_falls_back_to_best_effort() {
    // A thin ring with room for only a handful of stones.
    let mut rng = seeded(17);
    let rule = ScaleMargin::default();
    let batch = place_scattered(
        40,
        &AnnulusSpec::new(3.0, 3.5),
        DEFAULT_MAX_ATTEMPTS,
        Some(&rule),
        &TombstoneFactory::default(),
        &mut rng,
    )
    .unwrap();

    assert_eq!(batch.len(), 40);
    assert!(!batch.exhausted.is_empty());
    assert!(!batch.is_exhausted(0));
    assert!(batch.exhausted.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_single_attempt_never_retries() {
    let calls = std::cell::Cell::new(0);
    let always = |_: &Vec3, _: &[PlacedObject]| {
        calls.set(calls.get() + 1);
        true
    };
    let mut rng = SequenceSource::new([0.1, 0.2, 0.3, 0.4]);
    let batch =
        place_scattered(4, &AnnulusSpec::new(0.0, 16.0), 1, Some(&always), &BushFactory::default(), &mut rng).unwrap();

    assert_eq!(calls.get(), 4);
    assert_eq!(batch.exhausted, vec![0, 1, 2, 3]);
    // two draws per position; bushes draw nothing else
    assert_eq!(rng.drawn(), 8);
}

#[test]
fn test_same_seed_same_layout() {
    let rule = ScaleMargin::default();
    let run = |seed| {
        let mut rng = seeded(seed);
        place_scattered(50, &AnnulusSpec::new(8.0, 23.0), 100, Some(&rule), &TombstoneFactory::default(), &mut rng)
            .unwrap()
    };
    assert_eq!(run(9), run(9));
    assert_ne!(run(9), run(10));
}

#[test]
fn test_degenerate_annulus_rejected() {
    let mut rng = seeded(0);
    let factory = TombstoneFactory::default();
    let result = place_scattered(1, &AnnulusSpec::new(f32::NAN, 2.0), 10, None, &factory, &mut rng);
    assert!(matches!(result, Err(PlacementError::InvalidInnerRadius { .. })));

    let result = place_scattered(1, &AnnulusSpec::new(1.0, f32::INFINITY), 10, None, &factory, &mut rng);
    assert!(matches!(result, Err(PlacementError::EmptyAnnulus { .. })));
}
