//! Collision-aware scattering on an annulus
//!
//! Props are placed one at a time. Each new prop is checked only against the
//! props already accepted in the same batch, so contention resolves in favour
//! of whoever was placed first. When no free spot turns up within the attempt
//! budget the last proposal is kept anyway: a crowded graveyard beats a
//! missing one.

use super::annulus::AnnulusSpec;
use super::collision::CollisionRule;
use super::props::{PlacedObject, PropFactory};
use super::random::RandomSource;
use super::PlacementError;
use crate::foundation::math::Vec3;

/// Default proposal budget per prop
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Output of one [`place_scattered`] call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterBatch {
    /// Placed props in acceptance order
    pub objects: Vec<PlacedObject>,
    /// Indices of props accepted after the attempt budget ran out
    pub exhausted: Vec<usize>,
}

impl ScatterBatch {
    fn with_capacity(count: usize) -> Self {
        Self {
            objects: Vec::with_capacity(count),
            exhausted: Vec::new(),
        }
    }

    /// Number of placed props
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether nothing was placed
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Whether the prop at `index` may overlap an earlier one
    pub fn is_exhausted(&self, index: usize) -> bool {
        self.exhausted.contains(&index)
    }

    /// Drop the bookkeeping and keep the props
    pub fn into_objects(self) -> Vec<PlacedObject> {
        self.objects
    }
}

/// Scatter `count` props over `annulus`
///
/// With a collision rule, each prop gets up to `max_attempts` proposals;
/// without one, the first proposal is always taken. The output always holds
/// exactly `count` props.
///
/// # Errors
/// Returns [`PlacementError`] when the annulus is degenerate or
/// `max_attempts` is zero. Running out of attempts is not an error.
pub fn place_scattered(
    count: usize,
    annulus: &AnnulusSpec,
    max_attempts: u32,
    collision: Option<&dyn CollisionRule>,
    factory: &dyn PropFactory,
    rng: &mut dyn RandomSource,
) -> Result<ScatterBatch, PlacementError> {
    annulus.validate()?;
    if max_attempts == 0 {
        return Err(PlacementError::ZeroAttempts);
    }

    let kind = factory.kind();
    let height = factory.ground_height();
    let mut batch = ScatterBatch::with_capacity(count);

    for index in 0..count {
        let (position, settled) =
            propose_position(annulus, height, max_attempts, collision, &batch.objects, rng);

        if !settled {
            log::warn!(
                "Unable to find a free position for {:?} #{} after {} attempts, placing it anyway",
                kind, index, max_attempts
            );
            batch.exhausted.push(index);
        }

        let mut object = factory.create(rng);
        object.position = position;
        object.casts_shadow = true;
        batch.objects.push(object);
    }

    log::debug!(
        "Scattered {} {:?} props ({} best-effort)",
        batch.len(), kind, batch.exhausted.len()
    );
    Ok(batch)
}

/// Draw proposals until one is free or the budget runs out
///
/// Returns the last proposal and whether it is collision-free.
fn propose_position(
    annulus: &AnnulusSpec,
    height: f32,
    max_attempts: u32,
    collision: Option<&dyn CollisionRule>,
    placed: &[PlacedObject],
    rng: &mut dyn RandomSource,
) -> (Vec3, bool) {
    let mut position = annulus.sample(rng).to_ground_point(height);
    let Some(rule) = collision else {
        return (position, true);
    };

    let mut attempts = 1;
    while rule.collides(&position, placed) {
        if attempts >= max_attempts {
            return (position, false);
        }
        position = annulus.sample(rng).to_ground_point(height);
        attempts += 1;
    }
    (position, true)
}
