//! Procedural scattering of ground props
//!
//! - [`annulus`]: ring-shaped sampling domain
//! - [`collision`]: overlap rules
//! - [`props`]: placed objects and their factories
//! - [`placement`]: the retrying scatter pass
//! - [`random`]: injectable random sources

pub mod annulus;
pub mod collision;
pub mod placement;
pub mod props;
pub mod random;

use thiserror::Error;

pub use annulus::{AnnulusSample, AnnulusSpec};
pub use collision::{CollisionRule, ScaleMargin};
pub use placement::{place_scattered, ScatterBatch, DEFAULT_MAX_ATTEMPTS};
pub use props::{BushFactory, PlacedObject, PropFactory, PropKind, TombstoneFactory};
pub use random::{RandomSource, SampleRange};

/// Invalid arguments passed to the scatter pass
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    /// Inner radius is negative or not finite
    #[error("Invalid annulus: inner radius {inner} must be finite and non-negative")]
    InvalidInnerRadius {
        /// Offending inner radius
        inner: f32,
    },

    /// Inner radius is not smaller than a finite outer radius
    #[error("Invalid annulus: inner radius {inner} must be smaller than outer radius {outer}")]
    EmptyAnnulus {
        /// Inner radius
        inner: f32,
        /// Outer radius
        outer: f32,
    },

    /// Angular sweep is not a positive finite angle
    #[error("Invalid annulus sweep: {0} radians")]
    InvalidSweep(f32),

    /// Attempt budget of zero
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,
}
