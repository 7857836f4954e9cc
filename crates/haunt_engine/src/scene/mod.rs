//! Scene description
//!
//! Plain data the renderer consumes: grouped props, tower meshes, lights,
//! fog and camera, assembled by [`HauntedScene::build`].

pub mod camera;
pub mod group;
pub mod haunted;
pub mod lighting;
pub mod primitives;

pub use camera::Camera;
pub use group::{Group, Positioned};
pub use haunted::{place_bushes, place_tombstones, HauntedScene, SceneError};
pub use lighting::{Fog, Light, LightType, LightingEnvironment};
pub use primitives::{tower_meshes, MeshNode, Primitive};
