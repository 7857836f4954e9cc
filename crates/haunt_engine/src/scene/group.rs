//! Ordered collections of scene objects

use crate::animation::GhostState;
use crate::foundation::math::Vec3;
use crate::procedural::PlacedObject;

use super::primitives::MeshNode;

/// Anything with a world position
pub trait Positioned {
    /// Current world position
    fn world_position(&self) -> Vec3;
}

impl Positioned for PlacedObject {
    fn world_position(&self) -> Vec3 {
        self.position
    }
}

impl Positioned for GhostState {
    fn world_position(&self) -> Vec3 {
        self.position()
    }
}

impl Positioned for MeshNode {
    fn world_position(&self) -> Vec3 {
        self.transform.position
    }
}

/// Named, append-only list of scene objects
///
/// Children keep insertion order; nothing is ever removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<T> {
    name: String,
    children: Vec<T>,
}

impl<T> Group<T> {
    /// Create an empty group
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), children: Vec::new() }
    }

    /// Group name, for logging
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append one child
    pub fn add(&mut self, child: T) {
        self.children.push(child);
    }

    /// Iterate children in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.children.iter()
    }

    /// Mutable access for per-frame updates
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.children
    }

    /// All children
    pub fn as_slice(&self) -> &[T] {
        &self.children
    }

    /// Number of children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the group has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T: Positioned> Group<T> {
    /// World positions of all children, in insertion order
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.children.iter().map(Positioned::world_position)
    }
}

impl<T> Extend<T> for Group<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.children.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Group<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
