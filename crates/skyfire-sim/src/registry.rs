//! Id-keyed collision registries.
//!
//! The static registry holds building AABBs written by the external world
//! generator; the dynamic registry mirrors live adversaries as spheres and is
//! written only by the adversary manager. Both are owned by the engine and
//! lent out by reference, so a reader always sees the state as of the start
//! of its own pass.

use std::collections::BTreeMap;

use glam::Vec3;

use skyfire_core::types::{Aabb, Sphere};

/// A collision volume that can be probed with a sphere.
pub trait Shape {
    /// True if the probe sphere overlaps this volume.
    fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool;
}

impl Shape for Aabb {
    fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        Aabb::intersects_sphere(self, center, radius)
    }
}

impl Shape for Sphere {
    fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        Sphere::intersects_sphere(self, center, radius)
    }
}

/// Registry of collision volumes keyed by a caller-chosen id.
///
/// Iteration is in ascending id order.
#[derive(Debug, Clone)]
pub struct CollisionRegistry<S> {
    entries: BTreeMap<u32, S>,
}

/// Buildings and other fixed obstacles.
pub type StaticRegistry = CollisionRegistry<Aabb>;

/// Mobile adversaries.
pub type DynamicRegistry = CollisionRegistry<Sphere>;

impl<S> Default for CollisionRegistry<S> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<S: Shape> CollisionRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the volume stored under `id`. Returns the previous one.
    pub fn upsert(&mut self, id: u32, shape: S) -> Option<S> {
        self.entries.insert(id, shape)
    }

    /// Remove `id`. Unknown ids are ignored.
    pub fn unregister(&mut self, id: u32) -> Option<S> {
        self.entries.remove(&id)
    }

    pub fn get(&self, id: u32) -> Option<&S> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &S)> {
        self.entries.iter().map(|(id, shape)| (*id, shape))
    }

    /// True iff the probe sphere intersects any registered volume.
    pub fn query(&self, center: Vec3, radius: f32) -> bool {
        self.first_hit(center, radius).is_some()
    }

    /// Id of some volume the probe sphere intersects.
    pub fn first_hit(&self, center: Vec3, radius: f32) -> Option<u32> {
        self.entries
            .iter()
            .find(|(_, shape)| shape.intersects_sphere(center, radius))
            .map(|(id, _)| *id)
    }
}

impl CollisionRegistry<Aabb> {
    /// Register an obstacle centred at `position` with the given half-extents.
    pub fn register(&mut self, id: u32, position: Vec3, half_extents: Vec3) {
        self.upsert(id, Aabb::new(position, half_extents));
    }
}

impl CollisionRegistry<Sphere> {
    /// Register a mobile entity at `position` with a hit radius.
    pub fn register(&mut self, id: u32, position: Vec3, radius: f32) {
        self.upsert(id, Sphere::new(position, radius));
    }
}
