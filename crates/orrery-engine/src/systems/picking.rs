//! Ray casting against bounding spheres.
//!
//! Nearest hit wins by ray distance. On an exact distance tie the candidate
//! that was offered first wins, so callers control tie-breaks through
//! iteration order.

use glam::Vec3;

use crate::api::types::EntityId;
use crate::core::scene::Scene;

/// A half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// `direction` is normalized here; a zero direction stays zero and never hits.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance to the first intersection with a sphere, if any.
    /// A ray starting inside the sphere reports the exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        if self.direction == Vec3::ZERO {
            return None;
        }
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let s = disc.sqrt();
        let t0 = -b - s;
        let t1 = -b + s;
        if t0 >= 0.0 {
            Some(t0)
        } else if t1 >= 0.0 {
            Some(t1)
        } else {
            None
        }
    }
}

/// Result of a successful pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit<K> {
    pub key: K,
    /// Distance along the ray.
    pub distance: f32,
    /// World-space intersection point.
    pub point: Vec3,
}

/// Nearest sphere hit among `(key, center, radius)` candidates.
pub fn pick_nearest<K: Copy>(
    ray: &Ray,
    candidates: impl IntoIterator<Item = (K, Vec3, f32)>,
) -> Option<Hit<K>> {
    let mut best: Option<Hit<K>> = None;
    for (key, center, radius) in candidates {
        if let Some(t) = ray.intersect_sphere(center, radius) {
            // Strict compare keeps the earlier candidate on ties.
            if best.map_or(true, |b| t < b.distance) {
                best = Some(Hit {
                    key,
                    distance: t,
                    point: ray.at(t),
                });
            }
        }
    }
    best
}

/// Nearest active meshed entity among `ids`, tested in the order given.
pub fn pick_entities(ray: &Ray, scene: &Scene, ids: &[EntityId]) -> Option<Hit<EntityId>> {
    let candidates = ids.iter().filter_map(|&id| {
        let entity = scene.get(id)?;
        if !entity.active {
            return None;
        }
        let radius = entity.bounding_radius()?;
        Some((id, entity.pos, radius))
    });
    pick_nearest(ray, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use crate::components::mesh::{Color, MeshComponent};

    #[test]
    fn ray_hits_sphere_front_face() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let t = ray.intersect_sphere(Vec3::ZERO, 2.0).unwrap();
        assert!((t - 8.0).abs() < 1e-6);
    }

    #[test]
    fn ray_misses_offset_sphere() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        assert!(ray.intersect_sphere(Vec3::new(5.0, 0.0, 0.0), 2.0).is_none());
    }

    #[test]
    fn sphere_behind_origin_is_ignored() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        assert!(ray.intersect_sphere(Vec3::ZERO, 2.0).is_none());
    }

    #[test]
    fn origin_inside_sphere_reports_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = ray.intersect_sphere(Vec3::ZERO, 3.0).unwrap();
        assert!((t - 3.0).abs() < 1e-6);
    }

    #[test]
    fn nearest_candidate_wins() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 50.0), Vec3::NEG_Z);
        let hit = pick_nearest(
            &ray,
            [
                ("far", Vec3::new(0.0, 0.0, -10.0), 1.0),
                ("near", Vec3::new(0.0, 0.0, 10.0), 1.0),
            ],
        )
        .unwrap();
        assert_eq!(hit.key, "near");
        assert!((hit.distance - 39.0).abs() < 1e-5);
        assert!((hit.point - Vec3::new(0.0, 0.0, 11.0)).length() < 1e-5);
    }

    #[test]
    fn exact_tie_keeps_first_candidate() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 50.0), Vec3::NEG_Z);
        let c = Vec3::ZERO;
        let hit = pick_nearest(&ray, [(1, c, 2.0), (2, c, 2.0)]).unwrap();
        assert_eq!(hit.key, 1);
    }

    #[test]
    fn pick_entities_skips_inactive_and_meshless() {
        let mut scene = Scene::new();
        let mut hidden = Entity::new(EntityId(1))
            .with_pos(Vec3::new(0.0, 0.0, 20.0))
            .with_mesh(MeshComponent::sphere(1.0, Color::WHITE));
        hidden.active = false;
        scene.spawn(hidden);
        scene.spawn(Entity::new(EntityId(2)).with_pos(Vec3::new(0.0, 0.0, 10.0)));
        scene.spawn(
            Entity::new(EntityId(3))
                .with_mesh(MeshComponent::sphere(1.0, Color::WHITE)),
        );

        let ray = Ray::new(Vec3::new(0.0, 0.0, 50.0), Vec3::NEG_Z);
        let ids = [EntityId(1), EntityId(2), EntityId(3)];
        let hit = pick_entities(&ray, &scene, &ids).unwrap();
        assert_eq!(hit.key, EntityId(3));
    }

    #[test]
    fn empty_candidates_miss() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let none: [(u8, Vec3, f32); 0] = [];
        assert!(pick_nearest(&ray, none).is_none());
    }
}
