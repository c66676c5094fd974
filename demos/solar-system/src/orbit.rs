//! Circular orbits in the XZ plane, advanced in whole ticks.

use std::f32::consts::TAU;

use glam::Vec3;
use orrery_engine::{Entity, EntityId};

/// Spin about the body's own Y axis per running tick, in radians.
pub const SPIN_PER_TICK: f32 = 0.01;

/// Reduce an angle to [0, 2π).
///
/// Angles are kept small so a step of the slowest slider speed is never
/// lost to `f32` rounding, however long the page runs.
pub fn wrap_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round a tiny negative input up to TAU itself.
    if a >= TAU { 0.0 } else { a }
}

/// Orbit state for one planet.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetRecord {
    pub entity: EntityId,
    pub orbit_radius: f32,
    /// Radians, kept in [0, 2π).
    pub angle: f32,
    /// Radians per tick. Changed only by the planet's slider.
    pub angular_speed: f32,
    pub name: &'static str,
}

impl PlanetRecord {
    /// Move along the orbit by `dt_ticks` ticks.
    pub fn advance(&mut self, dt_ticks: f32) {
        self.angle = wrap_angle(self.angle + self.angular_speed * dt_ticks);
    }

    /// Current position: `(r cos angle, 0, r sin angle)`.
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.orbit_radius * self.angle.cos(),
            0.0,
            self.orbit_radius * self.angle.sin(),
        )
    }

    /// Write the orbit position to the body and spin it by `dt_ticks`.
    pub fn apply_to(&self, body: &mut Entity, dt_ticks: f32) {
        body.pos = self.position();
        body.rotation = wrap_angle(body.rotation + SPIN_PER_TICK * dt_ticks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, TAU};

    fn record(angle: f32, speed: f32) -> PlanetRecord {
        PlanetRecord {
            entity: EntityId(1),
            orbit_radius: 14.0,
            angle,
            angular_speed: speed,
            name: "Earth",
        }
    }

    #[test]
    fn advance_adds_speed_per_tick() {
        let mut r = record(0.5, 0.01);
        r.advance(1.0);
        r.advance(1.0);
        r.advance(1.0);
        assert!((r.angle - 0.53).abs() < 1e-6);
    }

    #[test]
    fn position_lies_on_xz_circle() {
        let r = record(FRAC_PI_2, 0.0);
        let p = r.position();
        assert!(p.x.abs() < 1e-5);
        assert_eq!(p.y, 0.0);
        assert!((p.z - 14.0).abs() < 1e-5);
        assert!((p.length() - 14.0).abs() < 1e-4);
    }

    #[test]
    fn speed_change_keeps_angle_continuous() {
        let mut r = record(1.0, 0.01);
        r.advance(1.0);
        let before = r.angle;
        r.angular_speed = 0.02;
        assert_eq!(r.angle, before);
        r.advance(1.0);
        assert!((r.angle - (before + 0.02)).abs() < 1e-6);
    }

    #[test]
    fn angle_wraps_past_full_turn() {
        let mut r = record(TAU - 0.01, 0.03);
        r.advance(1.0);
        assert!((r.angle - 0.02).abs() < 1e-5);
    }

    #[test]
    fn slowest_speed_still_moves_after_long_run() {
        let mut r = record(0.0, 0.04);
        for _ in 0..54_000 {
            r.advance(1.0);
        }
        assert!((0.0..TAU).contains(&r.angle));

        r.angular_speed = 0.0001;
        let before = r.angle;
        for _ in 0..600 {
            r.advance(1.0);
        }
        let moved = wrap_angle(r.angle - before);
        assert!((moved - 0.06).abs() < 1e-3, "moved {}", moved);
    }

    #[test]
    fn spin_stays_bounded() {
        let r = record(0.0, 0.01);
        let mut body = Entity::new(EntityId(1));
        for _ in 0..100_000 {
            r.apply_to(&mut body, 1.0);
        }
        assert!((0.0..TAU).contains(&body.rotation));
        let before = body.rotation;
        r.apply_to(&mut body, 1.0);
        assert!((wrap_angle(body.rotation - before) - SPIN_PER_TICK).abs() < 1e-5);
    }

    #[test]
    fn wrap_angle_handles_edges() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(TAU + 1.0) - 1.0).abs() < 1e-5);
        assert!((wrap_angle(-1.0) - (TAU - 1.0)).abs() < 1e-5);
        assert!(wrap_angle(-1e-9) < TAU);
    }

    #[test]
    fn apply_to_moves_and_spins_body() {
        let r = record(0.0, 0.01);
        let mut body = Entity::new(EntityId(1));
        r.apply_to(&mut body, 1.0);
        r.apply_to(&mut body, 1.0);
        assert_eq!(body.pos, Vec3::new(14.0, 0.0, 0.0));
        assert!((body.rotation - 0.02).abs() < 1e-6);
    }
}
