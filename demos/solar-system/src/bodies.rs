//! Body data: the planet table and the fixed sun, light, starfield and camera values.
//!
//! Sizes and distances are scene units, exaggerated for readability rather
//! than to scale. Speeds are radians per tick.

use glam::Vec3;

pub const PLANET_COUNT: usize = 8;

/// One row of the planet table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetSpec {
    pub name: &'static str,
    /// Sphere radius.
    pub size: f32,
    /// Orbit radius around the sun.
    pub distance: f32,
    pub color: u32,
    /// Initial angular speed in radians per tick.
    pub speed: f32,
}

/// Planets in table order. Order matters: it breaks picking ties and sets
/// the slider order.
pub const PLANETS: [PlanetSpec; PLANET_COUNT] = [
    PlanetSpec { name: "Mercury", size: 0.4, distance: 8.0, color: 0xaaaaaa, speed: 0.04 },
    PlanetSpec { name: "Venus", size: 0.9, distance: 11.0, color: 0xffcc99, speed: 0.015 },
    PlanetSpec { name: "Earth", size: 1.0, distance: 14.0, color: 0x3399ff, speed: 0.01 },
    PlanetSpec { name: "Mars", size: 0.6, distance: 17.0, color: 0xff6633, speed: 0.008 },
    PlanetSpec { name: "Jupiter", size: 2.5, distance: 22.0, color: 0xffcc66, speed: 0.002 },
    PlanetSpec { name: "Saturn", size: 2.0, distance: 27.0, color: 0xffe0b3, speed: 0.001 },
    PlanetSpec { name: "Uranus", size: 1.4, distance: 31.0, color: 0x66ffff, speed: 0.0005 },
    PlanetSpec { name: "Neptune", size: 1.4, distance: 35.0, color: 0x3333ff, speed: 0.0003 },
];

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 5.0;
pub const SUN_COLOR: u32 = 0xFDB813;

// ── Light ────────────────────────────────────────────────────────────

pub const LIGHT_COLOR: u32 = 0xffffff;
pub const LIGHT_INTENSITY: f32 = 2.0;
pub const LIGHT_RANGE: f32 = 1000.0;

// ── Starfield ────────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 10_000;
/// Each star coordinate lies in [-STAR_HALF_EXTENT, STAR_HALF_EXTENT].
pub const STAR_HALF_EXTENT: f32 = 1000.0;
pub const STAR_COLOR: u32 = 0xffffff;
pub const STAR_SIZE: f32 = 0.7;

// ── Camera ───────────────────────────────────────────────────────────

pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 60.0);
/// Distance from the origin the camera jumps to when a planet is clicked.
pub const FOCUS_DISTANCE: f32 = 10.0;
