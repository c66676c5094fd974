//! Point light storage for the lit mesh pass.
//!
//! Lights are persistent and stay for the life of the scene.
//! Each frame, the runner serializes active lights for the draw layer.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::components::mesh::Color;

/// An omnidirectional light with position, color, intensity and range.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, range]`
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    /// Distance at which the light falls off to zero. 0 means unlimited.
    pub range: f32,
}

impl PointLight {
    pub const FLOATS: usize = 8;

    /// Create a new point light at the given position.
    pub fn new(pos: Vec3, color: Color, intensity: f32, range: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color.r,
            g: color.g,
            b: color.b,
            intensity,
            range,
        }
    }

    pub fn pos(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Manages active lights for the scene.
pub struct LightState {
    lights: Vec<PointLight>,
}

impl LightState {
    pub fn new() -> Self {
        Self { lights: Vec::new() }
    }

    /// Create a LightState with a specific light capacity.
    pub fn with_capacity(max_lights: usize) -> Self {
        Self {
            lights: Vec::with_capacity(max_lights),
        }
    }

    /// Add a point light to the scene.
    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn as_slice(&self) -> &[PointLight] {
        &self.lights
    }

    /// Number of active lights.
    pub fn count(&self) -> usize {
        self.lights.len()
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}
