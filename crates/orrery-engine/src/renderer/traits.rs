//! Renderer contract.
//!
//! The engine never talks to a GPU. Each tick the runner hands a
//! [`FrameData`] snapshot to a [`Renderer`]; on the web that renderer packs
//! it into a shared buffer the JavaScript draw layer reads.

use super::camera::CameraUniform;
use super::instance::{MeshInstance, StarVertex};
use crate::components::mesh::Color;
use crate::systems::lighting::PointLight;

/// Draw style shared by every star point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarStyle {
    pub color: Color,
    pub size: f32,
}

/// Complete frame data for rendering.
pub struct FrameData<'a> {
    /// Sphere instances (sun and planets).
    pub meshes: &'a [MeshInstance],
    /// Starfield points.
    pub stars: &'a [StarVertex],
    pub star_style: StarStyle,
    pub lights: &'a [PointLight],
    pub camera: CameraUniform,
    /// Background color the surface is cleared to.
    pub clear_color: Color,
}

/// Backend that turns frame data into pixels.
pub trait Renderer {
    /// Backend identifier (e.g., "shared-buffer", "recording").
    fn backend(&self) -> &'static str;

    /// Draw a complete frame.
    fn draw(&mut self, frame: &FrameData);

    /// Resize the drawing surface.
    fn resize(&mut self, width: u32, height: u32);
}
