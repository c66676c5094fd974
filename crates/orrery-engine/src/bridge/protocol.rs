//! Shared frame buffer layout.
//! Must stay in sync with the JavaScript draw layer.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Camera: 20 floats]          view_proj (column-major) + eye position
//! [Meshes: max_meshes × 12 floats]
//! [Stars: max_stars × 3 floats]
//! [Lights: max_lights × 8 floats]
//! ```
//!
//! Capacities are written into the header once, when the buffer is created.
//! The draw layer reads them from the header to compute offsets.

use crate::api::app::AppConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
/// Slot 0 is reserved and always written as 0.
pub const HEADER_RESERVED: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_MAX_MESHES: usize = 3;
pub const HEADER_MESH_COUNT: usize = 4;
pub const HEADER_MAX_STARS: usize = 5;
pub const HEADER_STAR_COUNT: usize = 6;
pub const HEADER_MAX_LIGHTS: usize = 7;
pub const HEADER_LIGHT_COUNT: usize = 8;
pub const HEADER_SURFACE_WIDTH: usize = 9;
pub const HEADER_SURFACE_HEIGHT: usize = 10;
pub const HEADER_CLEAR_R: usize = 11;
pub const HEADER_CLEAR_G: usize = 12;
pub const HEADER_CLEAR_B: usize = 13;
pub const HEADER_STAR_SIZE: usize = 14;
/// Star color as a `0xRRGGBB` integer (exact in f32).
pub const HEADER_STAR_COLOR: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera section: 4×4 matrix + vec4 position.
pub const CAMERA_FLOATS: usize = 20;

/// Floats per mesh instance (fixed wire format).
pub const MESH_INSTANCE_FLOATS: usize = 12;

/// Floats per star point: x, y, z.
pub const STAR_FLOATS: usize = 3;

/// Floats per light: x, y, z, r, g, b, intensity, range.
pub const LIGHT_FLOATS: usize = 8;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_meshes: usize,
    pub max_stars: usize,
    pub max_lights: usize,

    /// Offset (in floats) where the camera uniform begins.
    pub camera_offset: usize,
    /// Offset (in floats) where mesh instance data begins.
    pub mesh_data_offset: usize,
    /// Offset (in floats) where star data begins.
    pub star_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_meshes: usize, max_stars: usize, max_lights: usize) -> Self {
        let camera_offset = HEADER_FLOATS;
        let mesh_data_offset = camera_offset + CAMERA_FLOATS;
        let star_data_offset = mesh_data_offset + max_meshes * MESH_INSTANCE_FLOATS;
        let light_data_offset = star_data_offset + max_stars * STAR_FLOATS;
        let buffer_total_floats = light_data_offset + max_lights * LIGHT_FLOATS;

        Self {
            max_meshes,
            max_stars,
            max_lights,
            camera_offset,
            mesh_data_offset,
            star_data_offset,
            light_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from an AppConfig.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.max_meshes, config.max_stars, config.max_lights)
    }
}
