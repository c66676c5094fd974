use bytemuck::{Pod, Zeroable};

/// Per-instance mesh data written to the shared frame buffer.
/// Must match the draw layer's protocol: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct MeshInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Sphere radius in world units.
    pub radius: f32,
    /// Rotation about the local Y axis in radians.
    pub rotation: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// 1.0 = lit by point lights, 0.0 = flat color.
    pub lit: f32,
    /// Sphere tessellation (width and height segments).
    pub segments: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// One starfield point: 3 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct StarVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl StarVertex {
    pub const FLOATS: usize = 3;
}

/// Buffer of mesh instances rebuilt every frame.
pub struct MeshBuffer {
    instances: Vec<MeshInstance>,
}

impl MeshBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: MeshInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn as_slice(&self) -> &[MeshInstance] {
        &self.instances
    }
}

impl Default for MeshBuffer {
    fn default() -> Self {
        Self::new()
    }
}
