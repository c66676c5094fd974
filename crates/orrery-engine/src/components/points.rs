use glam::Vec3;

use crate::components::mesh::Color;
use crate::systems::rng::Rng;

/// A static cloud of fixed-size dots (the starfield).
#[derive(Debug, Clone, Default)]
pub struct PointCloud {
    pub points: Vec<Vec3>,
    pub color: Color,
    /// Dot size in world units.
    pub size: f32,
}

impl PointCloud {
    pub fn new(color: Color, size: f32) -> Self {
        Self {
            points: Vec::new(),
            color,
            size,
        }
    }

    /// Fill with `count` points, each coordinate drawn independently from
    /// [-half_extent, half_extent].
    pub fn scatter_in_cube(&mut self, rng: &mut Rng, count: usize, half_extent: f32) {
        self.points.reserve(count);
        for _ in 0..count {
            let x = rng.range_f32(-half_extent, half_extent);
            let y = rng.range_f32(-half_extent, half_extent);
            let z = rng.range_f32(-half_extent, half_extent);
            self.points.push(Vec3::new(x, y, z));
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
