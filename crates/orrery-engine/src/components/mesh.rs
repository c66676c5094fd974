/// Linear RGB color, each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Back to a `0xRRGGBB` value (rounded per channel).
    pub fn to_hex(self) -> u32 {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (c(self.r) << 16) | (c(self.g) << 8) | c(self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// How a mesh responds to scene lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    /// Flat color, ignores lights (the sun).
    Unlit,
    /// Diffuse/specular response to point lights.
    Lit,
}

/// Mesh shape primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// UV sphere; `segments` is the tessellation used by the draw layer.
    Sphere { radius: f32, segments: u32 },
}

/// Default sphere tessellation (width and height segments).
pub const SPHERE_SEGMENTS: u32 = 32;

/// Component for renderable meshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub shape: Shape,
    pub color: Color,
    pub shading: Shading,
}

impl MeshComponent {
    pub fn new(shape: Shape, color: Color) -> Self {
        Self {
            shape,
            color,
            shading: Shading::Lit,
        }
    }

    /// Lit sphere with default tessellation.
    pub fn sphere(radius: f32, color: Color) -> Self {
        Self::new(
            Shape::Sphere {
                radius,
                segments: SPHERE_SEGMENTS,
            },
            color,
        )
    }

    pub fn with_shading(mut self, shading: Shading) -> Self {
        self.shading = shading;
        self
    }

    pub fn bounding_radius(&self) -> f32 {
        match self.shape {
            Shape::Sphere { radius, .. } => radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_splits_channels() {
        let c = Color::from_hex(0xff8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn hex_survives_conversion() {
        assert_eq!(Color::from_hex(0xf0f0f0).to_hex(), 0xf0f0f0);
        assert_eq!(Color::from_hex(0xfdb813).to_hex(), 0xfdb813);
    }

    #[test]
    fn sphere_is_lit_by_default() {
        let m = MeshComponent::sphere(2.5, Color::WHITE);
        assert_eq!(m.shading, Shading::Lit);
        assert_eq!(m.bounding_radius(), 2.5);
    }
}
