use crate::components::entity::Entity;
use crate::components::mesh::{Shading, Shape};
use crate::components::points::PointCloud;
use crate::renderer::instance::{MeshBuffer, MeshInstance, StarVertex};

/// Build the mesh instance buffer from entities with mesh components.
pub fn build_mesh_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut MeshBuffer,
) {
    buffer.clear();
    for entity in entities {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };
        let (radius, segments) = match mesh.shape {
            Shape::Sphere { radius, segments } => (radius, segments),
        };
        buffer.push(MeshInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            radius,
            rotation: entity.rotation,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            lit: match mesh.shading {
                Shading::Lit => 1.0,
                Shading::Unlit => 0.0,
            },
            segments: segments as f32,
            _pad0: 0.0,
            _pad1: 0.0,
        });
    }
}

/// Flatten a point cloud into star vertices.
pub fn build_star_buffer(cloud: &PointCloud, out: &mut Vec<StarVertex>) {
    out.clear();
    out.extend(cloud.points.iter().map(|p| StarVertex { x: p.x, y: p.y, z: p.z }));
}
