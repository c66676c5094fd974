use glam::Vec3;
use orrery_engine::{Color, EngineContext, Entity, MeshComponent, PointLight, Shading};

use crate::bodies::{self, PLANETS};
use crate::orbit::PlanetRecord;

/// Populate the scene: the sun, one sphere per planet, the central light
/// and the starfield. Returns one orbit record per planet in table order.
pub fn build_scene(ctx: &mut EngineContext) -> Vec<PlanetRecord> {
    let sun_id = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(sun_id)
            .with_tag("sun")
            .with_mesh(
                MeshComponent::sphere(bodies::SUN_RADIUS, Color::from_hex(bodies::SUN_COLOR))
                    .with_shading(Shading::Unlit),
            ),
    );

    let mut records = Vec::with_capacity(PLANETS.len());
    for spec in &PLANETS {
        let id = ctx.next_id();
        // Bodies start on +X; the first running tick moves them to their phase.
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(spec.name)
                .with_pos(Vec3::new(spec.distance, 0.0, 0.0))
                .with_mesh(MeshComponent::sphere(spec.size, Color::from_hex(spec.color))),
        );
        let record = PlanetRecord {
            entity: id,
            orbit_radius: spec.distance,
            angle: ctx.rng.angle(),
            angular_speed: spec.speed,
            name: spec.name,
        };
        records.push(record);
    }

    ctx.lights.add(PointLight::new(
        Vec3::ZERO,
        Color::from_hex(bodies::LIGHT_COLOR),
        bodies::LIGHT_INTENSITY,
        bodies::LIGHT_RANGE,
    ));

    ctx.stars.color = Color::from_hex(bodies::STAR_COLOR);
    ctx.stars.size = bodies::STAR_SIZE;
    ctx.stars
        .scatter_in_cube(&mut ctx.rng, bodies::STAR_COUNT, bodies::STAR_HALF_EXTENT);

    log::debug!(
        "builder: {} planets, {} stars",
        records.len(),
        ctx.stars.len()
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::AppConfig;
    use std::f32::consts::TAU;

    fn built(seed: u64) -> (EngineContext, Vec<PlanetRecord>) {
        let mut ctx = EngineContext::new(&AppConfig { seed, ..AppConfig::default() });
        let records = build_scene(&mut ctx);
        (ctx, records)
    }

    #[test]
    fn one_record_and_body_per_planet() {
        let (ctx, records) = built(7);
        assert_eq!(records.len(), PLANETS.len());
        assert_eq!(ctx.scene.len(), PLANETS.len() + 1);
        for (record, spec) in records.iter().zip(PLANETS.iter()) {
            assert_eq!(record.name, spec.name);
            assert_eq!(record.orbit_radius, spec.distance);
            assert_eq!(record.angular_speed, spec.speed);
            assert!((0.0..TAU).contains(&record.angle));

            let body = ctx.scene.get(record.entity).unwrap();
            assert_eq!(body.pos, Vec3::new(spec.distance, 0.0, 0.0));
            let mesh = body.mesh.unwrap();
            assert_eq!(mesh.shading, Shading::Lit);
            assert_eq!(mesh.bounding_radius(), spec.size);
            assert_eq!(mesh.color.to_hex(), spec.color);
        }
    }

    #[test]
    fn sun_is_unlit_at_origin() {
        let (ctx, _) = built(7);
        let sun = ctx.scene.find_by_tag("sun").unwrap();
        assert_eq!(sun.pos, Vec3::ZERO);
        let mesh = sun.mesh.unwrap();
        assert_eq!(mesh.shading, Shading::Unlit);
        assert_eq!(mesh.bounding_radius(), 5.0);
        assert_eq!(mesh.color.to_hex(), 0xFDB813);
    }

    #[test]
    fn light_and_stars() {
        let (ctx, _) = built(7);
        assert_eq!(ctx.lights.count(), 1);
        let light = ctx.lights.as_slice()[0];
        assert_eq!(light.pos(), Vec3::ZERO);
        assert_eq!(light.intensity, 2.0);
        assert_eq!(light.range, 1000.0);

        assert_eq!(ctx.stars.len(), 10_000);
        assert_eq!(ctx.stars.size, 0.7);
        assert!(ctx
            .stars
            .points
            .iter()
            .all(|p| p.abs().max_element() <= 1000.0));
    }

    #[test]
    fn same_seed_same_scene() {
        let (a, ra) = built(42);
        let (b, rb) = built(42);
        assert_eq!(ra, rb);
        assert_eq!(a.stars.points[..16], b.stars.points[..16]);
    }
}
