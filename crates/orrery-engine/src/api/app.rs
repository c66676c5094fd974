use glam::Vec3;
use serde::Deserialize;

use crate::api::types::{EntityId, UiCommand};
use crate::components::mesh::Color;
use crate::components::points::PointCloud;
use crate::core::scene::Scene;
use crate::core::viewport::Viewport;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;
use crate::systems::lighting::LightState;
use crate::systems::rng::Rng;

/// Configuration for the engine, provided by the app.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Initial viewport width in pixels (the host overrides this on start).
    pub viewport_width: f32,
    /// Initial viewport height in pixels.
    pub viewport_height: f32,
    /// Vertical field of view in degrees (default: 45).
    pub fov_y_degrees: f32,
    /// Near clip distance (default: 0.1).
    pub near: f32,
    /// Far clip distance (default: 1000).
    pub far: f32,
    /// Where the camera starts. It initially looks at the origin.
    pub camera_position: Vec3,
    /// Seed for the engine RNG. Zero asks the host to pick one.
    pub seed: u64,
    /// Maximum number of mesh instances per frame (default: 64).
    pub max_meshes: usize,
    /// Maximum number of star points (default: 10000).
    pub max_stars: usize,
    /// Maximum number of point lights (default: 8).
    pub max_lights: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 1000.0,
            camera_position: Vec3::new(0.0, 0.0, 10.0),
            seed: 0,
            max_meshes: 64,
            max_stars: 10_000,
            max_lights: 8,
        }
    }
}

/// Partial config loaded from JSON. Absent fields keep the app's values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub viewport_width: Option<f32>,
    pub viewport_height: Option<f32>,
    pub fov_y_degrees: Option<f32>,
    pub near: Option<f32>,
    pub far: Option<f32>,
    pub camera_position: Option<[f32; 3]>,
    pub seed: Option<u64>,
    pub max_meshes: Option<usize>,
    pub max_stars: Option<usize>,
    pub max_lights: Option<usize>,
}

impl ConfigOverrides {
    /// Parse overrides from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl AppConfig {
    /// Apply overrides on top of this config.
    pub fn apply(&mut self, o: &ConfigOverrides) {
        if let Some(v) = o.viewport_width {
            self.viewport_width = v;
        }
        if let Some(v) = o.viewport_height {
            self.viewport_height = v;
        }
        if let Some(v) = o.fov_y_degrees {
            self.fov_y_degrees = v;
        }
        if let Some(v) = o.near {
            self.near = v;
        }
        if let Some(v) = o.far {
            self.far = v;
        }
        if let Some(p) = o.camera_position {
            self.camera_position = Vec3::from_array(p);
        }
        if let Some(v) = o.seed {
            self.seed = v;
        }
        if let Some(v) = o.max_meshes {
            self.max_meshes = v;
        }
        if let Some(v) = o.max_stars {
            self.max_stars = v;
        }
        if let Some(v) = o.max_lights {
            self.max_lights = v;
        }
    }

    /// Parse JSON overrides and apply them, returning the merged config.
    pub fn with_json_overrides(mut self, json: &str) -> Result<Self, serde_json::Error> {
        let overrides = ConfigOverrides::from_json(json)?;
        self.apply(&overrides);
        Ok(self)
    }
}

/// The core contract every app must fulfill.
///
/// The runner calls `update` exactly once per host animation frame and
/// draws right after it, whether or not the app chose to advance anything.
pub trait App {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Build the scene: spawn entities, add lights, fill the point cloud.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One tick. Handle queued input in arrival order, then advance state.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to App::init and App::update.
pub struct EngineContext {
    pub scene: Scene,
    pub lights: LightState,
    pub stars: PointCloud,
    pub camera: PerspectiveCamera,
    pub viewport: Viewport,
    /// Background clear color for the next draw.
    pub clear_color: Color,
    pub rng: Rng,
    ui: Vec<UiCommand>,
    next_id: u32,
}

impl EngineContext {
    pub fn new(config: &AppConfig) -> Self {
        let viewport = Viewport::new(config.viewport_width, config.viewport_height);
        let mut camera = PerspectiveCamera::new(
            config.fov_y_degrees.to_radians(),
            viewport.aspect(),
            config.near,
            config.far,
        );
        camera.position = config.camera_position;
        camera.look_at(Vec3::ZERO);

        Self {
            scene: Scene::with_capacity(config.max_meshes),
            lights: LightState::with_capacity(config.max_lights),
            stars: PointCloud::default(),
            camera,
            viewport,
            clear_color: Color::BLACK,
            rng: Rng::new(config.seed),
            ui: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Queue a UI side effect for the host.
    pub fn emit_ui(&mut self, command: UiCommand) {
        self.ui.push(command);
    }

    /// Pending UI commands, oldest first.
    pub fn ui_commands(&self) -> &[UiCommand] {
        &self.ui
    }

    /// Take all pending UI commands.
    pub fn drain_ui(&mut self) -> Vec<UiCommand> {
        std::mem::take(&mut self.ui)
    }

    /// Track a new viewport size; the camera aspect follows it.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.camera.set_aspect_ratio(width, height);
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_monotonic() {
        let mut ctx = EngineContext::default();
        assert_eq!(ctx.next_id(), EntityId(1));
        assert_eq!(ctx.next_id(), EntityId(2));
    }

    #[test]
    fn camera_starts_at_config_position_facing_origin() {
        let config = AppConfig {
            camera_position: Vec3::new(0.0, 0.0, 60.0),
            ..AppConfig::default()
        };
        let ctx = EngineContext::new(&config);
        assert_eq!(ctx.camera.position, Vec3::new(0.0, 0.0, 60.0));
        let fwd = ctx.camera.forward();
        assert!((fwd - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn set_viewport_updates_camera_aspect() {
        let mut ctx = EngineContext::default();
        ctx.set_viewport(1000.0, 500.0);
        assert!((ctx.camera.aspect_ratio - 2.0).abs() < 1e-6);
        assert_eq!(ctx.viewport.width, 1000.0);
        assert_eq!(ctx.viewport.height, 500.0);
    }

    #[test]
    fn drain_ui_empties_outbox() {
        let mut ctx = EngineContext::default();
        ctx.emit_ui(UiCommand::HideTooltip);
        assert_eq!(ctx.ui_commands().len(), 1);
        let cmds = ctx.drain_ui();
        assert_eq!(cmds, vec![UiCommand::HideTooltip]);
        assert!(ctx.ui_commands().is_empty());
    }

    #[test]
    fn json_overrides_merge_over_defaults() {
        let config = AppConfig::default()
            .with_json_overrides(r#"{ "seed": 7, "camera_position": [1, 2, 3] }"#)
            .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.camera_position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(config.fov_y_degrees, 45.0);
    }

    #[test]
    fn json_overrides_reject_unknown_fields() {
        let result = AppConfig::default().with_json_overrides(r#"{ "zoom": 2 }"#);
        assert!(result.is_err());
    }
}
