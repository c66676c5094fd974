pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::app::{App, AppConfig, ConfigOverrides, EngineContext};
pub use api::types::{Control, EntityId, SliderSpec, UiCommand};
pub use components::entity::Entity;
pub use components::mesh::{Color, MeshComponent, Shading, Shape};
pub use components::points::PointCloud;
pub use core::scene::Scene;
pub use core::viewport::Viewport;
pub use renderer::camera::{CameraUniform, PerspectiveCamera};
pub use renderer::instance::{MeshBuffer, MeshInstance, StarVertex};
pub use renderer::traits::{FrameData, Renderer, StarStyle};
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::protocol::ProtocolLayout;
pub use systems::lighting::{LightState, PointLight};
pub use systems::picking::{pick_entities, pick_nearest, Hit, Ray};
pub use systems::rng::Rng;
