use orrery_engine::{
    App, AppConfig, EngineContext, FrameData, InputEvent, InputQueue,
    MeshBuffer, Renderer, StarStyle, StarVertex, UiCommand, Viewport,
};
use orrery_engine::systems::render::{build_mesh_buffer, build_star_buffer};

/// Generic app runner that wires up the render loop.
///
/// Each concrete app creates a `thread_local!` AppRunner through
/// [`export_app!`](crate::export_app), because wasm-bindgen cannot export
/// generic structs directly.
///
/// One call to [`tick`](Self::tick) is one discrete step, however much wall
/// time passed since the last animation frame.
pub struct AppRunner<A: App, R: Renderer> {
    app: A,
    ctx: EngineContext,
    input: InputQueue,
    meshes: MeshBuffer,
    /// The starfield is static; it is flattened once at init.
    stars: Vec<StarVertex>,
    renderer: R,
    config: AppConfig,
    /// Viewport the renderer surface was last sized to.
    surface: Viewport,
    initialized: bool,
    ticks: u64,
}

impl<A: App, R: Renderer> AppRunner<A, R> {
    pub fn new(app: A, renderer: R) -> Self {
        let config = app.config();
        Self::with_config(app, renderer, config)
    }

    /// Build with an explicit config (e.g. the app's config plus host overrides).
    pub fn with_config(app: A, mut renderer: R, config: AppConfig) -> Self {
        let ctx = EngineContext::new(&config);
        let surface = ctx.viewport;
        renderer.resize(surface.width as u32, surface.height as u32);

        Self {
            app,
            ctx,
            input: InputQueue::new(),
            meshes: MeshBuffer::with_capacity(config.max_meshes),
            stars: Vec::with_capacity(config.max_stars),
            renderer,
            config,
            surface,
            initialized: false,
            ticks: 0,
        }
    }

    /// Initialize the app. Call once after construction.
    pub fn init(&mut self) {
        self.app.init(&mut self.ctx);
        build_star_buffer(&self.ctx.stars, &mut self.stars);
        self.initialized = true;
        if self.ctx.scene.is_empty() {
            log::warn!("runner: app spawned no entities");
        }
        log::info!(
            "runner: {} entities, {} stars, {} lights, backend {}",
            self.ctx.scene.len(),
            self.stars.len(),
            self.ctx.lights.count(),
            self.renderer.backend(),
        );
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one tick: let the app consume input and advance, then draw once.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }

        self.app.update(&mut self.ctx, &self.input);
        self.input.drain();

        if self.ctx.viewport != self.surface {
            self.surface = self.ctx.viewport;
            self.renderer
                .resize(self.surface.width as u32, self.surface.height as u32);
        }

        build_mesh_buffer(self.ctx.scene.iter(), &mut self.meshes);

        let frame = FrameData {
            meshes: self.meshes.as_slice(),
            stars: &self.stars,
            star_style: StarStyle {
                color: self.ctx.stars.color,
                size: self.ctx.stars.size,
            },
            lights: self.ctx.lights.as_slice(),
            camera: self.ctx.camera.uniform(),
            clear_color: self.ctx.clear_color,
        };
        self.renderer.draw(&frame);
        self.ticks += 1;
    }

    /// Take the UI commands queued since the last call.
    pub fn drain_ui_commands(&mut self) -> Vec<UiCommand> {
        self.ctx.drain_ui()
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Number of ticks run since init.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use orrery_engine::{Color, Entity, MeshComponent, PointLight};

    /// Renderer that remembers what it was asked to do.
    #[derive(Default)]
    struct RecordingRenderer {
        draws: usize,
        last_meshes: usize,
        last_stars: usize,
        last_clear: Option<Color>,
        surface: (u32, u32),
        resizes: usize,
    }

    impl Renderer for RecordingRenderer {
        fn backend(&self) -> &'static str {
            "recording"
        }

        fn draw(&mut self, frame: &FrameData) {
            self.draws += 1;
            self.last_meshes = frame.meshes.len();
            self.last_stars = frame.stars.len();
            self.last_clear = Some(frame.clear_color);
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.surface = (width, height);
            self.resizes += 1;
        }
    }

    /// Moves its one ball along X every tick unless frozen.
    #[derive(Default)]
    struct Mover {
        frozen: bool,
        updates: usize,
    }

    impl App for Mover {
        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag("ball")
                    .with_mesh(MeshComponent::sphere(1.0, Color::WHITE)),
            );
            ctx.lights.add(PointLight::new(Vec3::ZERO, Color::WHITE, 1.0, 0.0));
            ctx.stars.points.push(Vec3::ONE);
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.updates += 1;
            for event in input.iter() {
                match event {
                    InputEvent::Click => self.frozen = !self.frozen,
                    InputEvent::Resize { width, height } => ctx.set_viewport(*width, *height),
                    _ => {}
                }
            }
            if !self.frozen {
                for e in ctx.scene.iter_mut() {
                    e.pos.x += 1.0;
                }
            }
        }
    }

    fn runner() -> AppRunner<Mover, RecordingRenderer> {
        let mut r = AppRunner::new(Mover::default(), RecordingRenderer::default());
        r.init();
        r
    }

    #[test]
    fn tick_before_init_is_ignored() {
        let mut r = AppRunner::new(Mover::default(), RecordingRenderer::default());
        r.tick();
        assert_eq!(r.renderer().draws, 0);
        assert_eq!(r.app().updates, 0);
    }

    #[test]
    fn every_tick_draws_once_even_when_frozen() {
        let mut r = runner();
        r.tick();
        r.push_input(InputEvent::Click);
        r.tick();
        r.tick();
        assert_eq!(r.renderer().draws, 3);
        assert_eq!(r.ticks(), 3);
        let x = r.context().scene.find_by_tag("ball").unwrap().pos.x;
        assert_eq!(x, 1.0);
    }

    #[test]
    fn frame_carries_scene_and_stars() {
        let mut r = runner();
        r.tick();
        assert_eq!(r.renderer().last_meshes, 1);
        assert_eq!(r.renderer().last_stars, 1);
        assert_eq!(r.renderer().last_clear, Some(Color::BLACK));
    }

    #[test]
    fn input_is_drained_after_tick() {
        let mut r = runner();
        r.push_input(InputEvent::Click);
        r.tick();
        // The click froze the ball once; a second tick must not see it again.
        r.tick();
        assert!(r.app().frozen);
    }

    #[test]
    fn resize_reaches_camera_and_surface() {
        let mut r = runner();
        assert_eq!(r.renderer().surface, (1280, 720));
        r.push_input(InputEvent::Resize { width: 800.0, height: 400.0 });
        r.tick();
        assert_eq!(r.renderer().surface, (800, 400));
        assert!((r.context().camera.aspect_ratio - 2.0).abs() < 1e-6);
        let resizes = r.renderer().resizes;
        r.tick();
        assert_eq!(r.renderer().resizes, resizes);
    }

    struct Empty;

    impl App for Empty {
        fn init(&mut self, _ctx: &mut EngineContext) {}
        fn update(&mut self, _ctx: &mut EngineContext, _input: &InputQueue) {}
    }

    #[test]
    fn empty_scene_still_draws_every_tick() {
        let mut r = AppRunner::new(Empty, RecordingRenderer::default());
        r.init();
        assert!(r.context().scene.is_empty());
        r.tick();
        r.tick();
        assert_eq!(r.renderer().draws, 2);
        assert_eq!(r.renderer().last_meshes, 0);
        assert_eq!(r.renderer().last_stars, 0);
    }
}
