//! Solar System: planets on circular orbits around an unlit sun, with
//! per-planet speed sliders, pause/resume, a light/dark theme, hover
//! tooltips and click-to-focus.

use std::collections::HashMap;

use glam::Vec2;
use orrery_engine::{
    App, AppConfig, Control, EngineContext, InputEvent, InputQueue, UiCommand,
};

use crate::bodies;
use crate::builder::build_scene;
use crate::controls::{self, Playback, Theme};
use crate::interaction::InteractionSystem;
use crate::orbit::PlanetRecord;

/// Orbits advance by this many ticks per running frame.
const TICKS_PER_FRAME: f32 = 1.0;

#[derive(Default)]
pub struct SolarSystem {
    planets: Vec<PlanetRecord>,
    /// Slider name to index into `planets`.
    by_name: HashMap<&'static str, usize>,
    playback: Playback,
    theme: Theme,
    interaction: InteractionSystem,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn planets(&self) -> &[PlanetRecord] {
        &self.planets
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    fn set_speed(&mut self, name: &str, value: f32) {
        match self.by_name.get(name) {
            Some(&i) => self.planets[i].angular_speed = value,
            None => log::warn!("solar-system: no planet named {:?}", name),
        }
    }

    fn toggle_playback(&mut self, ctx: &mut EngineContext) {
        self.playback = self.playback.toggle();
        ctx.emit_ui(UiCommand::SetLabel {
            control: Control::PauseButton,
            text: self.playback.label().to_string(),
        });
    }

    fn apply_theme(&self, ctx: &mut EngineContext) {
        ctx.clear_color = self.theme.clear_color();
        ctx.emit_ui(UiCommand::SetBodyClass {
            add: self.theme.body_class(),
            remove: self.theme.other_body_class(),
        });
        ctx.emit_ui(UiCommand::SetLabel {
            control: Control::ThemeButton,
            text: self.theme.label().to_string(),
        });
    }

    fn handle(&mut self, ctx: &mut EngineContext, event: &InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => {
                self.interaction
                    .on_move(ctx, &self.planets, Vec2::new(*x, *y));
            }
            InputEvent::Click => {
                self.interaction.on_click(ctx);
            }
            InputEvent::Resize { width, height } => ctx.set_viewport(*width, *height),
            InputEvent::SliderInput { name, value } => self.set_speed(name, *value),
            InputEvent::Button { control: Control::PauseButton } => self.toggle_playback(ctx),
            InputEvent::Button { control: Control::ThemeButton } => {
                self.theme = self.theme.toggle();
                self.apply_theme(ctx);
            }
        }
    }

    fn advance(&mut self, ctx: &mut EngineContext, dt_ticks: f32) {
        for record in &mut self.planets {
            record.advance(dt_ticks);
            if let Some(body) = ctx.scene.get_mut(record.entity) {
                record.apply_to(body, dt_ticks);
            }
        }
    }
}

impl App for SolarSystem {
    fn config(&self) -> AppConfig {
        AppConfig {
            fov_y_degrees: bodies::CAMERA_FOV_DEGREES,
            near: bodies::CAMERA_NEAR,
            far: bodies::CAMERA_FAR,
            camera_position: bodies::CAMERA_START,
            max_meshes: 16,
            max_stars: bodies::STAR_COUNT,
            max_lights: 1,
            ..AppConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.planets = build_scene(ctx);
        self.by_name = controls::slider_index(&self.planets);
        self.interaction = InteractionSystem::new(&self.planets);

        for spec in controls::slider_specs(&self.planets) {
            ctx.emit_ui(UiCommand::AddSlider(spec));
        }
        ctx.emit_ui(UiCommand::SetLabel {
            control: Control::PauseButton,
            text: self.playback.label().to_string(),
        });
        self.apply_theme(ctx);

        log::info!("solar-system: {} planets", self.planets.len());
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            self.handle(ctx, event);
        }
        if self.playback.is_running() {
            self.advance(ctx, TICKS_PER_FRAME);
        }
    }
}
