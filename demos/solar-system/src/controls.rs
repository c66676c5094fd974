//! Control panel state: playback, theme and the per-planet speed sliders.

use std::collections::HashMap;

use orrery_engine::{Color, SliderSpec};

use crate::orbit::PlanetRecord;

pub const SLIDER_MIN: f32 = 0.0001;
pub const SLIDER_MAX: f32 = 0.05;
pub const SLIDER_STEP: f32 = 0.0001;

/// Whether orbits advance on each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Running,
    Paused,
}

impl Playback {
    pub fn toggle(self) -> Self {
        match self {
            Playback::Running => Playback::Paused,
            Playback::Paused => Playback::Running,
        }
    }

    /// Button label: names the action the button will take.
    pub fn label(self) -> &'static str {
        match self {
            Playback::Running => "⏸ Pause Animation",
            Playback::Paused => "▶ Resume Animation",
        }
    }

    pub fn is_running(self) -> bool {
        self == Playback::Running
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Button label: names the current theme.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "🌙 Dark Mode",
            Theme::Light => "☀ Light Mode",
        }
    }

    pub fn clear_color(self) -> Color {
        match self {
            Theme::Dark => Color::BLACK,
            Theme::Light => Color::from_hex(0xf0f0f0),
        }
    }

    /// Body class to add for this theme.
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Body class the other theme uses, removed on switch.
    pub fn other_body_class(self) -> &'static str {
        self.toggle().body_class()
    }
}

/// One slider per planet, in table order, starting at the planet's speed.
pub fn slider_specs(records: &[PlanetRecord]) -> Vec<SliderSpec> {
    records
        .iter()
        .map(|r| SliderSpec {
            name: r.name.to_string(),
            label: format!("{} Speed:", r.name),
            min: SLIDER_MIN,
            max: SLIDER_MAX,
            step: SLIDER_STEP,
            value: r.angular_speed,
        })
        .collect()
}

/// Slider name to record index, built once at startup.
pub fn slider_index(records: &[PlanetRecord]) -> HashMap<&'static str, usize> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| (r.name, i))
        .collect()
}
