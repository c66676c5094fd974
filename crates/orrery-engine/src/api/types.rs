/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// A DOM control the app can relabel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// The pause/resume toggle (`#toggleAnimation`).
    PauseButton,
    /// The light/dark toggle (`#toggleTheme`).
    ThemeButton,
}

/// A range input to create in the sliders panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderSpec {
    /// Key sent back with every input event (the `data-name` attribute).
    pub name: String,
    /// Visible label text placed before the input.
    pub label: String,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub value: f32,
}

/// A UI side effect requested by app logic, applied by the web host
/// after each tick. Kept declarative so app code never touches the DOM.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    /// Show the tooltip at pixel coordinates with the given text.
    ShowTooltip { x: f32, y: f32, text: String },
    /// Hide the tooltip.
    HideTooltip,
    /// Replace a control's label text.
    SetLabel { control: Control, text: String },
    /// Swap the body style class.
    SetBodyClass { add: &'static str, remove: &'static str },
    /// Append a slider to the sliders panel.
    AddSlider(SliderSpec),
}
