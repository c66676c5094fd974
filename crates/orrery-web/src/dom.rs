//! Browser bindings: element lookup, UI command application, event
//! listeners and the animation-frame loop.
//!
//! Expected page elements: `#container`, `#tooltip`, `#sliders`,
//! `#toggleAnimation` and `#toggleTheme`.

use std::cell::RefCell;
use std::rc::Rc;

use orrery_engine::{Control, InputEvent, SliderSpec, UiCommand};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlCanvasElement, HtmlElement, HtmlInputElement, MouseEvent, Window,
};

fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))
}

fn window_size(window: &Window) -> (f32, f32) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Handles to the page elements the app drives.
pub struct Dom {
    window: Window,
    document: Document,
    body: HtmlElement,
    canvas: HtmlCanvasElement,
    tooltip: HtmlElement,
    sliders: Element,
    pause_button: Element,
    theme_button: Element,
}

impl Dom {
    /// Look up the page elements and mount a drawing canvas in `#container`.
    pub fn attach() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

        let container = element_by_id(&document, "container")?;
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        container.append_child(&canvas)?;

        let tooltip = element_by_id(&document, "tooltip")?.dyn_into::<HtmlElement>()?;
        let sliders = element_by_id(&document, "sliders")?;
        let pause_button = element_by_id(&document, "toggleAnimation")?;
        let theme_button = element_by_id(&document, "toggleTheme")?;

        let dom = Self {
            window,
            document,
            body,
            canvas,
            tooltip,
            sliders,
            pause_button,
            theme_button,
        };
        let (w, h) = dom.viewport_size();
        resize_canvas(&dom.canvas, w, h);
        Ok(dom)
    }

    /// Current window inner size in CSS pixels.
    pub fn viewport_size(&self) -> (f32, f32) {
        window_size(&self.window)
    }

    fn control(&self, control: Control) -> &Element {
        match control {
            Control::PauseButton => &self.pause_button,
            Control::ThemeButton => &self.theme_button,
        }
    }

    /// Apply one UI command to the page.
    pub fn apply(&self, command: &UiCommand) -> Result<(), JsValue> {
        match command {
            UiCommand::ShowTooltip { x, y, text } => {
                let style = self.tooltip.style();
                style.set_property("display", "block")?;
                style.set_property("left", &format!("{}px", x))?;
                style.set_property("top", &format!("{}px", y))?;
                self.tooltip.set_text_content(Some(text));
            }
            UiCommand::HideTooltip => {
                self.tooltip.style().set_property("display", "none")?;
            }
            UiCommand::SetLabel { control, text } => {
                self.control(*control).set_text_content(Some(text));
            }
            UiCommand::SetBodyClass { add, remove } => {
                let classes = self.body.class_list();
                classes.remove_1(remove)?;
                classes.add_1(add)?;
            }
            UiCommand::AddSlider(spec) => self.add_slider(spec)?,
        }
        Ok(())
    }

    /// Apply commands in order, logging any that fail.
    pub fn apply_all(&self, commands: &[UiCommand]) {
        for command in commands {
            if let Err(err) = self.apply(command) {
                log::warn!("dom: {:?} failed: {:?}", command, err);
            }
        }
    }

    fn add_slider(&self, spec: &SliderSpec) -> Result<(), JsValue> {
        let label = self.document.create_element("label")?;
        label.set_text_content(Some(&format!("{} ", spec.label)));

        let input = self
            .document
            .create_element("input")?
            .dyn_into::<HtmlInputElement>()?;
        input.set_type("range");
        input.set_min(&spec.min.to_string());
        input.set_max(&spec.max.to_string());
        input.set_step(&spec.step.to_string());
        input.set_value(&spec.value.to_string());
        input.dataset().set("name", &spec.name)?;

        label.append_child(&input)?;
        self.sliders.append_child(&label)?;
        Ok(())
    }

    /// Register pointer, click, resize, slider and button listeners.
    /// Every listener turns its DOM event into an [`InputEvent`] for `dispatch`.
    pub fn install_listeners(&self, dispatch: impl Fn(InputEvent) + 'static) -> Result<(), JsValue> {
        let dispatch: Rc<dyn Fn(InputEvent)> = Rc::new(dispatch);

        let d = dispatch.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            d(InputEvent::PointerMove {
                x: e.client_x() as f32,
                y: e.client_y() as f32,
            });
        });
        self.window
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();

        let d = dispatch.clone();
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_e: MouseEvent| {
            d(InputEvent::Click);
        });
        self.window
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();

        let d = dispatch.clone();
        let window = self.window.clone();
        let canvas = self.canvas.clone();
        let on_resize = Closure::<dyn FnMut(Event)>::new(move |_e: Event| {
            let (width, height) = window_size(&window);
            resize_canvas(&canvas, width, height);
            d(InputEvent::Resize { width, height });
        });
        self.window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();

        // One delegated listener covers every range input in the panel.
        let d = dispatch.clone();
        let on_input = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
            let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(name) = input.dataset().get("name") else {
                log::warn!("dom: slider without data-name");
                return;
            };
            match input.value().parse::<f32>() {
                Ok(value) => d(InputEvent::SliderInput { name, value }),
                Err(err) => log::warn!("dom: slider {} sent {:?}: {}", name, input.value(), err),
            }
        });
        self.sliders
            .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
        on_input.forget();

        for (element, control) in [
            (&self.pause_button, Control::PauseButton),
            (&self.theme_button, Control::ThemeButton),
        ] {
            let d = dispatch.clone();
            let on_press = Closure::<dyn FnMut(MouseEvent)>::new(move |_e: MouseEvent| {
                d(InputEvent::Button { control });
            });
            element.add_event_listener_with_callback("click", on_press.as_ref().unchecked_ref())?;
            on_press.forget();
        }

        Ok(())
    }

    /// Call `frame` on every display refresh for the lifetime of the page.
    pub fn start_animation_loop(&self, mut frame: impl FnMut() + 'static) -> Result<(), JsValue> {
        let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let next = slot.clone();
        let window = self.window.clone();

        *slot.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
            frame();
            if let Some(callback) = next.borrow().as_ref() {
                if let Err(err) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    log::error!("dom: requestAnimationFrame failed: {:?}", err);
                }
            }
        }));

        if let Some(callback) = slot.borrow().as_ref() {
            self.window
                .request_animation_frame(callback.as_ref().unchecked_ref())?;
        }
        Ok(())
    }
}

fn resize_canvas(canvas: &HtmlCanvasElement, width: f32, height: f32) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}
