pub mod buffer;
pub mod config;
pub mod dom;
pub mod runner;

pub use orrery_engine;

pub use buffer::SharedBufferRenderer;
pub use config::{merge_overrides, resolve_config};
pub use dom::Dom;
pub use runner::AppRunner;

/// Generate all `#[wasm_bindgen]` exports for an app.
///
/// The macro generates:
/// - `thread_local!` storage for the AppRunner
/// - `with_runner()` helper function
/// - `app_start`, which attaches to the page, wires DOM events into the
///   input queue and drives one tick per animation frame
/// - Frame buffer accessors for the JavaScript draw layer
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod app;
/// use app::MyApp;
///
/// orrery_web::export_app!(MyApp, "my-app");
/// ```
///
/// # Arguments
///
/// - `$app_type`: The app struct type; it must implement `orrery_engine::App` and `Default`
/// - `$app_name`: A string literal used in log messages
#[macro_export]
macro_rules! export_app {
    ($app_type:ty, $app_name:literal) => {
        use std::cell::RefCell;
        use std::rc::Rc;

        thread_local! {
            static RUNNER: RefCell<
                Option<$crate::AppRunner<$app_type, $crate::SharedBufferRenderer>>,
            > = RefCell::new(None);
        }

        fn with_runner<T>(
            f: impl FnOnce(&mut $crate::AppRunner<$app_type, $crate::SharedBufferRenderer>) -> T,
        ) -> Option<T> {
            RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
        }

        /// Start the app. `config_json` holds optional config overrides
        /// (an empty string keeps the defaults).
        #[wasm_bindgen]
        pub fn app_start(config_json: &str) -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let dom = Rc::new($crate::Dom::attach()?);
            let app = <$app_type>::default();
            let config = $crate::resolve_config(&app, config_json, dom.viewport_size());
            let layout = $crate::orrery_engine::ProtocolLayout::from_config(&config);
            let renderer = $crate::SharedBufferRenderer::new(layout);

            let mut runner = $crate::AppRunner::with_config(app, renderer, config);
            runner.init();
            dom.apply_all(&runner.drain_ui_commands());
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            dom.install_listeners(|event| {
                if with_runner(|r| r.push_input(event)).is_none() {
                    log::warn!("{}: input before start", $app_name);
                }
            })?;

            let frame_dom = dom.clone();
            dom.start_animation_loop(move || {
                let commands = with_runner(|r| {
                    r.tick();
                    r.drain_ui_commands()
                });
                if let Some(commands) = commands {
                    frame_dom.apply_all(&commands);
                }
            })?;

            log::info!("{}: started", $app_name);
            Ok(())
        }

        // ---- Frame buffer accessors ----

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            with_runner(|r| r.renderer().data_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_frame_len() -> u32 {
            with_runner(|r| r.renderer().layout().buffer_total_floats as u32).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_frame_counter() -> u32 {
            with_runner(|r| r.renderer().frame_counter()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_camera_offset() -> u32 {
            with_runner(|r| r.renderer().layout().camera_offset as u32).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_mesh_data_offset() -> u32 {
            with_runner(|r| r.renderer().layout().mesh_data_offset as u32).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_star_data_offset() -> u32 {
            with_runner(|r| r.renderer().layout().star_data_offset as u32).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_light_data_offset() -> u32 {
            with_runner(|r| r.renderer().layout().light_data_offset as u32).unwrap_or(0)
        }
    };
}
