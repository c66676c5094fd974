use wasm_bindgen::prelude::*;

mod app;
mod bodies;
mod builder;
mod controls;
mod interaction;
mod orbit;
use app::SolarSystem;

orrery_web::export_app!(SolarSystem, "solar-system");
