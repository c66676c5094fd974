pub mod scene;
pub mod viewport;
