use orrery_engine::bridge::protocol::*;
use orrery_engine::{FrameData, ProtocolLayout, Renderer};

/// Renderer that packs each frame into one flat `f32` buffer.
///
/// The JavaScript draw layer reads the buffer straight out of WASM memory
/// (see `get_frame_ptr`) after every tick and issues the GPU calls. Sections
/// beyond capacity are dropped.
pub struct SharedBufferRenderer {
    layout: ProtocolLayout,
    data: Vec<f32>,
    frame_counter: u32,
}

impl SharedBufferRenderer {
    pub fn new(layout: ProtocolLayout) -> Self {
        let mut data = vec![0.0; layout.buffer_total_floats];
        data[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        data[HEADER_MAX_MESHES] = layout.max_meshes as f32;
        data[HEADER_MAX_STARS] = layout.max_stars as f32;
        data[HEADER_MAX_LIGHTS] = layout.max_lights as f32;
        Self {
            layout,
            data,
            frame_counter: 0,
        }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn data_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn header(&self, field: usize) -> f32 {
        self.data[field]
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    /// Copy up to `max` Pod records into the section starting at `offset`.
    /// Returns how many records were written.
    fn write_section<T: bytemuck::Pod>(&mut self, offset: usize, items: &[T], max: usize) -> usize {
        let count = items.len().min(max);
        let floats: &[f32] = bytemuck::cast_slice(&items[..count]);
        self.data[offset..offset + floats.len()].copy_from_slice(floats);
        count
    }
}

impl Renderer for SharedBufferRenderer {
    fn backend(&self) -> &'static str {
        "shared-buffer"
    }

    fn draw(&mut self, frame: &FrameData) {
        let camera_offset = self.layout.camera_offset;
        self.write_section(camera_offset, std::slice::from_ref(&frame.camera), 1);

        let meshes = self.write_section(
            self.layout.mesh_data_offset,
            frame.meshes,
            self.layout.max_meshes,
        );
        let stars = self.write_section(
            self.layout.star_data_offset,
            frame.stars,
            self.layout.max_stars,
        );
        let lights = self.write_section(
            self.layout.light_data_offset,
            frame.lights,
            self.layout.max_lights,
        );
        if meshes < frame.meshes.len() {
            log::debug!("frame: {} meshes over capacity", frame.meshes.len() - meshes);
        }

        self.data[HEADER_MESH_COUNT] = meshes as f32;
        self.data[HEADER_STAR_COUNT] = stars as f32;
        self.data[HEADER_LIGHT_COUNT] = lights as f32;
        self.data[HEADER_CLEAR_R] = frame.clear_color.r;
        self.data[HEADER_CLEAR_G] = frame.clear_color.g;
        self.data[HEADER_CLEAR_B] = frame.clear_color.b;
        self.data[HEADER_STAR_SIZE] = frame.star_style.size;
        self.data[HEADER_STAR_COLOR] = frame.star_style.color.to_hex() as f32;

        self.frame_counter = self.frame_counter.wrapping_add(1);
        self.data[HEADER_FRAME_COUNTER] = self.frame_counter as f32;
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.data[HEADER_SURFACE_WIDTH] = width as f32;
        self.data[HEADER_SURFACE_HEIGHT] = height as f32;
    }
}
