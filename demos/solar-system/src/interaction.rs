//! Pointer handling: hover tooltips and click-to-focus.
//!
//! Both paths cast a ray from the camera through the pointer and test it
//! against the planet bodies only. The sun is not pickable.

use glam::{Vec2, Vec3};
use orrery_engine::{pick_entities, EngineContext, EntityId, UiCommand};

use crate::bodies::FOCUS_DISTANCE;
use crate::orbit::PlanetRecord;

/// Tooltip offset from the pointer, in pixels.
pub const TOOLTIP_OFFSET: f32 = 10.0;

/// Last known pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    /// Normalized device coordinates, both axes in [-1, 1].
    pub ndc: Vec2,
    /// Raw pixel position of the last move.
    pub pixel: Vec2,
}

/// What a pointer event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionResult {
    /// Ray missed every planet.
    None,
    /// Pointer is over the planet at this record index.
    Hover { planet: usize },
    /// Camera moved to focus the planet at this record index.
    Focus { planet: usize, target: Vec3 },
}

/// Pointer state plus the pick logic that reads it.
#[derive(Debug, Default)]
pub struct InteractionSystem {
    pointer: PointerState,
    /// Entity ids of `records`, in table order. Fixes the tie-break order.
    bodies: Vec<EntityId>,
}

impl InteractionSystem {
    pub fn new(records: &[PlanetRecord]) -> Self {
        Self {
            pointer: PointerState::default(),
            bodies: records.iter().map(|r| r.entity).collect(),
        }
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Index of the nearest planet under the stored pointer.
    fn pick(&self, ctx: &EngineContext) -> Option<usize> {
        let ray = ctx.camera.ray_from_ndc(self.pointer.ndc);
        let hit = pick_entities(&ray, &ctx.scene, &self.bodies)?;
        self.bodies.iter().position(|&id| id == hit.key)
    }

    /// Track the pointer and show or hide the tooltip.
    pub fn on_move(
        &mut self,
        ctx: &mut EngineContext,
        records: &[PlanetRecord],
        pixel: Vec2,
    ) -> InteractionResult {
        self.pointer = PointerState {
            ndc: ctx.viewport.to_ndc(pixel),
            pixel,
        };

        match self.pick(ctx) {
            Some(planet) => {
                ctx.emit_ui(UiCommand::ShowTooltip {
                    x: pixel.x + TOOLTIP_OFFSET,
                    y: pixel.y + TOOLTIP_OFFSET,
                    text: records[planet].name.to_string(),
                });
                InteractionResult::Hover { planet }
            }
            None => {
                ctx.emit_ui(UiCommand::HideTooltip);
                InteractionResult::None
            }
        }
    }

    /// Re-cast from the last pointer position. On a hit, move the camera
    /// to `FOCUS_DISTANCE` from the origin along the planet's direction and
    /// face the planet.
    pub fn on_click(&self, ctx: &mut EngineContext) -> InteractionResult {
        let Some(planet) = self.pick(ctx) else {
            return InteractionResult::None;
        };
        let Some(body) = ctx.scene.get(self.bodies[planet]) else {
            return InteractionResult::None;
        };
        let target = body.pos;
        // A body at the origin has no direction to back away along.
        let Some(dir) = target.try_normalize() else {
            log::warn!("interaction: cannot focus a body at the origin");
            return InteractionResult::None;
        };

        ctx.camera.position = dir * FOCUS_DISTANCE;
        ctx.camera.look_at(target);
        log::debug!("interaction: focus {} at {:?}", body.tag, target);
        InteractionResult::Focus { planet, target }
    }
}
