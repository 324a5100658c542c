//! Coordinate transforms between world, map texture, and screen space
//!
//! The game stores marker positions in a center-based world coordinate
//! system at 16x the map texture resolution. Converting to texture space
//! divides by the fixed scalar and shifts by the half-extent so that
//! (0,0) lands at the texture's top-left; pan and zoom are applied on top
//! of that. `screen_to_world` is the exact algebraic inverse and is what
//! hit-testing and click-to-place go through.

use nalgebra_glm::{vec2, Vec2};
use overmap_config::OverlayConfig;
use overmap_data::MapRecord;

/// Raw world units per map texture unit.
pub const MAP_COORDINATE_SCALE: f32 = 16.0;
/// Half-extent of the 2048-unit map texture; shifts center-based
/// coordinates to top-left-based ones.
pub const MAP_CENTER_OFFSET: f32 = 1024.0;
/// Zoom floor; linear zoom would otherwise happily go negative.
pub const MIN_ZOOM_SCALE: f32 = 0.05;

/// Mutable viewport state, owned by the overlay and persisted across
/// frames. Everything else in the pipeline is rebuilt per frame.
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Pan offset in texture units (pre-zoom).
    pub pan_offset: Vec2,
    pub zoom_scale: f32,
    pub is_dragging: bool,
    pub is_hovered: bool,
    /// Screen position of the viewport's top-left corner.
    pub origin: Vec2,
    pub size: Vec2,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            pan_offset: vec2(0.0, 0.0),
            zoom_scale: 1.0,
            is_dragging: false,
            is_hovered: false,
            origin: vec2(0.0, 0.0),
            size: vec2(400.0, 250.0),
        }
    }
}

impl ViewportState {
    /// Recenter so that `world` lands in the middle of the viewport.
    pub fn center_on_world(&mut self, world: Vec2) {
        let texture = world / MAP_COORDINATE_SCALE + Vec2::repeat(MAP_CENTER_OFFSET);
        self.pan_offset = self.size * 0.5 / self.zoom_scale - texture;
    }

    /// Recenter on the map texture itself.
    pub fn center_on_map(&mut self) {
        self.pan_offset = self.size * 0.5 / self.zoom_scale - Vec2::repeat(MAP_CENTER_OFFSET);
    }
}

pub fn world_to_screen(world: Vec2, pan_offset: Vec2, zoom_scale: f32, origin: Vec2) -> Vec2 {
    let texture = world / MAP_COORDINATE_SCALE + Vec2::repeat(MAP_CENTER_OFFSET);
    origin + (texture + pan_offset) * zoom_scale
}

pub fn screen_to_world(screen: Vec2, pan_offset: Vec2, zoom_scale: f32, origin: Vec2) -> Vec2 {
    let texture = (screen - origin) / zoom_scale - pan_offset;
    (texture - Vec2::repeat(MAP_CENTER_OFFSET)) * MAP_COORDINATE_SCALE
}

/// Scale a world-space length (marker radius) to screen pixels.
pub fn world_length_to_screen(length: f32, zoom_scale: f32) -> f32 {
    length / MAP_COORDINATE_SCALE * zoom_scale
}

/// Apply one wheel movement to the zoom scale.
///
/// Linear mode adds `speed` per notch; multiplicative mode compounds
/// `1 + speed` per notch, so two notches give `(1 + speed)^2` rather than
/// `1 + 2 * speed`.
pub fn apply_wheel_zoom(viewport: &mut ViewportState, wheel_delta: f32, config: &OverlayConfig) {
    if config.zoom_locked || wheel_delta == 0.0 {
        return;
    }

    let scale = if config.use_linear_zoom {
        viewport.zoom_scale + config.zoom_speed * wheel_delta
    } else {
        viewport.zoom_scale * (1.0 + config.zoom_speed).powf(wheel_delta)
    };

    viewport.zoom_scale = scale.max(MIN_ZOOM_SCALE);
}

/// Convert raw world units to the in-game map coordinate readout
/// (the "X: 11.4, Y: 12.8" numbers players navigate by), using the map's
/// size factor and offsets.
pub fn world_to_map_display(world: Vec2, map: &MapRecord) -> Vec2 {
    let factor = map.size_factor as f32 / 100.0;
    let adjusted_x = (world.x + map.offset_x as f32) * factor;
    let adjusted_y = (world.y + map.offset_y as f32) * factor;

    vec2(
        41.0 / factor * ((adjusted_x + MAP_CENTER_OFFSET) / 2048.0) + 1.0,
        41.0 / factor * ((adjusted_y + MAP_CENTER_OFFSET) / 2048.0) + 1.0,
    )
}
