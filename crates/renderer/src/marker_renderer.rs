//! Per-marker draw pass: icons, radius rings, hit regions, tooltips
//!
//! Consumes the presentations built by the classifier and talks to the
//! host canvas. Tooltip text sources are only resolved for the marker
//! actually under the cursor, which is what keeps deferred lookups cheap.

use nalgebra_glm::Vec2;
use overmap_config::{IconPolicy, OverlayConfig};
use overmap_shared::MarkerPresentation;

use crate::canvas::Canvas;
use crate::coordinates::{world_length_to_screen, world_to_screen};
use crate::render_context::RenderContext;

/// Icon edge length at scale 1.0, in screen pixels.
const BASE_ICON_SIZE: f32 = 32.0;

/// Cursor state for one frame of marker drawing.
///
/// At most one marker interacts per frame: the first marker that
/// hit-tests claims the hover, and a click is consumed by that marker
/// alone. Overlapping markers (aethernet shards on an aetheryte plaza)
/// must not stack tooltips or dispatch one click many times.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub cursor: Vec2,
    clicked: Option<Vec2>,
    hover_claimed: bool,
}

impl FrameInput {
    pub fn new(cursor: Vec2, clicked: Option<Vec2>) -> Self {
        Self {
            cursor,
            clicked,
            hover_claimed: false,
        }
    }
}

/// Effective on-screen icon size after global scale, per-icon override,
/// and optional zoom coupling.
pub fn icon_size(config: &OverlayConfig, icons: &IconPolicy, icon_id: u32, zoom_scale: f32) -> f32 {
    let mut size = BASE_ICON_SIZE * config.icon_scale * icons.setting(icon_id).scale;
    if config.scale_with_zoom {
        size *= zoom_scale;
    }
    size
}

/// Draw one marker. Returns whether it claimed the hover this frame.
pub fn draw_marker(
    presentation: &MarkerPresentation,
    ctx: &RenderContext,
    canvas: &mut dyn Canvas,
    input: &mut FrameInput,
) -> bool {
    let viewport = &ctx.viewport;
    let center = world_to_screen(
        presentation.world_position,
        viewport.pan_offset,
        viewport.zoom_scale,
        viewport.origin,
    );

    // The ring is world data and draws even for iconless markers.
    if ctx.config.show_radius && presentation.radius > 0.0 {
        let screen_radius = world_length_to_screen(presentation.radius, viewport.zoom_scale);
        canvas.draw_circle_filled(center, screen_radius, presentation.radius_color);
        canvas.draw_circle_outline(center, screen_radius, presentation.radius_outline_color);
    }

    if presentation.icon_id == 0 || ctx.icons.setting(presentation.icon_id).hidden {
        return false;
    }

    let size = icon_size(
        &ctx.config,
        &ctx.icons,
        presentation.icon_id,
        viewport.zoom_scale,
    );
    canvas.draw_icon(presentation.icon_id, center, size);
    canvas.push_hit_region(center, size);

    let half = size * 0.5;
    let offset = input.cursor - center;
    let hovered = !input.hover_claimed
        && viewport.is_hovered
        && offset.x.abs() <= half
        && offset.y.abs() <= half;
    if !hovered {
        return false;
    }
    input.hover_claimed = true;

    if let Some(text) = tooltip_text(presentation) {
        canvas.draw_tooltip(&text);
    }

    if input.clicked.take().is_some() {
        if let Some(action) = &presentation.on_click {
            action();
        }
    }

    true
}

/// Resolve the tooltip for a hovered marker; None when both sources are
/// empty, so no empty tooltip box flickers in.
fn tooltip_text(presentation: &MarkerPresentation) -> Option<String> {
    let primary = presentation.primary_text.resolve();
    let secondary = presentation.secondary_text.resolve();

    match (primary, secondary) {
        (Some(p), Some(s)) => Some(format!("{p}\n{s}")),
        (Some(p), None) => Some(p),
        (None, Some(s)) => Some(s),
        (None, None) => None,
    }
}
