//! Render pipeline for the Overmap overlay
//!
//! Owns the per-frame flow: fold input into the viewport, pull the live
//! marker table, classify each record into a presentation, annotate fate
//! candidates, then draw through the host canvas. All state that survives
//! a frame lives in [`RenderContext`] and the input tracker; presentations
//! are rebuilt from scratch every frame.

pub mod canvas;
pub mod classifier;
pub mod controls;
pub mod coordinates;
pub mod fate;
pub mod marker_renderer;
pub mod render_context;

pub use canvas::Canvas;
pub use controls::InputTracker;
pub use coordinates::ViewportState;
pub use marker_renderer::FrameInput;
pub use render_context::RenderContext;

use nalgebra_glm::vec2;
use overmap_shared::{MapInputEvent, MarkerKind};

/// The overlay itself: context plus the little cross-frame state the
/// pipeline needs (input gesture tracking, last displayed map).
pub struct MapOverlay {
    pub ctx: RenderContext,
    input: InputTracker,
    last_map_id: u32,
}

impl MapOverlay {
    pub fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            input: InputTracker::new(),
            last_map_id: 0,
        }
    }

    pub fn handle_event(&mut self, event: &MapInputEvent) {
        self.input
            .handle_event(event, &mut self.ctx.viewport, &mut self.ctx.config);
    }

    /// Run one frame of the pipeline against the host canvas.
    pub fn render_frame(&mut self, canvas: &mut dyn Canvas) {
        let ctx = &mut self.ctx;

        let cursor = self.input.cursor();
        let local = cursor - ctx.viewport.origin;
        ctx.viewport.is_hovered = local.x >= 0.0
            && local.y >= 0.0
            && local.x <= ctx.viewport.size.x
            && local.y <= ctx.viewport.size.y;

        let selected_map = ctx.live.selected_map_id();
        if selected_map != self.last_map_id {
            // Pan from the previous map is meaningless on the new one.
            ctx.viewport.center_on_map();
            self.last_map_id = selected_map;
        }

        if ctx.config.follow_player && selected_map == ctx.live.current_map_id() {
            if let Some(player) = ctx.live.player_position() {
                ctx.viewport.center_on_world(player);
            }
        }

        let fates = ctx.live.active_fates();
        let mut frame = FrameInput::new(cursor, self.input.take_click());

        for record in ctx.live.markers() {
            let mut presentation = classifier::classify(&record, ctx);

            if record.kind == MarkerKind::FateCandidate {
                // Resolve the candidate name once; on a match the
                // annotator replaces it with a literal anyway.
                let candidate = presentation.primary_text.resolve().unwrap_or_default();
                fate::try_annotate(&mut presentation, &candidate, &fates);
            }

            marker_renderer::draw_marker(&presentation, ctx, canvas, &mut frame);
        }

        if ctx.config.show_coordinate_bar {
            draw_coordinate_bar(ctx, canvas, &frame);
        }
    }
}

/// Readout of the cursor's in-game map coordinates along the bottom edge
/// of the viewport. Drawn only while the cursor is over the map and the
/// displayed map's metadata is available.
fn draw_coordinate_bar(ctx: &RenderContext, canvas: &mut dyn Canvas, frame: &FrameInput) {
    if !ctx.viewport.is_hovered {
        return;
    }
    let map = match ctx.data.map(ctx.live.selected_map_id()) {
        Some(map) => map,
        None => return,
    };

    let world = coordinates::screen_to_world(
        frame.cursor,
        ctx.viewport.pan_offset,
        ctx.viewport.zoom_scale,
        ctx.viewport.origin,
    );
    let display = coordinates::world_to_map_display(world, &map);

    let anchor = ctx.viewport.origin + vec2(8.0, ctx.viewport.size.y - 20.0);
    canvas.draw_text(
        anchor,
        &format!("X: {:.1}  Y: {:.1}", display.x, display.y),
        [1.0, 1.0, 1.0, 1.0],
    );
}
