//! Input tracking: wheel zoom, drag-to-pan, and click detection
//!
//! The host forwards raw input events; the tracker folds them into the
//! viewport and records at most one click per frame for the marker
//! renderer to consume.

use nalgebra_glm::{vec2, Vec2};
use overmap_config::OverlayConfig;
use overmap_shared::{ElementState, MapInputEvent, MouseButton};

use crate::coordinates::{apply_wheel_zoom, ViewportState};

/// Cursor travel past which a press stops being a click and becomes a
/// drag, in screen pixels.
const DRAG_THRESHOLD: f32 = 4.0;

#[derive(Debug, Default)]
pub struct InputTracker {
    cursor: Vec2,
    /// Cursor position at left-button press; present while the button is
    /// held.
    press_anchor: Option<Vec2>,
    /// Click recorded this frame, pending pickup by the renderer.
    pending_click: Option<Vec2>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Consume the click recorded since the last call, if any.
    pub fn take_click(&mut self) -> Option<Vec2> {
        self.pending_click.take()
    }

    pub fn handle_event(
        &mut self,
        event: &MapInputEvent,
        viewport: &mut ViewportState,
        config: &mut OverlayConfig,
    ) {
        match event {
            MapInputEvent::MouseWheel { delta } => {
                if viewport.is_hovered {
                    apply_wheel_zoom(viewport, *delta, config);
                }
            }
            MapInputEvent::CursorMoved { position } => {
                let previous = self.cursor;
                self.cursor = vec2(position.x as f32, position.y as f32);

                if let Some(anchor) = self.press_anchor {
                    if !viewport.is_dragging
                        && (self.cursor - anchor).norm() > DRAG_THRESHOLD
                    {
                        viewport.is_dragging = true;
                        // Manual panning takes over from auto-centering.
                        config.follow_player = false;
                    }
                    if viewport.is_dragging {
                        viewport.pan_offset += (self.cursor - previous) / viewport.zoom_scale;
                    }
                }
            }
            MapInputEvent::MouseInput { state, button } => {
                if *button != MouseButton::Left {
                    return;
                }
                match state {
                    ElementState::Pressed => {
                        if viewport.is_hovered {
                            self.press_anchor = Some(self.cursor);
                        }
                    }
                    ElementState::Released => {
                        if self.press_anchor.take().is_some() && !viewport.is_dragging {
                            self.pending_click = Some(self.cursor);
                        }
                        viewport.is_dragging = false;
                    }
                }
            }
            MapInputEvent::WindowResized { width, height } => {
                viewport.size = vec2(*width, *height);
                // A resize invalidates the anchor geometry; abandon the
                // gesture rather than pan by a bogus delta.
                self.press_anchor = None;
                viewport.is_dragging = false;
            }
        }
    }
}
