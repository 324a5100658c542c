//! Canvas abstraction over the host's immediate-mode draw list
//!
//! The overlay never talks to a rendering backend directly; the host hands
//! it something that can blit icons, fill circles, and show tooltips, and
//! the pipeline calls into it once per marker per frame.

use nalgebra_glm::Vec2;
use overmap_shared::Color;

pub trait Canvas {
    /// Blit a game icon centered at `center`, `size` pixels square.
    fn draw_icon(&mut self, icon_id: u32, center: Vec2, size: f32);

    fn draw_circle_filled(&mut self, center: Vec2, radius: f32, color: Color);

    fn draw_circle_outline(&mut self, center: Vec2, radius: f32, color: Color);

    /// Register an invisible hit-target so the host UI treats the marker
    /// as an interactive item.
    fn push_hit_region(&mut self, center: Vec2, size: f32);

    /// Show a tooltip at the cursor.
    fn draw_tooltip(&mut self, text: &str);

    /// Draw free-standing text (coordinate bar readout).
    fn draw_text(&mut self, position: Vec2, text: &str, color: Color);
}
