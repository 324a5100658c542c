//! Per-frame marker presentation and lazy tooltip text

use std::fmt;
use std::rc::Rc;

use nalgebra_glm::Vec2;

/// RGBA color, each channel 0..=1.
pub type Color = [f32; 4];

/// Default fill for area radius circles (medium purple, translucent).
pub const RADIUS_COLOR: Color = [0.576, 0.439, 0.858, 0.33];
/// Default outline for area radius circles.
pub const RADIUS_OUTLINE_COLOR: Color = [0.576, 0.439, 0.858, 1.0];
/// Fill and outline override for fates about to expire.
pub const URGENT_RADIUS_COLOR: Color = [0.86, 0.22, 0.16, 0.6];

/// Zero-argument action dispatched when a marker is clicked.
///
/// Actions capture shared handles (teleporter, navigator) and run
/// synchronously on the UI thread.
pub type ClickAction = Rc<dyn Fn()>;

/// Deferred tooltip text.
///
/// Expensive formatting (name lookups, cost queries) only runs when the
/// tooltip is actually shown, so producers are stored unevaluated.
/// `Empty` is distinct from a literal empty string: it means "this marker
/// has no text at all", which callers may branch on without evaluating
/// anything.
pub enum TextSource {
    Empty,
    Literal(String),
    Deferred(Box<dyn Fn() -> String>),
}

impl TextSource {
    pub fn deferred(producer: impl Fn() -> String + 'static) -> Self {
        TextSource::Deferred(Box::new(producer))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TextSource::Empty)
    }

    /// Evaluate the producer. Only call this when the text will actually
    /// be displayed; laziness here is a performance contract.
    pub fn resolve(&self) -> Option<String> {
        match self {
            TextSource::Empty => None,
            TextSource::Literal(text) => Some(text.clone()),
            TextSource::Deferred(producer) => Some(producer()),
        }
    }
}

impl Default for TextSource {
    fn default() -> Self {
        TextSource::Empty
    }
}

impl fmt::Debug for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSource::Empty => write!(f, "TextSource::Empty"),
            TextSource::Literal(text) => write!(f, "TextSource::Literal({text:?})"),
            TextSource::Deferred(_) => write!(f, "TextSource::Deferred(..)"),
        }
    }
}

/// Everything needed to draw and interact with one marker this frame.
///
/// Built by the classifier, optionally rewritten by annotators, consumed
/// by the marker renderer. Lifetime is a single frame; never cached.
pub struct MarkerPresentation {
    /// Raw world units, center-based; the renderer transforms this to
    /// screen space every draw.
    pub world_position: Vec2,
    pub icon_id: u32,
    /// World-space radius; zero draws no circle.
    pub radius: f32,
    pub radius_color: Color,
    pub radius_outline_color: Color,
    pub primary_text: TextSource,
    pub secondary_text: TextSource,
    pub on_click: Option<ClickAction>,
}

impl MarkerPresentation {
    pub fn new(world_position: Vec2, icon_id: u32) -> Self {
        Self {
            world_position,
            icon_id,
            radius: 0.0,
            radius_color: RADIUS_COLOR,
            radius_outline_color: RADIUS_OUTLINE_COLOR,
            primary_text: TextSource::Empty,
            secondary_text: TextSource::Empty,
            on_click: None,
        }
    }
}
