//! Input event types delivered by the host UI each frame

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalPosition {
    pub x: f64,
    pub y: f64,
}

impl PhysicalPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ElementState {
    Pressed,
    Released,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MouseButton {
    Left,
    Right,
}

/// The subset of host window events the overlay reacts to.
#[derive(Clone, Debug, PartialEq)]
pub enum MapInputEvent {
    /// Wheel movement in notches; positive is away from the user.
    MouseWheel { delta: f32 },
    CursorMoved { position: PhysicalPosition },
    MouseInput {
        state: ElementState,
        button: MouseButton,
    },
    /// Host window resized; drags in progress are cancelled.
    WindowResized { width: f32, height: f32 },
}
