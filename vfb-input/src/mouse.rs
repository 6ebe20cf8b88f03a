use vfb_common::Point;

/// Button numbers reported to the device model. A press is reported as the
/// positive number and a release as its negation; 0 means "no button".
pub mod buttons {
    pub const NONE: i32 = 0;
    pub const LEFT: i32 = 1;
    pub const MIDDLE: i32 = 2;
    pub const RIGHT: i32 = 3;
    pub const WHEEL_UP: i32 = 4;
    pub const WHEEL_DOWN: i32 = 5;
    pub const WHEEL_LEFT: i32 = 6;
    pub const WHEEL_RIGHT: i32 = 7;
}

/// Last known pointer position, in window coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    pos: Point,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update position.
    pub fn set_pos(&mut self, x: i32, y: i32) {
        self.pos = Point::new(x, y);
    }

    /// Get current position.
    pub fn pos(&self) -> Point {
        self.pos
    }
}

/// Wheel button and click count for one axis of wheel motion.
///
/// Each unit of delta is one discrete click, so `delta = -3` on the vertical
/// axis is three clicks of [`buttons::WHEEL_DOWN`].
pub fn wheel_clicks(delta: i32, positive: i32, negative: i32) -> Option<(i32, u32)> {
    match delta {
        0 => None,
        d if d > 0 => Some((positive, d as u32)),
        d => Some((negative, d.unsigned_abs())),
    }
}
