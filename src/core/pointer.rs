use crate::types::Vec2;

/// Last reported touch/drag location, forgotten after a timeout.
///
/// Age is accumulated from tick time rather than the wall clock so that a
/// seeded run replays identically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    location: Option<Vec2>,
    age: f32,
    timeout: f32,
}

impl Pointer {
    pub fn new(timeout: f32) -> Self {
        Self {
            location: None,
            age: 0.0,
            timeout,
        }
    }

    /// Replaces the location and restarts the timeout. `None` clears it.
    pub fn set(&mut self, location: Option<Vec2>) {
        self.location = location;
        self.age = 0.0;
    }

    pub fn location(&self) -> Option<Vec2> {
        self.location
    }

    pub fn advance(&mut self, dt: f32) {
        if self.location.is_none() {
            return;
        }
        self.age += dt;
        if self.age >= self.timeout {
            self.location = None;
            self.age = 0.0;
        }
    }
}
