use rand::Rng;

use crate::{
    catalog::CatalogEntry,
    config,
    flock::Steering,
    mood::Mood,
    types::{Bounds, Category, Tint, Vec2, WordId, WordSnapshot},
};

/// One drifting word on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Word {
    pub id: WordId,
    pub text: String,
    pub reading: String,
    pub category: Category,
    pub mood: Mood,
    pub pos: Vec2,
    /// Direction of travel, magnitude kept at or below 1.
    pub heading: Vec2,
    pub base_speed: f32,
    /// Displacement applied on the last step. Derived from `heading`.
    pub vel: Vec2,
    /// Degrees, within `±ROTATION_LIMIT`.
    pub rotation: f32,
    pub breathing_phase: f32,
    pub scale: f32,
    pub font_size: f32,
    pub tint: Tint,
}

impl Word {
    /// Builds a word from catalog content with freshly rolled kinematics and looks.
    pub fn spawn<R: Rng + ?Sized>(
        id: WordId,
        entry: &CatalogEntry,
        pos: Vec2,
        mood: Mood,
        rng: &mut R,
    ) -> Self {
        let heading = Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0)).limit_unit();
        Self {
            id,
            text: entry.text.clone(),
            reading: entry.reading.clone(),
            category: entry.category,
            mood,
            pos,
            heading,
            base_speed: rng.gen_range(config::BASE_SPEED_MIN..=config::BASE_SPEED_MAX),
            vel: Vec2::ZERO,
            rotation: rng.gen_range(-config::SPAWN_ROTATION..=config::SPAWN_ROTATION),
            breathing_phase: 0.0,
            scale: 1.0,
            font_size: rng.gen_range(config::FONT_SIZE_MIN..=config::FONT_SIZE_MAX),
            tint: Tint::PALETTE[rng.gen_range(0..Tint::PALETTE.len())],
        }
    }

    /// Advances this word by `dt` seconds under `steering`.
    ///
    /// Drift jitter and the steering delta perturb the heading, which is then
    /// capped at unit length before it scales the displacement. Leaving
    /// `bounds` reflects the heading on that axis and clamps the position.
    /// A non-positive or non-finite `dt` leaves the word untouched.
    pub fn integrate<R: Rng + ?Sized>(
        &mut self,
        bounds: &Bounds,
        steering: Steering,
        dt: f32,
        rng: &mut R,
    ) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }
        let params = self.mood.params();

        let jitter = config::HEADING_JITTER;
        self.heading += Vec2::new(rng.gen_range(-jitter..=jitter), rng.gen_range(-jitter..=jitter));
        self.heading += steering.heading_delta();
        self.heading = self.heading.limit_unit();

        let speed = self.base_speed * params.drift_speed * dt * config::DRIFT_SCALE;
        self.vel = self.heading * speed;
        self.pos += self.vel;
        self.contain(bounds);

        self.breathing_phase += dt * params.drift_speed;

        let wobble = config::ROTATION_JITTER;
        self.rotation = (self.rotation + rng.gen_range(-wobble..=wobble))
            .clamp(-config::ROTATION_LIMIT, config::ROTATION_LIMIT);
    }

    fn contain(&mut self, bounds: &Bounds) {
        if self.pos.x < bounds.min.x {
            self.pos.x = bounds.min.x;
            self.heading.x = self.heading.x.abs();
        } else if self.pos.x > bounds.max.x {
            self.pos.x = bounds.max.x;
            self.heading.x = -self.heading.x.abs();
        }

        if self.pos.y < bounds.min.y {
            self.pos.y = bounds.min.y;
            self.heading.y = self.heading.y.abs();
        } else if self.pos.y > bounds.max.y {
            self.pos.y = bounds.max.y;
            self.heading.y = -self.heading.y.abs();
        }
    }

    /// Scale factor of the breathing oscillation, one cycle per two phase units.
    pub fn breathing_scale(&self) -> f32 {
        1.0 + (self.breathing_phase * std::f32::consts::PI).sin() * self.mood.params().breathing_amplitude
    }

    pub fn snapshot(&self) -> WordSnapshot {
        WordSnapshot {
            id: self.id,
            text: self.text.clone(),
            reading: self.reading.clone(),
            category: self.category,
            mood: self.mood,
            pos: self.pos,
            rotation: self.rotation,
            scale: self.scale * self.breathing_scale(),
            font_size: self.font_size,
            tint: self.tint,
        }
    }
}
