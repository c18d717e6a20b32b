/// Behavioural profile of a word. Rolled at spawn, fixed afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mood {
    Curious,
    Calm,
    Fearful,
    Sleepy,
    Playful,
}

/// Tuning scalars looked up by mood.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoodParams {
    /// Multiplier on base speed; also the breathing phase rate.
    pub drift_speed: f32,
    pub breathing_amplitude: f32,
    pub flock_radius: f32,
    pub separation_radius: f32,
    pub touch_response_radius: f32,
}

const CURIOUS: MoodParams = MoodParams {
    drift_speed: 1.2,
    breathing_amplitude: 0.15,
    flock_radius: 80.0,
    separation_radius: 40.0,
    touch_response_radius: 80.0,
};

const CALM: MoodParams = MoodParams {
    drift_speed: 0.8,
    breathing_amplitude: 0.1,
    flock_radius: 60.0,
    separation_radius: 30.0,
    touch_response_radius: 60.0,
};

const FEARFUL: MoodParams = MoodParams {
    drift_speed: 1.5,
    breathing_amplitude: 0.2,
    flock_radius: 100.0,
    separation_radius: 60.0,
    touch_response_radius: 120.0,
};

const SLEEPY: MoodParams = MoodParams {
    drift_speed: 0.5,
    breathing_amplitude: 0.25,
    flock_radius: 40.0,
    separation_radius: 20.0,
    touch_response_radius: 40.0,
};

const PLAYFUL: MoodParams = MoodParams {
    drift_speed: 1.8,
    breathing_amplitude: 0.18,
    flock_radius: 120.0,
    separation_radius: 50.0,
    touch_response_radius: 100.0,
};

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Curious,
        Mood::Calm,
        Mood::Fearful,
        Mood::Sleepy,
        Mood::Playful,
    ];

    pub const fn params(self) -> &'static MoodParams {
        match self {
            Mood::Curious => &CURIOUS,
            Mood::Calm => &CALM,
            Mood::Fearful => &FEARFUL,
            Mood::Sleepy => &SLEEPY,
            Mood::Playful => &PLAYFUL,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Curious => "curious",
            Mood::Calm => "calm",
            Mood::Fearful => "fearful",
            Mood::Sleepy => "sleepy",
            Mood::Playful => "playful",
        }
    }
}
