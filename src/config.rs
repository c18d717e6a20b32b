use serde::{Deserialize, Serialize};

pub const SIM_HZ: f32 = 60.0;
pub const RENDER_HZ: f32 = 30.0;
pub const DT: f32 = 1.0 / SIM_HZ;

/// Heading gain for the flocking part of a steering vector.
pub const FLOCKING_GAIN: f32 = 0.1;
/// Heading gain for the pointer part of a steering vector.
pub const POINTER_GAIN: f32 = 0.3;

/// Pixels per second for a unit heading at unit speed.
pub const DRIFT_SCALE: f32 = 20.0;
pub const HEADING_JITTER: f32 = 0.02;
pub const ROTATION_JITTER: f32 = 0.5;
pub const ROTATION_LIMIT: f32 = 20.0;

pub const SEPARATION_WEIGHT: f32 = 0.5;
pub const ALIGNMENT_WEIGHT: f32 = 0.1;
pub const COHESION_WEIGHT: f32 = 0.05;
pub const CONTAINMENT_WEIGHT: f32 = 0.05;
/// Width of the band inside the padded bounds where containment pushes inward.
pub const CONTAINMENT_MARGIN: f32 = 30.0;

pub const CURIOUS_POINTER_WEIGHT: f32 = 0.3;
pub const FEARFUL_POINTER_WEIGHT: f32 = 0.8;
pub const PLAYFUL_POINTER_WEIGHT: f32 = 0.4;
pub const SHY_POINTER_WEIGHT: f32 = 0.2;

pub const BASE_SPEED_MIN: f32 = 0.3;
pub const BASE_SPEED_MAX: f32 = 1.2;
pub const FONT_SIZE_MIN: f32 = 12.0;
pub const FONT_SIZE_MAX: f32 = 28.0;
pub const SPAWN_ROTATION: f32 = 15.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the session RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Replenishment floor and lower bound of the initial population.
    pub min_words: usize,
    /// Upper bound of the initial population.
    pub max_words: usize,
    /// Containment inset from every viewport edge.
    pub padding: f32,
    /// Spawn inset from every viewport edge.
    pub spawn_padding: f32,
    /// Seconds a pointer location stays active after it was last set.
    pub pointer_timeout_secs: f32,
    /// Longest elapsed time a single tick will integrate.
    pub max_tick_dt: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_words: 8,
            max_words: 15,
            padding: 50.0,
            spawn_padding: 60.0,
            pointer_timeout_secs: 1.0,
            max_tick_dt: 0.25,
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    ZeroMinWords,
    InvalidWordRange { min: usize, max: usize },
    InvalidPadding,
    InvalidPointerTimeout,
    InvalidMaxTickDt,
    InvalidViewport,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "config is not valid JSON: {err}"),
            Self::ZeroMinWords => write!(f, "min_words must be greater than 0"),
            Self::InvalidWordRange { min, max } => {
                write!(f, "max_words ({max}) must be >= min_words ({min})")
            }
            Self::InvalidPadding => {
                write!(f, "padding and spawn_padding must be finite and non-negative")
            }
            Self::InvalidPointerTimeout => {
                write!(f, "pointer_timeout_secs must be positive and finite")
            }
            Self::InvalidMaxTickDt => write!(f, "max_tick_dt must be positive and finite"),
            Self::InvalidViewport => {
                write!(f, "viewport_width/viewport_height must be finite and non-negative")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl GameConfig {
    /// Parses a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_words == 0 {
            return Err(ConfigError::ZeroMinWords);
        }
        if self.max_words < self.min_words {
            return Err(ConfigError::InvalidWordRange {
                min: self.min_words,
                max: self.max_words,
            });
        }
        if !(non_negative(self.padding) && non_negative(self.spawn_padding)) {
            return Err(ConfigError::InvalidPadding);
        }
        if !(self.pointer_timeout_secs.is_finite() && self.pointer_timeout_secs > 0.0) {
            return Err(ConfigError::InvalidPointerTimeout);
        }
        if !(self.max_tick_dt.is_finite() && self.max_tick_dt > 0.0) {
            return Err(ConfigError::InvalidMaxTickDt);
        }
        if !(non_negative(self.viewport_width) && non_negative(self.viewport_height)) {
            return Err(ConfigError::InvalidViewport);
        }
        Ok(())
    }
}

fn non_negative(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}
