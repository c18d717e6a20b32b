//! Motion core for a word-collecting toy: words drift, flock and shy away
//! from (or chase) the player's finger while a population manager keeps the
//! screen stocked as words are tapped away.
//!
//! The presentation layer reports the viewport, pointer and frame time, and
//! renders the [`WordSnapshot`]s it reads back.

pub mod catalog;
pub mod config;
pub mod core;
pub mod flock;
pub mod mood;
pub mod types;
pub mod word;

pub use crate::catalog::{Catalog, CatalogEntry};
pub use crate::config::{ConfigError, GameConfig};
pub use crate::core::{Game, SharedGame};
pub use crate::mood::{Mood, MoodParams};
pub use crate::types::{Category, GameMode, GameStats, Size, Vec2, WordId, WordSnapshot};
pub use crate::word::Word;
