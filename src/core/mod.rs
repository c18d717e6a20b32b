mod pointer;
mod shared;
mod step;


use rand::{rngs::StdRng, Rng, SeedableRng};

pub use pointer::Pointer;
pub use shared::SharedGame;
pub use step::step;

use crate::{
    catalog::Catalog,
    config::{ConfigError, GameConfig},
    flock::Steering,
    mood::Mood,
    types::{Bounds, GameMode, GameStats, Size, Vec2, WordId, WordSnapshot},
    word::Word,
};

/// A play session: the word population, score and simulation clock.
///
/// All mutators are total. Removing an unknown word, spawning from an empty
/// catalog subset and ticking with a stalled clock are silent no-ops.
pub struct Game {
    config: GameConfig,
    catalog: Catalog,
    words: Vec<Word>,
    score: u32,
    active: bool,
    mode: Option<GameMode>,
    viewport: Size,
    pointer: Pointer,
    rng: StdRng,
    next_id: WordId,
    ticks: u64,
    steering: Vec<Steering>,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_catalog(config, Catalog::builtin())
    }

    pub fn with_catalog(config: GameConfig, catalog: Catalog) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            viewport: Size::new(config.viewport_width, config.viewport_height),
            pointer: Pointer::new(config.pointer_timeout_secs),
            words: Vec::with_capacity(config.max_words + 1),
            steering: Vec::with_capacity(config.max_words + 1),
            config,
            catalog,
            score: 0,
            active: false,
            mode: None,
            rng,
            next_id: 1,
            ticks: 0,
        })
    }

    /// Starts a fresh round with a random population between `min_words`
    /// and `max_words`, drawn from the catalog subset `mode` admits.
    pub fn start(&mut self, mode: Option<GameMode>) {
        let count = self
            .rng
            .gen_range(self.config.min_words..=self.config.max_words);
        self.start_with_count(mode, count);
    }

    fn start_with_count(&mut self, mode: Option<GameMode>, count: usize) {
        self.active = true;
        self.score = 0;
        self.mode = mode;
        self.words.clear();
        for _ in 0..count {
            self.spawn_one();
        }
        log::info!(
            "game started: mode={:?} words={}",
            self.mode,
            self.words.len()
        );
    }

    pub fn stop(&mut self) {
        if self.active {
            log::info!("game stopped: score={}", self.score);
        }
        self.active = false;
        self.words.clear();
        self.mode = None;
    }

    /// Collects the word with `id`. Returns `false` if it is already gone.
    pub fn remove_word(&mut self, id: WordId) -> bool {
        let Some(idx) = self.find_index(id) else {
            log::debug!("remove ignored: word {id} not present");
            return false;
        };
        self.words.remove(idx);
        self.score += 1;
        log::debug!(
            "word {id} collected: score={} population={}",
            self.score,
            self.words.len()
        );

        if self.words.len() < self.config.min_words {
            if let Some(new_id) = self.spawn_one() {
                log::debug!("replenished with word {new_id}");
            }
        }
        true
    }

    pub fn update_viewport(&mut self, size: Size) {
        let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        self.viewport = Size::new(sanitize(size.width), sanitize(size.height));
    }

    pub fn update_pointer(&mut self, location: Option<Vec2>) {
        self.pointer.set(location);
    }

    /// Advances the simulation by `dt` seconds, capped at `max_tick_dt`.
    pub fn tick(&mut self, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }
        let dt = dt.min(self.config.max_tick_dt);
        let bounds = self.bounds();
        step(
            &mut self.words,
            &mut self.steering,
            &bounds,
            self.pointer.location(),
            dt,
            &mut self.rng,
        );
        self.pointer.advance(dt);
        self.ticks += 1;
        log::trace!(
            "tick {}: words={} pointer={:?}",
            self.ticks,
            self.words.len(),
            self.pointer.location()
        );
    }

    pub fn snapshot(&self, out: &mut Vec<WordSnapshot>) {
        out.clear();
        out.extend(self.words.iter().map(Word::snapshot));
    }

    pub fn stats(&self) -> GameStats {
        GameStats {
            score: self.score,
            active: self.active,
            mode: self.mode,
            population: self.words.len(),
            ticks: self.ticks,
            pointer_active: self.pointer.location().is_some(),
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer.location()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Region positions are held inside after every tick.
    pub fn bounds(&self) -> Bounds {
        Bounds::inset(self.viewport, self.config.padding)
    }

    fn spawn_one(&mut self) -> Option<WordId> {
        let Some(entry) = self.catalog.pick(self.mode, &mut self.rng) else {
            log::warn!("no catalog entries for mode {:?}; nothing spawned", self.mode);
            return None;
        };
        let area = Bounds::inset(self.viewport, self.config.spawn_padding);
        let pos = Vec2::new(
            self.rng.gen_range(area.min.x..=area.max.x),
            self.rng.gen_range(area.min.y..=area.max.y),
        );
        let mood = Mood::ALL[self.rng.gen_range(0..Mood::ALL.len())];
        let id = self.next_id;
        self.next_id += 1;
        self.words
            .push(Word::spawn(id, entry, pos, mood, &mut self.rng));
        Some(id)
    }

    fn find_index(&self, id: WordId) -> Option<usize> {
        self.words.iter().position(|w| w.id == id)
    }
}
