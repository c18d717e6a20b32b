use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::Game;
use crate::types::{GameMode, GameStats, Size, Vec2, WordId, WordSnapshot};

/// Cloneable handle for driving one [`Game`] from several threads.
///
/// Every call holds the lock for its whole duration, so a tick is never
/// interleaved with a removal, pointer update or stop.
#[derive(Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    pub fn new(game: Game) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    // Each mutator leaves the game consistent, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Game> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access.
    pub fn with<T>(&self, f: impl FnOnce(&mut Game) -> T) -> T {
        f(&mut *self.lock())
    }

    pub fn start(&self, mode: Option<GameMode>) {
        self.lock().start(mode);
    }

    pub fn stop(&self) {
        self.lock().stop();
    }

    pub fn remove_word(&self, id: WordId) -> bool {
        self.lock().remove_word(id)
    }

    pub fn update_viewport(&self, size: Size) {
        self.lock().update_viewport(size);
    }

    pub fn update_pointer(&self, location: Option<Vec2>) {
        self.lock().update_pointer(location);
    }

    pub fn tick(&self, dt: f32) {
        self.lock().tick(dt);
    }

    pub fn snapshot(&self, out: &mut Vec<WordSnapshot>) {
        self.lock().snapshot(out);
    }

    pub fn stats(&self) -> GameStats {
        self.lock().stats()
    }
}
