use rand::Rng;

use crate::{
    flock::{self, Steering},
    types::{Bounds, Vec2},
    word::Word,
};

/// Advances every word by one tick.
///
/// Steering is computed for the whole population before any word moves, so
/// all words see the same pre-tick neighbour picture. `steering` is scratch
/// space reused across ticks.
pub fn step<R: Rng + ?Sized>(
    words: &mut [Word],
    steering: &mut Vec<Steering>,
    bounds: &Bounds,
    pointer: Option<Vec2>,
    dt: f32,
    rng: &mut R,
) {
    if !(dt.is_finite() && dt > 0.0) {
        return;
    }

    let population: &[Word] = words;
    steering.clear();
    steering.extend(
        population
            .iter()
            .map(|word| flock::steering_force(word, population, bounds, pointer)),
    );

    for (word, force) in words.iter_mut().zip(steering.iter()) {
        word.integrate(bounds, *force, dt, rng);
    }
}
