//! Steering forces acting on a single word.
//!
//! Every query scans the whole population, so one word costs O(n) and a
//! full tick costs O(n²). Populations stay at or below fifteen words, where
//! a brute-force scan is cheaper than maintaining a spatial index.

use std::f32::consts::FRAC_PI_2;

use crate::{
    config,
    mood::Mood,
    types::{Bounds, Vec2},
    word::Word,
};

/// Heading perturbation for one word on one tick.
///
/// The flocking and pointer parts are kept apart because they enter the
/// heading with different gains.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Steering {
    pub flocking: Vec2,
    pub pointer: Vec2,
}

impl Steering {
    pub const ZERO: Steering = Steering {
        flocking: Vec2::ZERO,
        pointer: Vec2::ZERO,
    };

    pub fn heading_delta(self) -> Vec2 {
        self.flocking * config::FLOCKING_GAIN + self.pointer * config::POINTER_GAIN
    }

    pub fn is_zero(self) -> bool {
        self.flocking.is_zero() && self.pointer.is_zero()
    }
}

/// Neighbour sums gathered in a single pass over the population.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Neighborhood {
    /// Sum of `away / distance` over neighbours inside the separation radius.
    pub separation: Vec2,
    pub separation_count: usize,
    pub heading_sum: Vec2,
    pub position_sum: Vec2,
    pub flock_count: usize,
}

impl Neighborhood {
    pub fn survey(word: &Word, others: &[Word]) -> Self {
        let params = word.mood.params();
        let mut hood = Neighborhood::default();

        for other in others {
            if other.id == word.id {
                continue;
            }
            let away = word.pos - other.pos;
            let distance = away.length();

            if distance > 0.0 && distance < params.separation_radius {
                hood.separation += away.normalize() * (1.0 / distance);
                hood.separation_count += 1;
            }

            if distance < params.flock_radius {
                hood.heading_sum += other.heading;
                hood.position_sum += other.pos;
                hood.flock_count += 1;
            }
        }

        hood
    }

    /// Raw, unaveraged push away from crowding neighbours. More neighbours
    /// push harder; alignment and cohesion below are means.
    pub fn separation(&self) -> Option<Vec2> {
        (self.separation_count > 0).then_some(self.separation)
    }

    /// Direction of the mean neighbour heading.
    pub fn alignment(&self) -> Option<Vec2> {
        (self.flock_count > 0).then(|| (self.heading_sum * (1.0 / self.flock_count as f32)).normalize())
    }

    /// Direction from `origin` to the neighbour centroid.
    pub fn cohesion(&self, origin: Vec2) -> Option<Vec2> {
        (self.flock_count > 0).then(|| {
            let centroid = self.position_sum * (1.0 / self.flock_count as f32);
            (centroid - origin).normalize()
        })
    }
}

/// Weighted blend of separation, alignment and cohesion for `word`.
pub fn flocking_force(word: &Word, others: &[Word]) -> Vec2 {
    let hood = Neighborhood::survey(word, others);
    let mut total = Vec2::ZERO;
    if let Some(separation) = hood.separation() {
        total += separation.normalize() * config::SEPARATION_WEIGHT;
    }
    if let Some(alignment) = hood.alignment() {
        total += alignment * config::ALIGNMENT_WEIGHT;
    }
    if let Some(cohesion) = hood.cohesion(word.pos) {
        total += cohesion * config::COHESION_WEIGHT;
    }
    total
}

/// Unit inward push per axis while `pos` sits within `CONTAINMENT_MARGIN`
/// of the bounds. Axes too narrow to hold two margins get no push.
pub fn containment(pos: Vec2, bounds: &Bounds) -> Vec2 {
    Vec2::new(
        containment_axis(pos.x, bounds.min.x, bounds.max.x),
        containment_axis(pos.y, bounds.min.y, bounds.max.y),
    )
}

fn containment_axis(v: f32, min: f32, max: f32) -> f32 {
    let margin = config::CONTAINMENT_MARGIN;
    if max - min <= 2.0 * margin {
        0.0
    } else if v < min + margin {
        1.0
    } else if v > max - margin {
        -1.0
    } else {
        0.0
    }
}

/// Mood-specific reaction to a pointer, fading linearly to zero at the
/// mood's touch-response radius.
pub fn pointer_response(word: &Word, pointer: Vec2) -> Vec2 {
    let radius = word.mood.params().touch_response_radius;
    let toward = pointer - word.pos;
    let distance = toward.length();
    if distance >= radius {
        return Vec2::ZERO;
    }

    let (weight, direction) = match word.mood {
        Mood::Curious => (config::CURIOUS_POINTER_WEIGHT, toward),
        Mood::Fearful => (config::FEARFUL_POINTER_WEIGHT, -toward),
        Mood::Playful => (
            config::PLAYFUL_POINTER_WEIGHT,
            Vec2::from_angle(toward.y.atan2(toward.x) + FRAC_PI_2),
        ),
        Mood::Calm | Mood::Sleepy => (config::SHY_POINTER_WEIGHT, -toward),
    };

    direction.normalize() * (weight * (1.0 - distance / radius))
}

/// Full steering for `word` against the population it belongs to.
pub fn steering_force(
    word: &Word,
    others: &[Word],
    bounds: &Bounds,
    pointer: Option<Vec2>,
) -> Steering {
    let flocking =
        flocking_force(word, others) + containment(word.pos, bounds) * config::CONTAINMENT_WEIGHT;
    let pointer = pointer.map_or(Vec2::ZERO, |p| pointer_response(word, p));
    Steering { flocking, pointer }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        catalog::CatalogEntry,
        types::{Category, Size, WordId},
    };

    fn word(id: WordId, x: f32, y: f32, heading: Vec2, mood: Mood) -> Word {
        let mut rng = StdRng::seed_from_u64(id);
        let entry = CatalogEntry::new("tree", "ツリー", Category::English);
        let mut w = Word::spawn(id, &entry, Vec2::new(x, y), mood, &mut rng);
        w.heading = heading;
        w
    }

    fn bounds() -> Bounds {
        Bounds::inset(Size::new(800.0, 600.0), 50.0)
    }

    mod steering_force {
        use super::*;

        #[test]
        fn lone_word_in_the_middle_feels_nothing() {
            let w = word(1, 400.0, 300.0, Vec2::new(1.0, 0.0), Mood::Calm);
            let s = steering_force(&w, std::slice::from_ref(&w), &bounds(), None);
            assert!(s.is_zero());
        }

        #[test]
        fn pointer_out_of_range_adds_nothing() {
            let w = word(1, 400.0, 300.0, Vec2::ZERO, Mood::Fearful);
            let s = steering_force(&w, &[], &bounds(), Some(Vec2::new(700.0, 300.0)));
            assert_eq!(s.pointer, Vec2::ZERO);
        }

        #[test]
        fn heading_delta_applies_separate_gains() {
            let s = Steering {
                flocking: Vec2::new(1.0, 0.0),
                pointer: Vec2::new(0.0, 1.0),
            };
            let d = s.heading_delta();
            assert!((d.x - config::FLOCKING_GAIN).abs() < 1e-6);
            assert!((d.y - config::POINTER_GAIN).abs() < 1e-6);
        }
    }

    mod neighborhood {
        use super::*;

        #[test]
        fn skips_self_by_id() {
            let w = word(1, 400.0, 300.0, Vec2::new(1.0, 0.0), Mood::Curious);
            let hood = Neighborhood::survey(&w, std::slice::from_ref(&w));
            assert_eq!(hood, Neighborhood::default());
        }

        #[test]
        fn separation_accumulates_without_averaging() {
            let w = word(1, 400.0, 300.0, Vec2::ZERO, Mood::Curious);
            let one = [word(2, 410.0, 300.0, Vec2::ZERO, Mood::Calm)];
            let two = [
                word(2, 410.0, 300.0, Vec2::ZERO, Mood::Calm),
                word(3, 410.0, 300.0, Vec2::ZERO, Mood::Calm),
            ];
            let single = Neighborhood::survey(&w, &one).separation().unwrap();
            let double = Neighborhood::survey(&w, &two).separation().unwrap();
            assert!((single.x + 0.1).abs() < 1e-6);
            assert!((double.x - 2.0 * single.x).abs() < 1e-6);
        }

        #[test]
        fn nearer_neighbours_push_harder() {
            let w = word(1, 400.0, 300.0, Vec2::ZERO, Mood::Curious);
            let near = Neighborhood::survey(&w, &[word(2, 405.0, 300.0, Vec2::ZERO, Mood::Calm)]);
            let far = Neighborhood::survey(&w, &[word(2, 430.0, 300.0, Vec2::ZERO, Mood::Calm)]);
            assert!(near.separation.length() > far.separation.length());
        }

        #[test]
        fn coincident_neighbour_counts_for_flocking_only() {
            let w = word(1, 400.0, 300.0, Vec2::ZERO, Mood::Curious);
            let hood = Neighborhood::survey(&w, &[word(2, 400.0, 300.0, Vec2::ZERO, Mood::Calm)]);
            assert_eq!(hood.separation_count, 0);
            assert_eq!(hood.flock_count, 1);
        }

        #[test]
        fn uses_own_mood_radii() {
            // 70 apart: inside a curious word's 80 flock radius, outside a calm word's 60.
            let curious = word(1, 400.0, 300.0, Vec2::ZERO, Mood::Curious);
            let calm = word(2, 470.0, 300.0, Vec2::ZERO, Mood::Calm);
            let pair = [curious.clone(), calm.clone()];
            assert_eq!(Neighborhood::survey(&curious, &pair).flock_count, 1);
            assert_eq!(Neighborhood::survey(&calm, &pair).flock_count, 0);
        }

        #[test]
        fn alignment_follows_mean_heading() {
            let w = word(1, 400.0, 300.0, Vec2::ZERO, Mood::Playful);
            let others = [
                word(2, 460.0, 300.0, Vec2::new(0.0, 1.0), Mood::Calm),
                word(3, 340.0, 300.0, Vec2::new(0.0, 0.5), Mood::Calm),
            ];
            let alignment = Neighborhood::survey(&w, &others).alignment().unwrap();
            assert!((alignment.y - 1.0).abs() < 1e-6);
        }

        #[test]
        fn cohesion_points_to_centroid() {
            let w = word(1, 400.0, 300.0, Vec2::ZERO, Mood::Playful);
            let others = [
                word(2, 460.0, 280.0, Vec2::ZERO, Mood::Calm),
                word(3, 460.0, 320.0, Vec2::ZERO, Mood::Calm),
            ];
            let cohesion = Neighborhood::survey(&w, &others).cohesion(w.pos).unwrap();
            assert!((cohesion.x - 1.0).abs() < 1e-6);
            assert!(cohesion.y.abs() < 1e-6);
        }
    }

    mod flocking_force {
        use super::*;

        #[test]
        fn close_pair_is_pushed_apart() {
            let a = word(1, 400.0, 300.0, Vec2::ZERO, Mood::Calm);
            let b = word(2, 410.0, 300.0, Vec2::ZERO, Mood::Calm);
            let pair = [a.clone(), b.clone()];
            assert!(flocking_force(&a, &pair).x < 0.0);
            assert!(flocking_force(&b, &pair).x > 0.0);
        }

        #[test]
        fn distant_group_only_aligns_and_coheres() {
            // 55 apart: beyond playful separation (50), inside its flock radius (120).
            let w = word(1, 400.0, 300.0, Vec2::ZERO, Mood::Playful);
            let others = [word(2, 455.0, 300.0, Vec2::new(0.0, 1.0), Mood::Calm)];
            let f = flocking_force(&w, &others);
            assert!((f.x - config::COHESION_WEIGHT).abs() < 1e-6);
            assert!((f.y - config::ALIGNMENT_WEIGHT).abs() < 1e-6);
        }
    }

    mod containment {
        use super::*;

        #[test]
        fn pushes_inward_near_edges() {
            let b = bounds();
            assert_eq!(containment(Vec2::new(60.0, 300.0), &b), Vec2::new(1.0, 0.0));
            assert_eq!(containment(Vec2::new(740.0, 540.0), &b), Vec2::new(-1.0, -1.0));
            assert_eq!(containment(Vec2::new(400.0, 300.0), &b), Vec2::ZERO);
        }

        #[test]
        fn narrow_axis_gets_no_push() {
            let b = Bounds::inset(Size::new(140.0, 600.0), 50.0);
            assert_eq!(containment(Vec2::new(60.0, 300.0), &b).x, 0.0);
        }
    }

    mod pointer_response {
        use super::*;

        #[test]
        fn curious_is_drawn_in() {
            let w = word(1, 400.0, 300.0, Vec2::ZERO, Mood::Curious);
            let f = pointer_response(&w, Vec2::new(440.0, 300.0));
            // 0.3 * (1 - 40/80)
            assert!((f.x - 0.15).abs() < 1e-6);
            assert_eq!(f.y, 0.0);
        }

        #[test]
        fn fearful_flees_hardest() {
            let w = word(1, 400.0, 300.0, Vec2::ZERO, Mood::Fearful);
            let f = pointer_response(&w, Vec2::new(460.0, 300.0));
            // 0.8 * (1 - 60/120)
            assert!((f.x + 0.4).abs() < 1e-6);
        }

        #[test]
        fn calm_and_sleepy_shy_away_mildly() {
            for mood in [Mood::Calm, Mood::Sleepy] {
                let w = word(1, 400.0, 300.0, Vec2::ZERO, mood);
                let f = pointer_response(&w, Vec2::new(400.0, 320.0));
                let radius = mood.params().touch_response_radius;
                let expected = config::SHY_POINTER_WEIGHT * (1.0 - 20.0 / radius);
                assert!((f.y + expected).abs() < 1e-6, "{mood:?}");
            }
        }

        #[test]
        fn playful_orbits_tangentially() {
            let w = word(1, 400.0, 300.0, Vec2::ZERO, Mood::Playful);
            let pointer = Vec2::new(450.0, 300.0);
            let f = pointer_response(&w, pointer);
            assert!(f.length() > 0.0);
            assert!(f.dot(pointer - w.pos).abs() < 1e-4);
        }

        #[test]
        fn fades_to_zero_at_radius() {
            let w = word(1, 400.0, 300.0, Vec2::ZERO, Mood::Fearful);
            assert_eq!(pointer_response(&w, Vec2::new(520.0, 300.0)), Vec2::ZERO);
            let near = pointer_response(&w, Vec2::new(410.0, 300.0)).length();
            let edge = pointer_response(&w, Vec2::new(510.0, 300.0)).length();
            assert!(near > edge);
        }

        #[test]
        fn pointer_on_top_of_repelled_word_is_zero() {
            let w = word(1, 400.0, 300.0, Vec2::ZERO, Mood::Fearful);
            assert_eq!(pointer_response(&w, w.pos), Vec2::ZERO);
        }
    }
}
