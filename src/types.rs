use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::mood::Mood;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector at `angle` radians from the +x axis.
    pub fn from_angle(angle: f32) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    pub fn length_sq(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(self) -> f32 {
        self.length_sq().sqrt()
    }

    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    /// Unit vector in the same direction, or `ZERO` for a zero vector.
    pub fn normalize(self) -> Vec2 {
        let len = self.length();
        if len > 0.0 {
            Vec2::new(self.x / len, self.y / len)
        } else {
            Vec2::ZERO
        }
    }

    /// Rescales to unit length only when longer than 1.
    pub fn limit_unit(self) -> Vec2 {
        if self.length_sq() > 1.0 {
            self.normalize()
        } else {
            self
        }
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self * rhs.x, self * rhs.y)
    }
}

/// Viewport dimensions in screen units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned region a word's position must stay inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Insets `size` by `padding` on every side. An axis narrower than
    /// `2 * padding` collapses to its midpoint.
    pub fn inset(size: Size, padding: f32) -> Self {
        let (min_x, max_x) = inset_axis(size.width, padding);
        let (min_y, max_y) = inset_axis(size.height, padding);
        Self {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

fn inset_axis(extent: f32, padding: f32) -> (f32, f32) {
    let extent = if extent.is_finite() { extent.max(0.0) } else { 0.0 };
    let lo = padding;
    let hi = extent - padding;
    if lo <= hi {
        (lo, hi)
    } else {
        let mid = extent * 0.5;
        (mid, mid)
    }
}

pub type WordId = u64;

/// Script a catalog word is written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    English,
    Kanji,
    Hiragana,
}

/// Content filter selected when a game starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameMode {
    English,
    Kanji,
    Hiragana,
    Mixed,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::English,
        GameMode::Kanji,
        GameMode::Hiragana,
        GameMode::Mixed,
    ];

    pub fn accepts(self, category: Category) -> bool {
        match self {
            GameMode::English => category == Category::English,
            GameMode::Kanji => category == Category::Kanji,
            GameMode::Hiragana => category == Category::Hiragana,
            GameMode::Mixed => true,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::English => "English",
            GameMode::Kanji => "漢字",
            GameMode::Hiragana => "ひらがな",
            GameMode::Mixed => "Mixed",
        }
    }
}

/// Ink colour a word is drawn with. Cosmetic only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Ink,
    Blue,
    Purple,
    Green,
    Red,
    Orange,
    Brown,
    Gray,
}

impl Tint {
    pub const PALETTE: [Tint; 8] = [
        Tint::Ink,
        Tint::Blue,
        Tint::Purple,
        Tint::Green,
        Tint::Red,
        Tint::Orange,
        Tint::Brown,
        Tint::Gray,
    ];
}

/// Read-only view of one word handed to the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub struct WordSnapshot {
    pub id: WordId,
    pub text: String,
    pub reading: String,
    pub category: Category,
    pub mood: Mood,
    pub pos: Vec2,
    pub rotation: f32,
    pub scale: f32,
    pub font_size: f32,
    pub tint: Tint,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GameStats {
    pub score: u32,
    pub active: bool,
    pub mode: Option<GameMode>,
    pub population: usize,
    pub ticks: u64,
    pub pointer_active: bool,
}
