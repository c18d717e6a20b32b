use rand::{seq::IteratorRandom, Rng};

use crate::types::{Category, GameMode};

/// Content of one word. Moods and kinematics are assigned at spawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub text: String,
    pub reading: String,
    pub category: Category,
}

impl CatalogEntry {
    pub fn new(text: impl Into<String>, reading: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            reading: reading.into(),
            category,
        }
    }
}

const BUILTIN: [(&str, &str, Category); 18] = [
    ("cat", "キャット", Category::English),
    ("dog", "ドッグ", Category::English),
    ("bird", "バード", Category::English),
    ("fish", "フィッシュ", Category::English),
    ("tree", "ツリー", Category::English),
    ("flower", "フラワー", Category::English),
    ("伝心", "でんしん", Category::Kanji),
    ("静寂", "せいじゃく", Category::Kanji),
    ("自然", "しぜん", Category::Kanji),
    ("平和", "へいわ", Category::Kanji),
    ("美しい", "うつくしい", Category::Kanji),
    ("優しい", "やさしい", Category::Kanji),
    ("ひかり", "hikari", Category::Hiragana),
    ("みずうみ", "mizuumi", Category::Hiragana),
    ("そよかぜ", "soyokaze", Category::Hiragana),
    ("つきよ", "tsukiyo", Category::Hiragana),
    ("さくら", "sakura", Category::Hiragana),
    ("みどり", "midori", Category::Hiragana),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn builtin() -> Self {
        Self::new(
            BUILTIN
                .iter()
                .map(|&(text, reading, category)| CatalogEntry::new(text, reading, category))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries admitted by `mode`; `None` admits everything.
    pub fn filtered(&self, mode: Option<GameMode>) -> impl Iterator<Item = &CatalogEntry> {
        self.entries
            .iter()
            .filter(move |e| mode.map_or(true, |m| m.accepts(e.category)))
    }

    /// Uniformly random entry admitted by `mode`, or `None` if the filter is empty.
    pub fn pick<R: Rng + ?Sized>(
        &self,
        mode: Option<GameMode>,
        rng: &mut R,
    ) -> Option<&CatalogEntry> {
        self.filtered(mode).choose(rng)
    }
}
