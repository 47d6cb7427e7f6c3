//! Symbol labeling: numbers or glyphs from an injected table.
//!
//! The plane only needs integer ids. Labels are a cosmetic layer chosen
//! per deck from a versioned `LabelTable`, so hosts can ship their own glyph
//! sets without touching the engine.

use serde::{Deserialize, Serialize};

use super::card::SymbolId;
use super::symbol::SymbolMeta;
use crate::core::SymbolMode;

/// Version of the built-in glyph table.
pub const DEFAULT_LABEL_TABLE_VERSION: u32 = 1;

/// A named list of glyphs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphSet {
    pub name: String,
    pub glyphs: Vec<String>,
}

impl GlyphSet {
    /// Create a glyph set.
    pub fn new<S: Into<String>>(name: impl Into<String>, glyphs: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            glyphs: glyphs.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of glyphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Check whether the set has no glyphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Versioned collection of glyph sets.
///
/// ## Example
///
/// ```
/// use spot_plane::cards::{GlyphSet, LabelTable};
///
/// let table = LabelTable::new(7).with_set(GlyphSet::new("dots", ["a", "b", "c"]));
/// assert_eq!(table.version, 7);
/// assert_eq!(table.sets.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelTable {
    pub version: u32,
    pub sets: Vec<GlyphSet>,
}

impl LabelTable {
    /// Create an empty table.
    #[must_use]
    pub fn new(version: u32) -> Self {
        Self {
            version,
            sets: Vec::new(),
        }
    }

    /// Add a glyph set.
    #[must_use]
    pub fn with_set(mut self, set: GlyphSet) -> Self {
        self.sets.push(set);
        self
    }

    /// The smallest non-empty set with at least `count` glyphs.
    ///
    /// A largest-first scan would hand every order the biggest set; this
    /// keeps small decks on the small themed sets.
    #[must_use]
    pub fn best_fit(&self, count: usize) -> Option<&GlyphSet> {
        self.sets
            .iter()
            .filter(|s| s.len() >= count && !s.is_empty())
            .min_by_key(|s| s.len())
    }

    /// The largest set.
    #[must_use]
    pub fn largest(&self) -> Option<&GlyphSet> {
        self.sets.iter().filter(|s| !s.is_empty()).max_by_key(|s| s.len())
    }

    /// Glyphs for `count` symbols.
    ///
    /// Takes the first `count` glyphs of the best-fitting set, or cycles
    /// through the largest set when none is big enough. Empty if the table
    /// has no glyphs at all.
    #[must_use]
    pub fn glyphs_for(&self, count: usize) -> Vec<&str> {
        if let Some(set) = self.best_fit(count) {
            return set.glyphs.iter().take(count).map(String::as_str).collect();
        }
        match self.largest() {
            Some(set) => set.glyphs.iter().cycle().take(count).map(String::as_str).collect(),
            None => Vec::new(),
        }
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_TABLE_VERSION)
            .with_set(GlyphSet::new("shapes", SHAPES.iter().copied()))
            .with_set(GlyphSet::new("fruit", FRUIT.iter().copied()))
            .with_set(GlyphSet::new("animals", ANIMALS.iter().copied()))
            .with_set(GlyphSet::new("travel", TRAVEL.iter().copied()))
            .with_set(GlyphSet::new("mixed", MIXED.iter().copied()))
    }
}

/// Assign display metadata to symbols `0..count`.
///
/// - `Numbers`: label `id + 1`, no glyph.
/// - `Emojis`: glyphs from `table`; falls back to numbers for ids the table
///   cannot cover (an empty table).
#[must_use]
pub fn assign_labels(count: usize, mode: SymbolMode, table: &LabelTable) -> Vec<SymbolMeta> {
    let glyphs = match mode {
        SymbolMode::Numbers => Vec::new(),
        SymbolMode::Emojis => table.glyphs_for(count),
    };

    (0..count)
        .map(|i| {
            let id = SymbolId::new(i as u32);
            match glyphs.get(i) {
                Some(glyph) => SymbolMeta::with_glyph(id, *glyph),
                None => SymbolMeta::numbered(id, (i + 1).to_string()),
            }
        })
        .collect()
}

const SHAPES: &[&str] = &[
    "🔴", "🟢", "🔵", "🟡", "🟣", "🟠", "⚫",
];

const FRUIT: &[&str] = &[
    "🍎", "🍊", "🍋", "🍇", "🍓", "🍒", "🥝", "🍑", "🍌", "🍉",
    "🍐", "🫐", "🥭",
];

const ANIMALS: &[&str] = &[
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯",
    "🦁", "🐮", "🐷", "🐸", "🐵", "🐔", "🐧", "🐦", "🐤", "🦆",
    "🦅", "🦉", "🦇", "🐺", "🐗", "🐴", "🦄", "🐝", "🐛", "🦋",
    "🐌",
];

const TRAVEL: &[&str] = &[
    "🚗", "🚕", "🚙", "🚌", "🚎", "🏎️", "🚓", "🚑", "🚒", "🚐",
    "🛻", "🚚", "🚛", "🚜", "🏍️", "🛵", "🚲", "🛴", "🚁", "✈️",
    "🚀", "🛸", "⛵", "🚤", "🛥️", "🚢", "⚓", "🎡", "🎢", "🎠",
    "🏰", "🗼", "🗽", "⛩️", "🕌", "🛕", "⛪", "🏛️", "🏯", "🎪",
    "🎭", "🎨", "🎬", "🎤", "🎧", "🎹", "🥁", "🎷", "🎺", "🎸",
    "🪕", "🎻", "🎲", "♟️", "🎯", "🎳", "🎮",
];

const MIXED: &[&str] = &[
    "🍎", "🍊", "🍋", "🍇", "🍓", "🍒", "🥝", "🍑", "🍌", "🍉",
    "🍐", "🫐", "🥭", "🍍", "🥥", "🥑", "🍆", "🥔", "🥕", "🌽",
    "🌶️", "🥒", "🥬", "🥦", "🧄", "🧅", "🍄", "🥜", "🫘", "🌰",
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯",
    "🦁", "🐮", "🐷", "🐸", "🐵", "🐔", "🐧", "🐦", "🐤", "🦆",
    "🦅", "🦉", "🦇", "🐺", "🐗", "🐴", "🦄", "🐝", "🐛", "🦋",
    "🚗", "🚕", "🚙", "🚌", "🚎", "🏎️", "🚓", "🚑", "🚒", "🚐",
    "🛻", "🚚", "🚛", "🚜", "🏍️", "🛵", "🚲", "🛴", "🚁", "✈️",
    "🚀", "🛸", "⛵", "🚤", "🛥️", "🚢", "⚓", "🎡", "🎢", "🎠",
    "⚽", "🏀", "🏈", "⚾", "🥎", "🎾", "🏐", "🏉", "🥏", "🎱",
    "🏓", "🏸", "🏒", "🏑", "🥍", "🏏", "🪃", "🥅", "⛳", "🪁",
    "🎣", "🤿", "🎽", "🎿", "🛷", "🥌", "🎯", "🪀", "🪂", "🎮",
    "🎲", "🧩", "♟️", "🎰", "🎳", "🎭", "🎨", "🎬", "🎤", "🎧",
    "🎹", "🥁", "🎷",
];
