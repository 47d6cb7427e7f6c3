//! Card system: ids, cards, symbol metadata, and labeling.
//!
//! ## Key Types
//!
//! - `SymbolId`: a point of the plane
//! - `CardId` / `Card`: a line of the plane and the points on it
//! - `SymbolMeta`: display label and optional glyph for a symbol
//! - `LabelTable`: injected, versioned glyph sets used by `assign_labels`

pub mod card;
pub mod labels;
pub mod symbol;

pub use card::{Card, CardId, SymbolId, SymbolList, INLINE_SYMBOLS};
pub use labels::{assign_labels, GlyphSet, LabelTable, DEFAULT_LABEL_TABLE_VERSION};
pub use symbol::SymbolMeta;
