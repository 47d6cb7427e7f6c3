//! Presentation metadata attached to symbol ids.

use serde::{Deserialize, Serialize};

use super::card::SymbolId;

/// Display data for one symbol.
///
/// Only `id` is structural. `label` and `glyph` come from the labeling
/// layer and carry no meaning for the plane.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolMeta {
    pub id: SymbolId,
    pub label: String,
    pub glyph: Option<String>,
}

impl SymbolMeta {
    /// Symbol with a text label only.
    pub fn numbered(id: SymbolId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            glyph: None,
        }
    }

    /// Symbol shown as a glyph; the glyph doubles as the label.
    pub fn with_glyph(id: SymbolId, glyph: impl Into<String>) -> Self {
        let glyph = glyph.into();
        Self {
            id,
            label: glyph.clone(),
            glyph: Some(glyph),
        }
    }

    /// Text to show: the glyph if present, else the label.
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.glyph.as_deref().unwrap_or(&self.label)
    }
}
