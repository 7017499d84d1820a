//! core::catalog::schema
//!
//! On-disk format of the hexagram reference catalogue.
//!
//! # Format
//!
//! ```json
//! {
//!   "line_order": "top_to_bottom",
//!   "hexagrams": [
//!     {"id": 44, "name": "姤", "full_name": "天風姤", "upper": "乾", "lower": "巽",
//!      "palace": "乾", "shi": 1, "ying": 4, "flags": [],
//!      "branches": ["戌", "申", "午", "酉", "亥", "丑"]}
//!   ]
//! }
//! ```
//!
//! `line_order` declares how every `branches` array in the document is
//! ordered. Positions (`shi`, `ying`) are always counted from the bottom.

use serde::{Deserialize, Serialize};

use crate::core::types::{Branch, PatternFlag, Trigram};

/// Order in which a source lists the six lines of a hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineOrder {
    /// First entry is line 1 (bottom).
    #[default]
    BottomToTop,
    /// First entry is line 6 (top).
    TopToBottom,
}

impl LineOrder {
    /// Rearrange six lines given in this order into bottom-to-top order.
    ///
    /// This is the only place line order is converted. Everything past the
    /// catalogue works on bottom-to-top arrays.
    ///
    /// # Example
    ///
    /// ```
    /// use najia::core::catalog::LineOrder;
    ///
    /// let source = [6, 5, 4, 3, 2, 1];
    /// assert_eq!(LineOrder::TopToBottom.normalize(source), [1, 2, 3, 4, 5, 6]);
    /// assert_eq!(LineOrder::BottomToTop.normalize(source), source);
    /// ```
    pub fn normalize<T>(self, mut lines: [T; 6]) -> [T; 6] {
        if self == LineOrder::TopToBottom {
            lines.reverse();
        }
        lines
    }
}

/// A whole catalogue document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    /// Order of every `branches` array in the document
    #[serde(default)]
    pub line_order: LineOrder,

    /// Hexagram records
    pub hexagrams: Vec<HexagramEntry>,
}

/// One hexagram as written in a catalogue document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HexagramEntry {
    /// King Wen number
    pub id: u32,

    /// Short name (e.g. "姤")
    pub name: String,

    /// Full name with images (e.g. "天風姤")
    pub full_name: String,

    /// Upper (outer) trigram
    pub upper: Trigram,

    /// Lower (inner) trigram
    pub lower: Trigram,

    /// Ruling palace
    pub palace: Trigram,

    /// Self line position, counted from the bottom
    pub shi: u32,

    /// Response line position, counted from the bottom
    pub ying: u32,

    /// Pattern tags
    #[serde(default)]
    pub flags: Vec<PatternFlag>,

    /// Branch of each line, in the document's `line_order`
    pub branches: Vec<Branch>,
}
