//! core::view
//!
//! Assembly of the six-line view of a hexagram.
//!
//! # Overview
//!
//! A [`HexagramView`] joins the catalogue record of one hexagram with
//! everything computed from it: the element and relative of each line, line
//! polarity, the self and response markers, and hidden spirits borrowed
//! from the palace's pure hexagram.
//!
//! Lines are always held bottom to top (`lines[0]` is line 1). Renderers
//! that print top-down reverse the array themselves.
//!
//! # Example
//!
//! ```
//! use najia::core::view::build_view;
//! use najia::core::types::Relative;
//!
//! let view = build_view(44).unwrap();
//! assert_eq!(view.full_name, "天風姤");
//! assert_eq!(view.self_line().position.get(), 1);
//!
//! let hidden = view.hidden_spirits();
//! assert_eq!(hidden.len(), 1);
//! assert_eq!(hidden[0].relative, Relative::Wealth);
//! assert_eq!(hidden[0].position.get(), 2);
//! ```

use serde::Serialize;
use thiserror::Error;

use super::catalog::Catalog;
use super::element::Element;
use super::hidden::{HiddenSpiritEntry, HiddenSpiritResolver, IntegrityGap, IntegrityPolicy};
use super::liuqin::relative_of;
use super::najia::lines_from_trigrams;
use super::types::{Branch, HexagramId, LinePosition, PatternFlag, Polarity, Relative, Trigram};

/// Errors from view assembly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("hexagram {id} not found")]
    NotFound { id: u32 },

    #[error("reference data gap: {0}")]
    IntegrityGap(#[from] IntegrityGap),
}

/// One line of a hexagram view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Line {
    pub position: LinePosition,
    pub branch: Branch,
    pub element: Element,
    pub relative: Relative,
    pub polarity: Polarity,
    pub is_self: bool,
    pub is_response: bool,
    pub hidden_spirit: Option<HiddenSpiritEntry>,
}

/// The complete view of one hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexagramView {
    pub id: HexagramId,
    pub name: String,
    pub full_name: String,
    pub palace: Trigram,
    pub palace_element: Element,
    /// Bottom (line 1) to top (line 6)
    pub lines: [Line; 6],
    pub flags: Vec<PatternFlag>,
}

impl HexagramView {
    /// The self (世) line.
    pub fn self_line(&self) -> &Line {
        self.lines
            .iter()
            .find(|l| l.is_self)
            .unwrap_or(&self.lines[0])
    }

    /// The response (応) line.
    pub fn response_line(&self) -> &Line {
        self.lines
            .iter()
            .find(|l| l.is_response)
            .unwrap_or(&self.lines[0])
    }

    /// Hidden spirits, bottom to top.
    pub fn hidden_spirits(&self) -> Vec<HiddenSpiritEntry> {
        self.lines.iter().filter_map(|l| l.hidden_spirit).collect()
    }

    /// The relative of each line, bottom to top.
    pub fn relatives(&self) -> [Relative; 6] {
        self.lines.map(|l| l.relative)
    }
}

/// Builds views against a catalogue.
#[derive(Debug, Clone, Copy)]
pub struct ViewBuilder<'a> {
    catalog: &'a Catalog,
    policy: IntegrityPolicy,
}

impl<'a> ViewBuilder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            policy: IntegrityPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: IntegrityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the view of hexagram `id`.
    ///
    /// # Errors
    ///
    /// - `ViewError::NotFound` if `id` is outside 1..=64 or not in the catalogue
    /// - `ViewError::IntegrityGap` under the strict policy when hidden
    ///   spirits cannot be resolved
    pub fn build(&self, id: u32) -> Result<HexagramView, ViewError> {
        let record = HexagramId::new(id)
            .ok()
            .and_then(|hex_id| self.catalog.get(hex_id))
            .ok_or(ViewError::NotFound { id })?;

        let palace_element = record.palace.element();
        let branches = record.branches_bottom_up();
        let polarities = lines_from_trigrams(record.lower, record.upper);

        let mut lines = branches.map(|branch| Line {
            position: LinePosition::BOTTOM,
            branch,
            element: branch.element(),
            relative: relative_of(branch.element(), palace_element),
            polarity: Polarity::Yang,
            is_self: false,
            is_response: false,
            hidden_spirit: None,
        });
        for (position, line) in LinePosition::bottom_up().zip(lines.iter_mut()) {
            line.position = position;
            line.polarity = polarities[position.index()];
            line.is_self = position == record.shi;
            line.is_response = position == record.ying;
        }

        let present = lines.map(|l| l.relative);
        let resolver = HiddenSpiritResolver::new(self.catalog, self.policy);
        for entry in resolver.resolve(record.id, record.palace, &present)? {
            lines[entry.position.index()].hidden_spirit = Some(entry);
        }

        Ok(HexagramView {
            id: record.id,
            name: record.name.clone(),
            full_name: record.full_name.clone(),
            palace: record.palace,
            palace_element,
            lines,
            flags: record.flags.clone(),
        })
    }
}

/// Build a view from the builtin catalogue with the default policy.
pub fn build_view(id: u32) -> Result<HexagramView, ViewError> {
    ViewBuilder::new(Catalog::builtin()).build(id)
}
