//! core::hidden
//!
//! Hidden spirit (伏神) resolution.
//!
//! # Overview
//!
//! When a hexagram's six lines do not cover all five relatives, the missing
//! ones are borrowed from the pure hexagram of its palace. Each borrowed
//! relative is attached, as a hidden spirit, to the line position where it
//! appears in the pure hexagram.
//!
//! # Rules
//!
//! - The palace's pure hexagram must be in the catalogue, whether or not
//!   anything is missing.
//! - Missing relatives are taken in enumeration order
//!   (兄弟, 父母, 子孫, 妻財, 官鬼), at most two of them.
//! - The pure hexagram is scanned from the top line (6) down to the bottom
//!   line (1); the first line whose relative matches wins.
//! - Entries are returned in the order of the missing relatives.
//!
//! # Integrity
//!
//! A palace whose pure hexagram is absent from the catalogue, or a pure
//! hexagram that never realizes a missing relative, is a reference-data
//! gap. Under [`IntegrityPolicy::Warn`] the gap is logged and the entry
//! omitted; under [`IntegrityPolicy::Strict`] it is returned as an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::catalog::Catalog;
use super::element::Element;
use super::liuqin::relative_of;
use super::palace::pure_hexagram_name;
use super::types::{Branch, HexagramId, LinePosition, Relative, Trigram};

/// At most this many hidden spirits are attached to one hexagram.
pub const MAX_HIDDEN_SPIRITS: usize = 2;

/// How reference-data gaps are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrityPolicy {
    /// Log the gap and leave the entry out.
    #[default]
    Warn,
    /// Fail the computation.
    Strict,
}

impl IntegrityPolicy {
    /// Valid configuration names.
    pub const NAMES: &'static [&'static str] = &["warn", "strict"];

    /// Parse a configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "warn" => Some(IntegrityPolicy::Warn),
            "strict" => Some(IntegrityPolicy::Strict),
            _ => None,
        }
    }
}

/// A gap in the reference data found while resolving hidden spirits.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntegrityGap {
    #[error("palace {palace} has no pure hexagram '{name}' in the catalogue")]
    NoPureHexagram { palace: Trigram, name: &'static str },

    #[error("pure hexagram '{name}' never realizes {relative}")]
    RelativeNotRealized {
        name: &'static str,
        relative: Relative,
    },
}

/// A relative borrowed from the palace's pure hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HiddenSpiritEntry {
    pub position: LinePosition,
    pub branch: Branch,
    pub element: Element,
    pub relative: Relative,
}

impl std::fmt::Display for HiddenSpiritEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{} {}", self.branch, self.element, self.relative)
    }
}

/// Relatives absent from `present`, in enumeration order, at most two.
///
/// # Example
///
/// ```
/// use najia::core::hidden::missing_relatives;
/// use najia::core::types::Relative::*;
///
/// let present = [Sibling, Sibling, Offspring, Wealth, Wealth, Sibling];
/// assert_eq!(missing_relatives(&present), vec![Parent, Official]);
/// assert!(missing_relatives(&[Sibling, Parent, Offspring, Wealth, Official]).is_empty());
/// ```
pub fn missing_relatives(present: &[Relative]) -> Vec<Relative> {
    Relative::ALL
        .into_iter()
        .filter(|r| !present.contains(r))
        .take(MAX_HIDDEN_SPIRITS)
        .collect()
}

/// Resolves hidden spirits against a catalogue.
#[derive(Debug, Clone, Copy)]
pub struct HiddenSpiritResolver<'a> {
    catalog: &'a Catalog,
    policy: IntegrityPolicy,
}

impl<'a> HiddenSpiritResolver<'a> {
    pub fn new(catalog: &'a Catalog, policy: IntegrityPolicy) -> Self {
        Self { catalog, policy }
    }

    /// Hidden spirits for a hexagram of `palace` whose lines show `present`.
    ///
    /// `hex_id` only labels diagnostics.
    ///
    /// # Errors
    ///
    /// Returns an [`IntegrityGap`] only under [`IntegrityPolicy::Strict`].
    pub fn resolve(
        &self,
        hex_id: HexagramId,
        palace: Trigram,
        present: &[Relative],
    ) -> Result<Vec<HiddenSpiritEntry>, IntegrityGap> {
        // The pure hexagram is required even when nothing is missing.
        let name = pure_hexagram_name(palace);
        let Some(pure) = self.catalog.find_by_full_name(name) else {
            self.gap(hex_id, IntegrityGap::NoPureHexagram { palace, name })?;
            return Ok(Vec::new());
        };

        let missing = missing_relatives(present);
        if missing.is_empty() {
            return Ok(Vec::new());
        }
        debug!(hexagram = %hex_id, %palace, ?missing, "resolving hidden spirits");

        let palace_element = palace.element();
        let branches = pure.branches_bottom_up();

        let mut entries = Vec::with_capacity(missing.len());
        for target in missing {
            let found = LinePosition::bottom_up().rev().find_map(|position| {
                let branch = branches[position.index()];
                let element = branch.element();
                (relative_of(element, palace_element) == target).then_some(HiddenSpiritEntry {
                    position,
                    branch,
                    element,
                    relative: target,
                })
            });

            match found {
                Some(entry) => {
                    debug!(hexagram = %hex_id, position = %entry.position, %entry, "hidden spirit");
                    entries.push(entry);
                }
                None => self.gap(
                    hex_id,
                    IntegrityGap::RelativeNotRealized {
                        name,
                        relative: target,
                    },
                )?,
            }
        }

        Ok(entries)
    }

    /// Apply the integrity policy to a gap.
    fn gap(&self, hex_id: HexagramId, gap: IntegrityGap) -> Result<(), IntegrityGap> {
        match self.policy {
            IntegrityPolicy::Warn => {
                warn!(hexagram = %hex_id, %gap, "hidden spirit omitted");
                Ok(())
            }
            IntegrityPolicy::Strict => Err(gap),
        }
    }
}
