//! core::catalog
//!
//! The hexagram reference catalogue.
//!
//! # Overview
//!
//! The catalogue holds one record per hexagram: names, trigram composition,
//! palace, self/response positions, pattern flags and the six na-jia
//! branches. It is reference data. The library never mutates it after
//! loading.
//!
//! # Sources
//!
//! - [`Catalog::builtin`]: the embedded `data/hexagrams.json`, parsed once
//!   per process
//! - [`Catalog::load`] / [`Catalog::from_json`]: a replacement document in the
//!   same format (see [`schema`])
//! - [`Catalog::from_records`]: records built in code
//!
//! # Example
//!
//! ```
//! use najia::core::catalog::Catalog;
//! use najia::core::types::{HexagramId, Trigram};
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(catalog.len(), 64);
//!
//! let gou = catalog.get(HexagramId::new(44).unwrap()).unwrap();
//! assert_eq!(gou.full_name, "天風姤");
//! assert_eq!(gou.palace, Trigram::Qian);
//! ```

pub mod schema;

pub use schema::{CatalogDocument, HexagramEntry, LineOrder};

use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

use super::palace;
use super::types::{Branch, HexagramId, LinePosition, PatternFlag, Symbol, Trigram};

/// The embedded reference catalogue.
const BUILTIN_JSON: &str = include_str!("../../../data/hexagrams.json");

/// Errors from catalogue loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalogue '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse catalogue '{origin}': {message}")]
    Parse { origin: String, message: String },

    #[error("duplicate hexagram id: {0}")]
    DuplicateId(HexagramId),

    #[error("duplicate hexagram name: {0}")]
    DuplicateName(String),

    #[error("invalid record for hexagram {id}: {message}")]
    InvalidRecord { id: u32, message: String },
}

/// A validated hexagram record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexagramRecord {
    pub id: HexagramId,
    pub name: String,
    pub full_name: String,
    pub upper: Trigram,
    pub lower: Trigram,
    pub palace: Trigram,
    pub shi: LinePosition,
    pub ying: LinePosition,
    /// Sorted, without duplicates
    pub flags: Vec<PatternFlag>,
    /// Order of `branches` as the source gave it
    pub line_order: LineOrder,
    /// Branches in `line_order`
    pub branches: [Branch; 6],
}

impl HexagramRecord {
    /// Branches from line 1 (bottom) to line 6 (top).
    pub fn branches_bottom_up(&self) -> [Branch; 6] {
        self.line_order.normalize(self.branches)
    }

    /// Whether both trigrams equal the palace trigram.
    pub fn is_pure(&self) -> bool {
        self.upper == self.palace && self.lower == self.palace
    }

    /// Whether the record carries a flag.
    pub fn has_flag(&self, flag: PatternFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Validate a document entry.
    fn from_entry(entry: HexagramEntry, line_order: LineOrder) -> Result<Self, CatalogError> {
        let invalid = |message: String| CatalogError::InvalidRecord {
            id: entry.id,
            message,
        };

        let id = HexagramId::new(entry.id).map_err(|e| invalid(e.to_string()))?;
        let shi = LinePosition::new(entry.shi).map_err(|e| invalid(format!("shi: {e}")))?;
        let ying = LinePosition::new(entry.ying).map_err(|e| invalid(format!("ying: {e}")))?;
        if shi == ying {
            return Err(invalid("shi and ying cannot be the same line".to_string()));
        }

        if entry.name.trim().is_empty() || entry.full_name.trim().is_empty() {
            return Err(invalid("name cannot be empty".to_string()));
        }

        let branches: [Branch; 6] = entry.branches.as_slice().try_into().map_err(|_| {
            invalid(format!(
                "expected 6 branches, got {}",
                entry.branches.len()
            ))
        })?;

        let mut flags = entry.flags;
        flags.sort();
        flags.dedup();

        Ok(Self {
            id,
            name: entry.name,
            full_name: entry.full_name,
            upper: entry.upper,
            lower: entry.lower,
            palace: entry.palace,
            shi,
            ying,
            flags,
            line_order,
            branches,
        })
    }
}

/// An immutable, indexed set of hexagram records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: BTreeMap<HexagramId, HexagramRecord>,
    by_full_name: HashMap<String, HexagramId>,
}

impl Catalog {
    /// The embedded catalogue of all 64 hexagrams.
    ///
    /// Parsed on first use and shared for the rest of the process.
    ///
    /// # Panics
    ///
    /// Panics if the embedded document is invalid. The document is compiled
    /// into the binary and covered by tests, so this indicates a corrupted
    /// build rather than a runtime condition.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Catalog::from_json_named(BUILTIN_JSON, "<builtin>")
                .unwrap_or_else(|e| panic!("embedded hexagram catalogue is invalid: {e}"))
        })
    }

    /// Load a catalogue document from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid document,
    /// or contains an invalid record.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_named(&contents, &path.display().to_string())
    }

    /// Parse a catalogue document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::from_json_named(json, "<inline>")
    }

    fn from_json_named(json: &str, origin: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse {
                origin: origin.to_string(),
                message: e.to_string(),
            })?;
        Self::from_document(document)
    }

    /// Build a catalogue from a parsed document.
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let line_order = document.line_order;
        let records = document
            .hexagrams
            .into_iter()
            .map(|entry| HexagramRecord::from_entry(entry, line_order))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_records(records)
    }

    /// Build a catalogue from validated records.
    ///
    /// # Errors
    ///
    /// Returns an error if two records share an id or a full name.
    pub fn from_records(
        records: impl IntoIterator<Item = HexagramRecord>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::default();
        for record in records {
            if catalog.records.contains_key(&record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            if catalog.by_full_name.contains_key(&record.full_name) {
                return Err(CatalogError::DuplicateName(record.full_name));
            }
            catalog
                .by_full_name
                .insert(record.full_name.clone(), record.id);
            catalog.records.insert(record.id, record);
        }
        Ok(catalog)
    }

    /// Look up a record by id.
    pub fn get(&self, id: HexagramId) -> Option<&HexagramRecord> {
        self.records.get(&id)
    }

    /// Look up a record by its full name (e.g. "乾為天").
    pub fn find_by_full_name(&self, full_name: &str) -> Option<&HexagramRecord> {
        self.by_full_name
            .get(full_name)
            .and_then(|id| self.records.get(id))
    }

    /// All records in id order.
    pub fn iter(&self) -> impl Iterator<Item = &HexagramRecord> {
        self.records.values()
    }

    /// Records assigned to a palace, in generation order (pure first,
    /// returning soul last).
    pub fn in_palace(&self, palace: Trigram) -> Vec<&HexagramRecord> {
        let mut members: Vec<_> = self.iter().filter(|r| r.palace == palace).collect();
        members.sort_by_key(|r| (palace::derive(r.upper, r.lower).generation, r.id));
        members
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalogue has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Content hash of the catalogue.
    ///
    /// Computed over normalized records, so the same data written in either
    /// line order yields the same fingerprint.
    pub fn fingerprint(&self) -> Fingerprint {
        let mut hasher = Sha256::new();
        for record in self.iter() {
            hasher.update(record.id.get().to_be_bytes());
            hasher.update(record.name.as_bytes());
            hasher.update(b"\0");
            hasher.update(record.full_name.as_bytes());
            hasher.update(b"\0");
            for trigram in [record.upper, record.lower, record.palace] {
                hasher.update(trigram.symbol().as_bytes());
            }
            hasher.update([record.shi.get() as u8, record.ying.get() as u8]);
            for flag in &record.flags {
                hasher.update(flag.symbol().as_bytes());
            }
            hasher.update(b"\0");
            for branch in record.branches_bottom_up() {
                hasher.update(branch.symbol().as_bytes());
            }
            hasher.update(b"\n");
        }
        Fingerprint(hex::encode(hasher.finalize()))
    }
}

/// SHA-256 content hash identifying a catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Get the fingerprint as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for display.
    pub fn short(&self) -> &str {
        &self.0[..12.min(self.0.len())]
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
