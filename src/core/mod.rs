//! core
//!
//! Core domain types, reference data, and computations for najia.
//!
//! # Modules
//!
//! - [`types`] - Strong types: HexagramId, LinePosition, Trigram, Branch, etc.
//! - [`element`] - Five elements and their generate/overcome cycles
//! - [`liuqin`] - Six-relatives classification
//! - [`palace`] - Eight-palace placement and self/response lines
//! - [`najia`] - Branch assignment from trigrams
//! - [`catalog`] - The hexagram reference catalogue
//! - [`hidden`] - Hidden spirit resolution
//! - [`view`] - Six-line hexagram views
//! - [`verify`] - Integrity verification of a catalogue
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Reference data is immutable once loaded
//! - All computation is deterministic

pub mod catalog;
pub mod config;
pub mod element;
pub mod hidden;
pub mod liuqin;
pub mod najia;
pub mod palace;
pub mod types;
pub mod verify;
pub mod view;
