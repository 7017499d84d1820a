//! najia - six relatives and hidden spirits for the 64 hexagrams
//!
//! najia computes the Jing Fang na-jia reading of a hexagram: the earthly
//! branch and element of each line, its six-relatives role relative to the
//! hexagram's palace, the self and response lines, and the hidden spirits
//! borrowed from the palace's pure hexagram when a role is missing.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to core)
//! - [`core`] - Domain types, reference data, and computations
//! - [`ui`] - Output formatting
//!
//! # Example
//!
//! ```
//! use najia::core::view::build_view;
//!
//! let view = build_view(33).unwrap();
//! assert_eq!(view.full_name, "天山遯");
//! for spirit in view.hidden_spirits() {
//!     println!("line {}: {}", spirit.position, spirit);
//! }
//! ```
//!
//! # Invariants
//!
//! 1. Reference data is never mutated after loading
//! 2. Line order is normalized once, at the catalogue boundary
//! 3. Classification is total; only lookups and reference gaps fail

pub mod cli;
pub mod core;
pub mod ui;
