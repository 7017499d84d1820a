//! core::element
//!
//! The five elements and the relation engine over them.
//!
//! # Cycles
//!
//! - **Generating**: Metal → Water → Wood → Fire → Earth → Metal
//! - **Overcoming**: Metal ⊣ Wood ⊣ Earth ⊣ Water ⊣ Fire ⊣ Metal
//!
//! Each element generates exactly one other, is generated by exactly one
//! other, overcomes exactly one other and is overcome by exactly one other.
//! Together with identity that covers all five elements, so [`classify`]
//! is total.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::types::{parse_symbol, Symbol, TypeError};

/// One of the five elements (五行).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "水")]
    Water,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
}

impl Element {
    /// All elements, in generating-cycle order starting from Metal.
    pub const ALL: [Element; 5] = [
        Element::Metal,
        Element::Water,
        Element::Wood,
        Element::Fire,
        Element::Earth,
    ];

    /// The element this one generates.
    pub const fn generates(self) -> Element {
        match self {
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
        }
    }

    /// The element this one overcomes.
    pub const fn overcomes(self) -> Element {
        match self {
            Element::Metal => Element::Wood,
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
        }
    }
}

impl Symbol for Element {
    const KIND: &'static str = "element";
    const VARIANTS: &'static [Self] = &Self::ALL;

    fn symbol(&self) -> &'static str {
        match self {
            Element::Metal => "金",
            Element::Wood => "木",
            Element::Water => "水",
            Element::Fire => "火",
            Element::Earth => "土",
        }
    }
}

impl FromStr for Element {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_symbol(s)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// How element `a` stands toward element `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Same,
    AGeneratesB,
    BGeneratesA,
    AOvercomesB,
    BOvercomesA,
}

impl Relation {
    /// The relation seen from the other side, i.e. `classify(b, a)`.
    pub const fn inverse(self) -> Relation {
        match self {
            Relation::Same => Relation::Same,
            Relation::AGeneratesB => Relation::BGeneratesA,
            Relation::BGeneratesA => Relation::AGeneratesB,
            Relation::AOvercomesB => Relation::BOvercomesA,
            Relation::BOvercomesA => Relation::AOvercomesB,
        }
    }
}

/// Classify the relation between two elements.
///
/// # Example
///
/// ```
/// use najia::core::element::{classify, Element, Relation};
///
/// assert_eq!(classify(Element::Metal, Element::Water), Relation::AGeneratesB);
/// assert_eq!(classify(Element::Water, Element::Metal), Relation::BGeneratesA);
/// assert_eq!(classify(Element::Fire, Element::Metal), Relation::AOvercomesB);
/// assert_eq!(classify(Element::Earth, Element::Earth), Relation::Same);
/// ```
pub fn classify(a: Element, b: Element) -> Relation {
    if a == b {
        Relation::Same
    } else if a.generates() == b {
        Relation::AGeneratesB
    } else if b.generates() == a {
        Relation::BGeneratesA
    } else if a.overcomes() == b {
        Relation::AOvercomesB
    } else {
        // With a five-cycle the only pair left is b overcoming a.
        debug_assert_eq!(b.overcomes(), a);
        Relation::BOvercomesA
    }
}
