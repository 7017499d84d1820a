//! core::liuqin
//!
//! Six-relatives classification.
//!
//! A line's relative is read from how the palace element stands toward the
//! line's element. Rules are evaluated in a fixed order and the first match
//! wins:
//!
//! 1. same element → Sibling
//! 2. palace generates line → Offspring
//! 3. palace overcomes line → Wealth
//! 4. line generates palace → Parent
//! 5. line overcomes palace → Official
//!
//! [`classify`] is total over element pairs, so the match below is
//! exhaustive and no fallback arm exists.

use super::element::{classify, Element, Relation};
use super::types::Relative;

/// Classify a line element against the palace element.
///
/// # Example
///
/// ```
/// use najia::core::element::Element;
/// use najia::core::liuqin::relative_of;
/// use najia::core::types::Relative;
///
/// // Metal palace: Water is what Metal generates.
/// assert_eq!(relative_of(Element::Water, Element::Metal), Relative::Offspring);
/// assert_eq!(relative_of(Element::Fire, Element::Metal), Relative::Official);
/// ```
pub fn relative_of(line_element: Element, palace_element: Element) -> Relative {
    match classify(palace_element, line_element) {
        Relation::Same => Relative::Sibling,
        Relation::AGeneratesB => Relative::Offspring,
        Relation::AOvercomesB => Relative::Wealth,
        Relation::BGeneratesA => Relative::Parent,
        Relation::BOvercomesA => Relative::Official,
    }
}
