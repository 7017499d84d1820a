//! core::types
//!
//! Strong types for na-jia domain concepts.
//!
//! # Types
//!
//! - [`HexagramId`] - Validated hexagram number (1..=64, King Wen order)
//! - [`LinePosition`] - Validated line position (1 = bottom ..= 6 = top)
//! - [`Trigram`] - One of the eight trigrams
//! - [`Branch`] - One of the twelve earthly branches
//! - [`Relative`] - One of the six-relatives roles (five distinct roles)
//! - [`Polarity`] - Yin or yang line
//! - [`PatternFlag`] - Catalogue pattern tags
//!
//! # Validation
//!
//! These types enforce validity at construction time. Symbols parse from
//! and serialize to their CJK characters, so reference data can be written
//! the way practitioners write it.
//!
//! # Examples
//!
//! ```
//! use najia::core::types::{Branch, HexagramId, LinePosition, Trigram};
//! use najia::core::element::Element;
//!
//! let id = HexagramId::new(44).unwrap();
//! assert_eq!(id.get(), 44);
//! assert!(HexagramId::new(65).is_err());
//! assert!(LinePosition::new(0).is_err());
//!
//! let palace: Trigram = "乾".parse().unwrap();
//! assert_eq!(palace.element(), Element::Metal);
//! assert_eq!("寅".parse::<Branch>().unwrap().element(), Element::Wood);
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use super::element::Element;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hexagram id: {0} (expected 1..=64)")]
    InvalidHexagramId(u32),

    #[error("invalid line position: {0} (expected 1..=6)")]
    InvalidLinePosition(u32),

    #[error("unknown {kind} symbol: '{text}'")]
    UnknownSymbol { kind: &'static str, text: String },
}

/// A closed set of values written as CJK symbols.
pub trait Symbol: Sized + Copy + 'static {
    /// What the symbol denotes, used in error messages.
    const KIND: &'static str;

    /// Every value of the set, in canonical order.
    const VARIANTS: &'static [Self];

    /// The symbol text for this value.
    fn symbol(&self) -> &'static str;
}

/// Parse symbol text into a value of a closed set.
pub fn parse_symbol<T: Symbol>(text: &str) -> Result<T, TypeError> {
    let text = text.trim();
    T::VARIANTS
        .iter()
        .copied()
        .find(|v| v.symbol() == text)
        .ok_or_else(|| TypeError::UnknownSymbol {
            kind: T::KIND,
            text: text.to_string(),
        })
}

/// A hexagram number in King Wen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct HexagramId(u8);

impl HexagramId {
    /// Create a validated hexagram id.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidHexagramId` unless `1 <= id <= 64`.
    pub fn new(id: u32) -> Result<Self, TypeError> {
        if (1..=64).contains(&id) {
            Ok(Self(id as u8))
        } else {
            Err(TypeError::InvalidHexagramId(id))
        }
    }

    /// The numeric id.
    pub fn get(self) -> u32 {
        u32::from(self.0)
    }
}

impl TryFrom<u32> for HexagramId {
    type Error = TypeError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<HexagramId> for u32 {
    fn from(id: HexagramId) -> Self {
        id.get()
    }
}

impl std::fmt::Display for HexagramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A line position, counted from the bottom (1) to the top (6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LinePosition(u8);

impl LinePosition {
    pub const BOTTOM: LinePosition = LinePosition(1);
    pub const TOP: LinePosition = LinePosition(6);

    /// Create a validated position.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidLinePosition` unless `1 <= position <= 6`.
    pub fn new(position: u32) -> Result<Self, TypeError> {
        if (1..=6).contains(&position) {
            Ok(Self(position as u8))
        } else {
            Err(TypeError::InvalidLinePosition(position))
        }
    }

    /// Position for a zero-based bottom-up index.
    ///
    /// Callers index six-element arrays, so `index` is always below 6.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < 6);
        Self(index as u8 + 1)
    }

    /// The numeric position (1..=6).
    pub fn get(self) -> u32 {
        u32::from(self.0)
    }

    /// Zero-based bottom-up index into a six-line array.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// The partner position three lines away (1↔4, 2↔5, 3↔6).
    pub fn partner(self) -> Self {
        if self.0 > 3 {
            Self(self.0 - 3)
        } else {
            Self(self.0 + 3)
        }
    }

    /// All positions, bottom to top.
    pub fn bottom_up() -> impl DoubleEndedIterator<Item = LinePosition> {
        (1..=6u8).map(LinePosition)
    }
}

impl TryFrom<u32> for LinePosition {
    type Error = TypeError;

    fn try_from(position: u32) -> Result<Self, Self::Error> {
        Self::new(position)
    }
}

impl From<LinePosition> for u32 {
    fn from(position: LinePosition) -> Self {
        position.get()
    }
}

impl std::fmt::Display for LinePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A yin (broken) or yang (solid) line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// The line glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Polarity::Yang => "⚊",
            Polarity::Yin => "⚋",
        }
    }
}

/// One of the eight trigrams (八卦).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Trigram {
    #[serde(rename = "乾")]
    Qian,
    #[serde(rename = "兌")]
    Dui,
    #[serde(rename = "離")]
    Li,
    #[serde(rename = "震")]
    Zhen,
    #[serde(rename = "巽")]
    Xun,
    #[serde(rename = "坎")]
    Kan,
    #[serde(rename = "艮")]
    Gen,
    #[serde(rename = "坤")]
    Kun,
}

impl Trigram {
    /// All trigrams in palace order.
    pub const ALL: [Trigram; 8] = [
        Trigram::Qian,
        Trigram::Dui,
        Trigram::Li,
        Trigram::Zhen,
        Trigram::Xun,
        Trigram::Kan,
        Trigram::Gen,
        Trigram::Kun,
    ];

    /// The element of the trigram.
    pub const fn element(self) -> Element {
        match self {
            Trigram::Qian | Trigram::Dui => Element::Metal,
            Trigram::Li => Element::Fire,
            Trigram::Zhen | Trigram::Xun => Element::Wood,
            Trigram::Kan => Element::Water,
            Trigram::Gen | Trigram::Kun => Element::Earth,
        }
    }

    /// The natural image used in full hexagram names (天, 沢, 火, ...).
    pub const fn image(self) -> &'static str {
        match self {
            Trigram::Qian => "天",
            Trigram::Dui => "沢",
            Trigram::Li => "火",
            Trigram::Zhen => "雷",
            Trigram::Xun => "風",
            Trigram::Kan => "水",
            Trigram::Gen => "山",
            Trigram::Kun => "地",
        }
    }

    /// The three lines of the trigram, bottom to top.
    pub const fn lines(self) -> [Polarity; 3] {
        use Polarity::{Yang, Yin};
        match self {
            Trigram::Qian => [Yang, Yang, Yang],
            Trigram::Dui => [Yang, Yang, Yin],
            Trigram::Li => [Yang, Yin, Yang],
            Trigram::Zhen => [Yang, Yin, Yin],
            Trigram::Xun => [Yin, Yang, Yang],
            Trigram::Kan => [Yin, Yang, Yin],
            Trigram::Gen => [Yin, Yin, Yang],
            Trigram::Kun => [Yin, Yin, Yin],
        }
    }

    /// The trigram with the given lines, bottom to top.
    pub const fn from_lines(lines: [Polarity; 3]) -> Trigram {
        use Polarity::{Yang, Yin};
        match lines {
            [Yang, Yang, Yang] => Trigram::Qian,
            [Yang, Yang, Yin] => Trigram::Dui,
            [Yang, Yin, Yang] => Trigram::Li,
            [Yang, Yin, Yin] => Trigram::Zhen,
            [Yin, Yang, Yang] => Trigram::Xun,
            [Yin, Yang, Yin] => Trigram::Kan,
            [Yin, Yin, Yang] => Trigram::Gen,
            [Yin, Yin, Yin] => Trigram::Kun,
        }
    }
}

impl Symbol for Trigram {
    const KIND: &'static str = "trigram";
    const VARIANTS: &'static [Self] = &Self::ALL;

    fn symbol(&self) -> &'static str {
        match self {
            Trigram::Qian => "乾",
            Trigram::Dui => "兌",
            Trigram::Li => "離",
            Trigram::Zhen => "震",
            Trigram::Xun => "巽",
            Trigram::Kan => "坎",
            Trigram::Gen => "艮",
            Trigram::Kun => "坤",
        }
    }
}

impl FromStr for Trigram {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_symbol(s)
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One of the twelve earthly branches (十二支).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

impl Branch {
    /// All branches in cyclic order starting from 子.
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    /// The element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Branch::Zi | Branch::Hai => Element::Water,
            Branch::Yin | Branch::Mao => Element::Wood,
            Branch::Si | Branch::Wu => Element::Fire,
            Branch::Shen | Branch::You => Element::Metal,
            Branch::Chou | Branch::Chen | Branch::Wei | Branch::Xu => Element::Earth,
        }
    }

    /// Zero-based cyclic index (子 = 0 ... 亥 = 11).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether the two branches clash (六冲): opposite on the twelve-cycle.
    pub const fn clashes_with(self, other: Branch) -> bool {
        (self.index() + 6) % 12 == other.index()
    }

    /// Whether the two branches combine (六合): 子丑, 寅亥, 卯戌, 辰酉, 巳申, 午未.
    pub const fn combines_with(self, other: Branch) -> bool {
        (self.index() + other.index()) % 12 == 1
    }
}

impl Symbol for Branch {
    const KIND: &'static str = "branch";
    const VARIANTS: &'static [Self] = &Self::ALL;

    fn symbol(&self) -> &'static str {
        match self {
            Branch::Zi => "子",
            Branch::Chou => "丑",
            Branch::Yin => "寅",
            Branch::Mao => "卯",
            Branch::Chen => "辰",
            Branch::Si => "巳",
            Branch::Wu => "午",
            Branch::Wei => "未",
            Branch::Shen => "申",
            Branch::You => "酉",
            Branch::Xu => "戌",
            Branch::Hai => "亥",
        }
    }
}

impl FromStr for Branch {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_symbol(s)
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A six-relatives role (六親).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Relative {
    #[serde(rename = "兄弟")]
    Sibling,
    #[serde(rename = "父母")]
    Parent,
    #[serde(rename = "子孫")]
    Offspring,
    #[serde(rename = "妻財")]
    Wealth,
    #[serde(rename = "官鬼")]
    Official,
}

impl Relative {
    /// All relatives in enumeration order. Missing relatives are taken in this order.
    pub const ALL: [Relative; 5] = [
        Relative::Sibling,
        Relative::Parent,
        Relative::Offspring,
        Relative::Wealth,
        Relative::Official,
    ];
}

impl Symbol for Relative {
    const KIND: &'static str = "relative";
    const VARIANTS: &'static [Self] = &Self::ALL;

    fn symbol(&self) -> &'static str {
        match self {
            Relative::Sibling => "兄弟",
            Relative::Parent => "父母",
            Relative::Offspring => "子孫",
            Relative::Wealth => "妻財",
            Relative::Official => "官鬼",
        }
    }
}

impl FromStr for Relative {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_symbol(s)
    }
}

impl std::fmt::Display for Relative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Pattern tags carried by catalogue records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PatternFlag {
    /// Every partner line pair clashes.
    #[serde(rename = "六冲")]
    SixClash,
    /// Every partner line pair combines.
    #[serde(rename = "六合")]
    SixHarmony,
    #[serde(rename = "遊魂")]
    WanderingSoul,
    #[serde(rename = "帰魂")]
    ReturningSoul,
}

impl PatternFlag {
    pub const ALL: [PatternFlag; 4] = [
        PatternFlag::SixClash,
        PatternFlag::SixHarmony,
        PatternFlag::WanderingSoul,
        PatternFlag::ReturningSoul,
    ];
}

impl Symbol for PatternFlag {
    const KIND: &'static str = "pattern flag";
    const VARIANTS: &'static [Self] = &Self::ALL;

    fn symbol(&self) -> &'static str {
        match self {
            PatternFlag::SixClash => "六冲",
            PatternFlag::SixHarmony => "六合",
            PatternFlag::WanderingSoul => "遊魂",
            PatternFlag::ReturningSoul => "帰魂",
        }
    }
}

impl FromStr for PatternFlag {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_symbol(s)
    }
}

impl std::fmt::Display for PatternFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod hexagram_id {
        use super::*;

        #[test]
        fn valid_range() {
            assert!(HexagramId::new(1).is_ok());
            assert!(HexagramId::new(64).is_ok());
        }

        #[test]
        fn out_of_range_rejected() {
            assert_eq!(HexagramId::new(0), Err(TypeError::InvalidHexagramId(0)));
            assert_eq!(HexagramId::new(65), Err(TypeError::InvalidHexagramId(65)));
            assert!(HexagramId::new(u32::MAX).is_err());
        }

        #[test]
        fn serde_rejects_invalid() {
            let id: HexagramId = serde_json::from_str("12").unwrap();
            assert_eq!(id.get(), 12);
            assert!(serde_json::from_str::<HexagramId>("0").is_err());
        }
    }

    mod line_position {
        use super::*;

        #[test]
        fn bounds() {
            assert!(LinePosition::new(0).is_err());
            assert!(LinePosition::new(7).is_err());
            assert_eq!(LinePosition::new(1).unwrap(), LinePosition::BOTTOM);
            assert_eq!(LinePosition::new(6).unwrap(), LinePosition::TOP);
        }

        #[test]
        fn partner_is_three_apart() {
            let pairs: Vec<_> = LinePosition::bottom_up()
                .map(|p| (p.get(), p.partner().get()))
                .collect();
            assert_eq!(pairs, vec![(1, 4), (2, 5), (3, 6), (4, 1), (5, 2), (6, 3)]);
        }

        #[test]
        fn index_is_zero_based() {
            assert_eq!(LinePosition::BOTTOM.index(), 0);
            assert_eq!(LinePosition::TOP.index(), 5);
            assert_eq!(LinePosition::from_index(2).get(), 3);
        }
    }

    mod symbols {
        use super::*;

        #[test]
        fn trigram_round_trip_through_text() {
            for t in Trigram::ALL {
                assert_eq!(t.symbol().parse::<Trigram>().unwrap(), t);
            }
        }

        #[test]
        fn unknown_symbol_names_kind() {
            let err = "X".parse::<Branch>().unwrap_err();
            assert_eq!(
                err,
                TypeError::UnknownSymbol {
                    kind: "branch",
                    text: "X".into()
                }
            );
            assert!(err.to_string().contains("branch"));
        }

        #[test]
        fn parse_trims_whitespace() {
            assert_eq!(" 午 ".parse::<Branch>().unwrap(), Branch::Wu);
        }

        #[test]
        fn relative_serde_uses_symbols() {
            let json = serde_json::to_string(&Relative::Wealth).unwrap();
            assert_eq!(json, "\"妻財\"");
            let flag: PatternFlag = serde_json::from_str("\"帰魂\"").unwrap();
            assert_eq!(flag, PatternFlag::ReturningSoul);
        }
    }

    mod trigram {
        use super::*;

        #[test]
        fn elements() {
            assert_eq!(Trigram::Qian.element(), Element::Metal);
            assert_eq!(Trigram::Dui.element(), Element::Metal);
            assert_eq!(Trigram::Li.element(), Element::Fire);
            assert_eq!(Trigram::Zhen.element(), Element::Wood);
            assert_eq!(Trigram::Xun.element(), Element::Wood);
            assert_eq!(Trigram::Kan.element(), Element::Water);
            assert_eq!(Trigram::Gen.element(), Element::Earth);
            assert_eq!(Trigram::Kun.element(), Element::Earth);
        }

        #[test]
        fn line_patterns_are_distinct() {
            for t in Trigram::ALL {
                assert_eq!(Trigram::from_lines(t.lines()), t);
            }
        }

        #[test]
        fn zhen_has_yang_at_bottom() {
            assert_eq!(
                Trigram::Zhen.lines(),
                [Polarity::Yang, Polarity::Yin, Polarity::Yin]
            );
        }
    }

    mod branch {
        use super::*;

        #[test]
        fn elements() {
            let water: Vec<_> = Branch::ALL
                .into_iter()
                .filter(|b| b.element() == Element::Water)
                .collect();
            assert_eq!(water, vec![Branch::Zi, Branch::Hai]);

            let earth = Branch::ALL
                .into_iter()
                .filter(|b| b.element() == Element::Earth)
                .count();
            assert_eq!(earth, 4);
        }

        #[test]
        fn clashes() {
            assert!(Branch::Zi.clashes_with(Branch::Wu));
            assert!(Branch::Hai.clashes_with(Branch::Si));
            assert!(!Branch::Zi.clashes_with(Branch::Chou));
        }

        #[test]
        fn combinations() {
            assert!(Branch::Zi.combines_with(Branch::Chou));
            assert!(Branch::Yin.combines_with(Branch::Hai));
            assert!(Branch::Mao.combines_with(Branch::Xu));
            assert!(Branch::Chen.combines_with(Branch::You));
            assert!(Branch::Si.combines_with(Branch::Shen));
            assert!(Branch::Wu.combines_with(Branch::Wei));
            assert!(!Branch::Zi.combines_with(Branch::Wu));
        }
    }
}
