//! core::palace
//!
//! Eight-palace placement of hexagrams.
//!
//! Each palace starts from its pure hexagram (both trigrams equal to the
//! palace trigram) and walks through seven more hexagrams by flipping lines:
//!
//! | Generation     | Flipped lines | Self line |
//! |----------------|---------------|-----------|
//! | Pure           | none          | 6         |
//! | First          | 1             | 1         |
//! | Second         | 1-2           | 2         |
//! | Third          | 1-3           | 3         |
//! | Fourth         | 1-4           | 4         |
//! | Fifth          | 1-5           | 5         |
//! | Wandering soul | 1-3, 5        | 4         |
//! | Returning soul | 5             | 3         |
//!
//! The response line is always three lines from the self line.

use serde::Serialize;

use super::types::{LinePosition, PatternFlag, Polarity, Trigram};

/// Step of a hexagram within its palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Generation {
    Pure,
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    WanderingSoul,
    ReturningSoul,
}

impl Generation {
    pub const ALL: [Generation; 8] = [
        Generation::Pure,
        Generation::First,
        Generation::Second,
        Generation::Third,
        Generation::Fourth,
        Generation::Fifth,
        Generation::WanderingSoul,
        Generation::ReturningSoul,
    ];

    /// Lines flipped from the pure hexagram; bit 0 is line 1.
    const fn flip_mask(self) -> u8 {
        match self {
            Generation::Pure => 0b000000,
            Generation::First => 0b000001,
            Generation::Second => 0b000011,
            Generation::Third => 0b000111,
            Generation::Fourth => 0b001111,
            Generation::Fifth => 0b011111,
            Generation::WanderingSoul => 0b010111,
            Generation::ReturningSoul => 0b010000,
        }
    }

    /// Self (shi) line position.
    pub fn shi(self) -> LinePosition {
        let position = match self {
            Generation::Pure => 6,
            Generation::First => 1,
            Generation::Second => 2,
            Generation::Third | Generation::ReturningSoul => 3,
            Generation::Fourth | Generation::WanderingSoul => 4,
            Generation::Fifth => 5,
        };
        LinePosition::from_index(position - 1)
    }

    /// Response (ying) line position.
    pub fn ying(self) -> LinePosition {
        self.shi().partner()
    }

    /// The soul flag this generation carries, if any.
    pub fn soul_flag(self) -> Option<PatternFlag> {
        match self {
            Generation::WanderingSoul => Some(PatternFlag::WanderingSoul),
            Generation::ReturningSoul => Some(PatternFlag::ReturningSoul),
            _ => None,
        }
    }
}

/// Where a hexagram sits in the eight palaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PalacePlacement {
    pub palace: Trigram,
    pub generation: Generation,
}

/// Name of the pure hexagram that heads a palace.
pub const fn pure_hexagram_name(palace: Trigram) -> &'static str {
    match palace {
        Trigram::Qian => "乾為天",
        Trigram::Kun => "坤為地",
        Trigram::Zhen => "震為雷",
        Trigram::Xun => "巽為風",
        Trigram::Kan => "坎為水",
        Trigram::Gen => "艮為山",
        Trigram::Li => "離為火",
        Trigram::Dui => "兌為沢",
    }
}

fn trigram_bits(trigram: Trigram) -> u8 {
    trigram
        .lines()
        .iter()
        .enumerate()
        .filter(|&(_, &line)| line == Polarity::Yang)
        .fold(0u8, |bits, (i, _)| bits | (1u8 << i))
}

fn trigram_from_bits(bits: u8) -> Trigram {
    let line = |i: u8| {
        if bits & (1u8 << i) != 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    };
    Trigram::from_lines([line(0), line(1), line(2)])
}

/// Place a hexagram in its palace from its trigrams.
///
/// A hexagram belongs to palace `P` at generation `g` when flipping the
/// lines of `g` in it gives back the pure hexagram of `P`. Comparing the two
/// trigrams of the flipped hexagram tells the generation directly: the
/// eight flip masks leave eight different inner/outer differences.
///
/// # Example
///
/// ```
/// use najia::core::palace::{derive, Generation};
/// use najia::core::types::Trigram;
///
/// // 天風姤: heaven over wind
/// let placement = derive(Trigram::Qian, Trigram::Xun);
/// assert_eq!(placement.palace, Trigram::Qian);
/// assert_eq!(placement.generation, Generation::First);
/// assert_eq!(placement.generation.shi().get(), 1);
/// ```
pub fn derive(upper: Trigram, lower: Trigram) -> PalacePlacement {
    let upper_bits = trigram_bits(upper);
    let lower_bits = trigram_bits(lower);

    let generation = match upper_bits ^ lower_bits {
        0b000 => Generation::Pure,
        0b001 => Generation::First,
        0b011 => Generation::Second,
        0b111 => Generation::Third,
        0b110 => Generation::Fourth,
        0b100 => Generation::Fifth,
        0b101 => Generation::WanderingSoul,
        // 0b010 is the only difference left
        _ => Generation::ReturningSoul,
    };

    let mask = generation.flip_mask();
    let palace = trigram_from_bits(upper_bits ^ (mask >> 3));
    debug_assert_eq!(palace, trigram_from_bits(lower_bits ^ (mask & 0b111)));

    PalacePlacement { palace, generation }
}
