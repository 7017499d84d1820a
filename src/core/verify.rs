//! core::verify
//!
//! Integrity verification of a hexagram catalogue.
//!
//! # Checks
//!
//! Every record is compared against what its trigrams imply:
//!   - Palace, self line and response line from [`palace::derive`]
//!   - Self and response lines are partners (three lines apart)
//!   - Branches from [`najia::assign`]
//!   - Six-clash / six-harmony flags from the branches, soul flags from
//!     the generation
//!
//! Every palace that has members must also have its pure hexagram, and that
//! pure hexagram must realize all five relatives, or hidden spirits cannot
//! be resolved.
//!
//! # Invariants
//!
//! - Never mutates the catalogue
//! - Must be deterministic

use std::collections::BTreeSet;
use thiserror::Error;

use super::catalog::{Catalog, HexagramRecord};
use super::liuqin::relative_of;
use super::najia;
use super::palace::{self, pure_hexagram_name};
use super::types::{Branch, HexagramId, LinePosition, PatternFlag, Relative, Trigram};

/// Integrity findings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("hexagram {id}: palace is {recorded}, trigrams place it in {derived}")]
    PalaceMismatch {
        id: HexagramId,
        recorded: Trigram,
        derived: Trigram,
    },

    #[error("hexagram {id}: self line is {recorded}, expected {expected}")]
    ShiMismatch {
        id: HexagramId,
        recorded: LinePosition,
        expected: LinePosition,
    },

    #[error("hexagram {id}: response line is {recorded}, expected {expected}")]
    YingMismatch {
        id: HexagramId,
        recorded: LinePosition,
        expected: LinePosition,
    },

    #[error("hexagram {id}: self line {shi} and response line {ying} are not partners")]
    ShiYingNotPartners {
        id: HexagramId,
        shi: LinePosition,
        ying: LinePosition,
    },

    #[error("hexagram {id}: line {position} has branch {recorded}, expected {expected}")]
    BranchMismatch {
        id: HexagramId,
        position: LinePosition,
        recorded: Branch,
        expected: Branch,
    },

    #[error("hexagram {id}: missing flag {flag}")]
    FlagMissing { id: HexagramId, flag: PatternFlag },

    #[error("hexagram {id}: unexpected flag {flag}")]
    FlagUnexpected { id: HexagramId, flag: PatternFlag },

    #[error("palace {palace} has no pure hexagram '{name}'")]
    NoPureHexagram { palace: Trigram, name: &'static str },

    #[error("'{name}' is not the pure hexagram of palace {palace}")]
    NotPure { name: &'static str, palace: Trigram },

    #[error("pure hexagram '{name}' does not realize {relative}")]
    RelativeNotRealized {
        name: &'static str,
        relative: Relative,
    },
}

/// Result of catalogue verification.
#[derive(Debug)]
pub struct VerifyResult {
    /// Whether verification passed
    pub ok: bool,
    /// Findings, in catalogue order
    pub errors: Vec<VerifyError>,
}

impl VerifyResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: vec![],
        }
    }

    /// Create a failed result with errors.
    pub fn failure(errors: Vec<VerifyError>) -> Self {
        Self { ok: false, errors }
    }
}

/// Verify every record of a catalogue and the pure hexagram of each palace.
pub fn verify_catalog(catalog: &Catalog) -> VerifyResult {
    let mut errors = Vec::new();

    for record in catalog.iter() {
        verify_record(record, &mut errors);
    }

    let palaces: BTreeSet<Trigram> = catalog.iter().map(|r| r.palace).collect();
    for palace in palaces {
        verify_pure_hexagram(catalog, palace, &mut errors);
    }

    if errors.is_empty() {
        VerifyResult::success()
    } else {
        VerifyResult::failure(errors)
    }
}

fn verify_record(record: &HexagramRecord, errors: &mut Vec<VerifyError>) {
    let id = record.id;
    let placement = palace::derive(record.upper, record.lower);

    if record.palace != placement.palace {
        errors.push(VerifyError::PalaceMismatch {
            id,
            recorded: record.palace,
            derived: placement.palace,
        });
    }

    let expected_shi = placement.generation.shi();
    if record.shi != expected_shi {
        errors.push(VerifyError::ShiMismatch {
            id,
            recorded: record.shi,
            expected: expected_shi,
        });
    }
    let expected_ying = placement.generation.ying();
    if record.ying != expected_ying {
        errors.push(VerifyError::YingMismatch {
            id,
            recorded: record.ying,
            expected: expected_ying,
        });
    }
    if record.shi.partner() != record.ying {
        errors.push(VerifyError::ShiYingNotPartners {
            id,
            shi: record.shi,
            ying: record.ying,
        });
    }

    let branches = record.branches_bottom_up();
    let expected_branches = najia::assign(record.lower, record.upper);
    for position in LinePosition::bottom_up() {
        let (recorded, expected) = (
            branches[position.index()],
            expected_branches[position.index()],
        );
        if recorded != expected {
            errors.push(VerifyError::BranchMismatch {
                id,
                position,
                recorded,
                expected,
            });
        }
    }

    let mut expected_flags = najia::branch_patterns(&branches);
    expected_flags.extend(placement.generation.soul_flag());
    for flag in PatternFlag::ALL {
        match (expected_flags.contains(&flag), record.has_flag(flag)) {
            (true, false) => errors.push(VerifyError::FlagMissing { id, flag }),
            (false, true) => errors.push(VerifyError::FlagUnexpected { id, flag }),
            _ => {}
        }
    }
}

fn verify_pure_hexagram(catalog: &Catalog, palace: Trigram, errors: &mut Vec<VerifyError>) {
    let name = pure_hexagram_name(palace);
    let Some(pure) = catalog.find_by_full_name(name) else {
        errors.push(VerifyError::NoPureHexagram { palace, name });
        return;
    };

    if !pure.is_pure() || pure.palace != palace {
        errors.push(VerifyError::NotPure { name, palace });
    }

    let realized: Vec<Relative> = pure
        .branches_bottom_up()
        .iter()
        .map(|b| relative_of(b.element(), palace.element()))
        .collect();
    for relative in Relative::ALL {
        if !realized.contains(&relative) {
            errors.push(VerifyError::RelativeNotRealized { name, relative });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_record(id: u32) -> HexagramRecord {
        Catalog::builtin()
            .get(HexagramId::new(id).unwrap())
            .unwrap()
            .clone()
    }

    fn with_replaced(record: HexagramRecord) -> Catalog {
        let id = record.id;
        Catalog::from_records(
            Catalog::builtin()
                .iter()
                .filter(|r| r.id != id)
                .cloned()
                .chain(std::iter::once(record)),
        )
        .unwrap()
    }

    #[test]
    fn builtin_catalog_is_consistent() {
        let result = verify_catalog(Catalog::builtin());
        assert!(result.ok, "{:?}", result.errors);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn empty_catalog_has_nothing_to_report() {
        assert!(verify_catalog(&Catalog::default()).ok);
    }

    #[test]
    fn detects_wrong_palace() {
        let mut gou = builtin_record(44);
        gou.palace = Trigram::Kun;
        let result = verify_catalog(&with_replaced(gou));
        assert!(!result.ok);
        assert!(result.errors.contains(&VerifyError::PalaceMismatch {
            id: HexagramId::new(44).unwrap(),
            recorded: Trigram::Kun,
            derived: Trigram::Qian,
        }));
    }

    #[test]
    fn detects_wrong_self_line() {
        let mut gou = builtin_record(44);
        gou.shi = LinePosition::new(2).unwrap();
        let errors = verify_catalog(&with_replaced(gou)).errors;
        assert!(errors
            .iter()
            .any(|e| matches!(e, VerifyError::ShiMismatch { .. })));
        // 2 and 4 are not partners either
        assert!(errors
            .iter()
            .any(|e| matches!(e, VerifyError::ShiYingNotPartners { .. })));
    }

    #[test]
    fn detects_wrong_branch() {
        let mut gou = builtin_record(44);
        let mut branches = gou.branches_bottom_up();
        branches[1] = Branch::Yin;
        gou.branches = gou.line_order.normalize(branches);
        let errors = verify_catalog(&with_replaced(gou)).errors;
        assert!(errors.contains(&VerifyError::BranchMismatch {
            id: HexagramId::new(44).unwrap(),
            position: LinePosition::new(2).unwrap(),
            recorded: Branch::Yin,
            expected: Branch::Hai,
        }));
    }

    #[test]
    fn detects_flag_mismatches() {
        let mut qian = builtin_record(1);
        qian.flags = vec![PatternFlag::WanderingSoul];
        let errors = verify_catalog(&with_replaced(qian)).errors;
        let id = HexagramId::new(1).unwrap();
        assert!(errors.contains(&VerifyError::FlagMissing {
            id,
            flag: PatternFlag::SixClash
        }));
        assert!(errors.contains(&VerifyError::FlagUnexpected {
            id,
            flag: PatternFlag::WanderingSoul
        }));
    }

    #[test]
    fn detects_missing_pure_hexagram() {
        let catalog = Catalog::from_records([builtin_record(44)]).unwrap();
        let result = verify_catalog(&catalog);
        assert_eq!(
            result.errors,
            vec![VerifyError::NoPureHexagram {
                palace: Trigram::Qian,
                name: "乾為天"
            }]
        );
    }

    #[test]
    fn detects_pure_hexagram_missing_relatives() {
        let mut qian = builtin_record(1);
        qian.line_order = crate::core::catalog::LineOrder::BottomToTop;
        qian.branches = [Branch::Shen; 6];
        let errors = verify_catalog(&with_replaced(qian)).errors;
        for relative in [
            Relative::Parent,
            Relative::Offspring,
            Relative::Wealth,
            Relative::Official,
        ] {
            assert!(errors.contains(&VerifyError::RelativeNotRealized {
                name: "乾為天",
                relative
            }));
        }
    }

    #[test]
    fn messages_name_the_hexagram() {
        let err = VerifyError::FlagMissing {
            id: HexagramId::new(11).unwrap(),
            flag: PatternFlag::SixHarmony,
        };
        assert_eq!(err.to_string(), "hexagram 11: missing flag 六合");
    }
}
