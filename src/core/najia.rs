//! core::najia
//!
//! Branch assignment (納甲) and line patterns derived from trigrams.
//!
//! Every trigram carries a fixed branch sequence for when it sits as the
//! inner (lower) trigram and another for the outer (upper) trigram. A
//! hexagram's six branches are the inner sequence followed by the outer one,
//! bottom to top.

use super::types::{Branch, LinePosition, PatternFlag, Polarity, Trigram};

/// Branches of a trigram in the inner position, bottom to top.
pub const fn inner_branches(trigram: Trigram) -> [Branch; 3] {
    use Branch::*;
    match trigram {
        Trigram::Qian | Trigram::Zhen => [Zi, Yin, Chen],
        Trigram::Kan => [Yin, Chen, Wu],
        Trigram::Gen => [Chen, Wu, Shen],
        Trigram::Kun => [Wei, Si, Mao],
        Trigram::Xun => [Chou, Hai, You],
        Trigram::Li => [Mao, Chou, Hai],
        Trigram::Dui => [Si, Mao, Chou],
    }
}

/// Branches of a trigram in the outer position, bottom to top.
pub const fn outer_branches(trigram: Trigram) -> [Branch; 3] {
    use Branch::*;
    match trigram {
        Trigram::Qian | Trigram::Zhen => [Wu, Shen, Xu],
        Trigram::Kan => [Shen, Xu, Zi],
        Trigram::Gen => [Xu, Zi, Yin],
        Trigram::Kun => [Chou, Hai, You],
        Trigram::Xun => [Wei, Si, Mao],
        Trigram::Li => [You, Wei, Si],
        Trigram::Dui => [Hai, You, Wei],
    }
}

/// The six branches of a hexagram, bottom to top.
///
/// # Example
///
/// ```
/// use najia::core::najia::assign;
/// use najia::core::types::{Branch, Trigram};
///
/// // 天風姤: wind below, heaven above
/// let branches = assign(Trigram::Xun, Trigram::Qian);
/// assert_eq!(branches[0], Branch::Chou);
/// assert_eq!(branches[5], Branch::Xu);
/// ```
pub fn assign(lower: Trigram, upper: Trigram) -> [Branch; 6] {
    let [a, b, c] = inner_branches(lower);
    let [d, e, f] = outer_branches(upper);
    [a, b, c, d, e, f]
}

/// The six line polarities of a hexagram, bottom to top.
pub fn lines_from_trigrams(lower: Trigram, upper: Trigram) -> [Polarity; 6] {
    let [a, b, c] = lower.lines();
    let [d, e, f] = upper.lines();
    [a, b, c, d, e, f]
}

/// Pattern flags implied by the branches alone (六冲, 六合).
///
/// A hexagram is six-clash when each line clashes with its partner three
/// lines up, and six-harmony when each pair combines.
pub fn branch_patterns(branches_bottom_up: &[Branch; 6]) -> Vec<PatternFlag> {
    let pairs = || {
        LinePosition::bottom_up().take(3).map(|p| {
            (
                branches_bottom_up[p.index()],
                branches_bottom_up[p.partner().index()],
            )
        })
    };

    let mut flags = Vec::new();
    if pairs().all(|(low, high)| low.clashes_with(high)) {
        flags.push(PatternFlag::SixClash);
    }
    if pairs().all(|(low, high)| low.combines_with(high)) {
        flags.push(PatternFlag::SixHarmony);
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_hexagrams() -> impl Iterator<Item = (Trigram, Trigram)> {
        Trigram::ALL
            .into_iter()
            .flat_map(|lower| Trigram::ALL.into_iter().map(move |upper| (lower, upper)))
    }

    #[test]
    fn pure_qian() {
        use Branch::*;
        assert_eq!(
            assign(Trigram::Qian, Trigram::Qian),
            [Zi, Yin, Chen, Wu, Shen, Xu]
        );
    }

    #[test]
    fn pure_kun() {
        use Branch::*;
        assert_eq!(
            assign(Trigram::Kun, Trigram::Kun),
            [Wei, Si, Mao, Chou, Hai, You]
        );
    }

    #[test]
    fn ten_six_clash_hexagrams() {
        let clash: Vec<_> = all_hexagrams()
            .filter(|&(lower, upper)| {
                branch_patterns(&assign(lower, upper)).contains(&PatternFlag::SixClash)
            })
            .collect();
        assert_eq!(clash.len(), 10);
        // 天雷无妄 and 雷天大壮 besides the eight pure hexagrams
        assert!(clash.contains(&(Trigram::Zhen, Trigram::Qian)));
        assert!(clash.contains(&(Trigram::Qian, Trigram::Zhen)));
    }

    #[test]
    fn eight_six_harmony_hexagrams() {
        let harmony: Vec<_> = all_hexagrams()
            .filter(|&(lower, upper)| {
                branch_patterns(&assign(lower, upper)).contains(&PatternFlag::SixHarmony)
            })
            .collect();
        assert_eq!(harmony.len(), 8);
        // 天地否 and 地天泰
        assert!(harmony.contains(&(Trigram::Kun, Trigram::Qian)));
        assert!(harmony.contains(&(Trigram::Qian, Trigram::Kun)));
    }

    #[test]
    fn lines_follow_trigrams() {
        use Polarity::*;
        // 地雷復: a single yang line at the bottom
        assert_eq!(
            lines_from_trigrams(Trigram::Zhen, Trigram::Kun),
            [Yang, Yin, Yin, Yin, Yin, Yin]
        );
    }
}
