//! Property tests for the coverage model (pure domain, no DB).
//!
//! Contract:
//! - conflict is symmetric
//! - two claims conflict iff they share a side and their rule domains overlap
//! - a valid claim always conflicts with itself
//! - validity is exactly the per-mode table

use proptest::prelude::*;

use crate::domain::coverage::{Coverage, Mode, RuleDomain, RuleSlice, Submode};

fn any_mode() -> impl Strategy<Value = Mode> {
    prop::sample::select(Mode::ALL.to_vec())
}

fn any_submode() -> impl Strategy<Value = Submode> {
    prop::sample::select(Submode::ALL.to_vec())
}

fn any_coverage() -> impl Strategy<Value = Coverage> {
    (any_mode(), any_submode()).prop_map(|(mode, submode)| Coverage::new(mode, submode))
}

/// Sides spelled out as a list, independent of the bit set.
fn side_list(mode: Mode) -> &'static [Mode] {
    match mode {
        Mode::Attack => &[Mode::Attack],
        Mode::Defence => &[Mode::Defence],
        Mode::AttackDefence => &[Mode::Attack, Mode::Defence],
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_conflict_is_symmetric(a in any_coverage(), b in any_coverage()) {
        prop_assert_eq!(a.conflicts_with(b), b.conflicts_with(a));
    }

    #[test]
    fn prop_conflict_matches_side_and_domain_decomposition(
        a in any_coverage(),
        b in any_coverage(),
    ) {
        let shares_side = side_list(a.mode)
            .iter()
            .any(|s| side_list(b.mode).contains(s));
        let domains_overlap = match (a.submode.domain(), b.submode.domain()) {
            (RuleDomain::Plays, RuleDomain::Plays) => true,
            (RuleDomain::Rules(x), RuleDomain::Rules(y)) => {
                x == RuleSlice::Full || y == RuleSlice::Full || x == y
            }
            _ => false,
        };
        prop_assert_eq!(a.conflicts_with(b), shares_side && domains_overlap);
    }

    #[test]
    fn prop_every_claim_conflicts_with_itself(a in any_coverage()) {
        prop_assert!(a.conflicts_with(a));
    }

    #[test]
    fn prop_validity_table(a in any_coverage()) {
        let expected = match a.mode {
            Mode::Attack | Mode::Defence => true,
            Mode::AttackDefence => matches!(a.submode, Submode::AnyRules | Submode::Plays),
        };
        prop_assert_eq!(a.is_valid(), expected);
    }

    /// A valid AttackDefence claim blocks every claim of its track on either side.
    #[test]
    fn prop_attack_defence_blocks_same_track(
        submode in prop::sample::select(vec![Submode::AnyRules, Submode::Plays]),
        other in any_coverage(),
    ) {
        let both = Coverage::new(Mode::AttackDefence, submode);
        let same_track = matches!(other.submode.domain(), RuleDomain::Plays)
            == matches!(submode.domain(), RuleDomain::Plays);
        prop_assert_eq!(both.conflicts_with(other), same_track);
    }
}
