//! Coverage model: which (mode, submode) pairs a scout may claim and when
//! two claims observe the same thing.
//!
//! A claim covers a set of sides (attack, defence or both) and a rule
//! domain. Two claims conflict when they share a side and their rule
//! domains intersect. The rule is static; nothing here allocates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side(s) of play a scout observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Attack,
    Defence,
    AttackDefence,
}

/// Slice of the rule set (or the plays track) a scout records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Submode {
    AllRules,
    AnyRules,
    OurRules,
    NotOurRules,
    Plays,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Attack, Mode::Defence, Mode::AttackDefence];

    pub const fn sides(self) -> Sides {
        match self {
            Mode::Attack => Sides::ATTACK,
            Mode::Defence => Sides::DEFENCE,
            Mode::AttackDefence => Sides::BOTH,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Attack => "attack",
            Mode::Defence => "defence",
            Mode::AttackDefence => "attack_defence",
        }
    }
}

impl Submode {
    pub const ALL: [Submode; 5] = [
        Submode::AllRules,
        Submode::AnyRules,
        Submode::OurRules,
        Submode::NotOurRules,
        Submode::Plays,
    ];

    pub const fn domain(self) -> RuleDomain {
        match self {
            Submode::Plays => RuleDomain::Plays,
            Submode::OurRules => RuleDomain::Rules(RuleSlice::Our),
            Submode::NotOurRules => RuleDomain::Rules(RuleSlice::NotOur),
            Submode::AllRules | Submode::AnyRules => RuleDomain::Rules(RuleSlice::Full),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Submode::AllRules => "all_rules",
            Submode::AnyRules => "any_rules",
            Submode::OurRules => "our_rules",
            Submode::NotOurRules => "not_our_rules",
            Submode::Plays => "plays",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Submode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bit set over {attack, defence}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sides(u8);

impl Sides {
    pub const ATTACK: Sides = Sides(0b01);
    pub const DEFENCE: Sides = Sides(0b10);
    pub const BOTH: Sides = Sides(0b11);

    pub const fn intersects(self, other: Sides) -> bool {
        self.0 & other.0 != 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleSlice {
    /// Our team's infractions
    Our,
    /// The opponent's infractions
    NotOur,
    /// Every rule
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleDomain {
    /// Non-rules track; disjoint from every rules slice.
    Plays,
    Rules(RuleSlice),
}

impl RuleDomain {
    pub const fn overlaps(self, other: RuleDomain) -> bool {
        match (self, other) {
            (RuleDomain::Plays, RuleDomain::Plays) => true,
            (RuleDomain::Plays, _) | (_, RuleDomain::Plays) => false,
            (RuleDomain::Rules(RuleSlice::Our), RuleDomain::Rules(RuleSlice::NotOur))
            | (RuleDomain::Rules(RuleSlice::NotOur), RuleDomain::Rules(RuleSlice::Our)) => false,
            (RuleDomain::Rules(_), RuleDomain::Rules(_)) => true,
        }
    }
}

/// A (mode, submode) pair, valid or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coverage {
    pub mode: Mode,
    pub submode: Submode,
}

impl Coverage {
    pub const fn new(mode: Mode, submode: Submode) -> Self {
        Self { mode, submode }
    }

    /// Attack and Defence accept every submode. AttackDefence only makes
    /// sense for the unpartitioned tracks, AnyRules and Plays.
    pub const fn is_valid(self) -> bool {
        match self.mode {
            Mode::Attack | Mode::Defence => true,
            Mode::AttackDefence => matches!(self.submode, Submode::AnyRules | Submode::Plays),
        }
    }

    /// Symmetric: `a.conflicts_with(b) == b.conflicts_with(a)`.
    pub const fn conflicts_with(self, other: Coverage) -> bool {
        self.mode.sides().intersects(other.mode.sides())
            && self.submode.domain().overlaps(other.submode.domain())
    }

    /// Every valid pair, in declaration order.
    pub fn valid_pairs() -> impl Iterator<Item = Coverage> {
        Mode::ALL.into_iter().flat_map(|mode| {
            Submode::ALL
                .into_iter()
                .map(move |submode| Coverage::new(mode, submode))
                .filter(|c| c.is_valid())
        })
    }
}
