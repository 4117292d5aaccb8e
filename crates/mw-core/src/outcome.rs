//! Roll outcomes and the three-tier classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Three-way classification of a roll total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Total 6 or less.
    Miss,
    /// Total 7 to 9.
    Partial,
    /// Total 10 or more.
    Full,
}

impl Tier {
    /// Classify a roll total. The thresholds are fixed: 10+ is a full hit,
    /// 7-9 a partial hit, 6 or less a miss.
    pub fn classify(total: i32) -> Self {
        match total {
            t if t >= 10 => Self::Full,
            7..=9 => Self::Partial,
            _ => Self::Miss,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Miss => write!(f, "Miss"),
            Self::Partial => write!(f, "Partial"),
            Self::Full => write!(f, "Full"),
        }
    }
}

/// The immutable record of one resolved roll.
///
/// Die results are fixed at creation and never mutated retroactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// First d6 (1-6).
    pub die1: u32,
    /// Second d6 (1-6).
    pub die2: u32,
    /// The power modifier at the moment of resolution.
    pub power: i32,
    /// `die1 + die2 + power`.
    pub total: i32,
    /// Tier classification of the total.
    pub tier: Tier,
}

impl RollOutcome {
    /// Build an outcome from two die values and a power modifier.
    pub fn new(die1: u32, die2: u32, power: i32) -> Self {
        let total = die1 as i32 + die2 as i32 + power;
        Self {
            die1,
            die2,
            power,
            total,
            tier: Tier::classify(total),
        }
    }
}

impl fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "2d6 [{}, {}] {:+} = {} — {}",
            self.die1, self.die2, self.power, self.total, self.tier
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries_exact() {
        assert_eq!(Tier::classify(6), Tier::Miss);
        assert_eq!(Tier::classify(7), Tier::Partial);
        assert_eq!(Tier::classify(9), Tier::Partial);
        assert_eq!(Tier::classify(10), Tier::Full);
    }

    #[test]
    fn classify_extremes() {
        assert_eq!(Tier::classify(-3), Tier::Miss);
        assert_eq!(Tier::classify(0), Tier::Miss);
        assert_eq!(Tier::classify(12), Tier::Full);
        assert_eq!(Tier::classify(20), Tier::Full);
    }

    #[test]
    fn classify_is_a_partition() {
        for total in -10..=25 {
            let tier = Tier::classify(total);
            match tier {
                Tier::Miss => assert!(total <= 6),
                Tier::Partial => assert!((7..=9).contains(&total)),
                Tier::Full => assert!(total >= 10),
            }
        }
    }

    #[test]
    fn outcome_total_and_tier() {
        let o = RollOutcome::new(4, 5, 2);
        assert_eq!(o.total, 11);
        assert_eq!(o.tier, Tier::Full);
    }

    #[test]
    fn outcome_with_negative_power() {
        let o = RollOutcome::new(3, 4, -2);
        assert_eq!(o.total, 5);
        assert_eq!(o.tier, Tier::Miss);
    }

    #[test]
    fn display() {
        assert_eq!(
            RollOutcome::new(4, 5, 2).to_string(),
            "2d6 [4, 5] +2 = 11 — Full"
        );
        assert_eq!(
            RollOutcome::new(3, 4, -1).to_string(),
            "2d6 [3, 4] -1 = 6 — Miss"
        );
    }

    #[test]
    fn serde_roundtrip() {
        let o = RollOutcome::new(2, 6, 1);
        let json = serde_json::to_string(&o).unwrap();
        let back: RollOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, o);
    }
}
