//! Roll resolution: 2d6 + power, classified into three tiers.
//!
//! Resolution is atomic — power is read from the registry at the moment of
//! resolution, the outcome record is fixed, and only then are temporary
//! story tags consumed according to the configured policy.

use rand::Rng;
use rand::rngs::StdRng;

use mw_core::{RollOutcome, Tag};

use crate::config::ConsumePolicy;
use crate::power::current_power;
use crate::registry::TagRegistry;

/// Resolve a roll with two fresh d6 draws.
///
/// Returns the immutable outcome and the story tags consumed as a side
/// effect of resolution.
pub fn resolve(
    registry: &mut TagRegistry,
    rng: &mut StdRng,
    policy: ConsumePolicy,
) -> (RollOutcome, Vec<Tag>) {
    let die1 = rng.random_range(1..=6);
    let die2 = rng.random_range(1..=6);
    resolve_with_dice(registry, die1, die2, policy)
}

/// Resolve a roll with fixed die values. Used by [`resolve`] and by drivers
/// that need reproducible outcomes.
pub fn resolve_with_dice(
    registry: &mut TagRegistry,
    die1: u32,
    die2: u32,
    policy: ConsumePolicy,
) -> (RollOutcome, Vec<Tag>) {
    let power = current_power(registry);
    let outcome = RollOutcome::new(die1, die2, power);
    let consumed = registry.consume_temporary(policy == ConsumePolicy::SelectedOnly);
    (outcome, consumed)
}
