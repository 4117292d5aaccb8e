//! The power calculator: registry state to a signed roll modifier.

use crate::registry::TagRegistry;

/// Compute the power modifier for the next roll.
///
/// Each selected tag name contributes +1 (power or story) or -1 (weakness),
/// and every currently-held story tag adds +1 whether selected or not —
/// story tags represent active narrative leverage simply by existing.
///
/// A name present in both a power list and a weakness list scores as weak:
/// the tie-break is deliberately conservative against the player.
///
/// Total over any well-formed registry state; no failure modes.
pub fn current_power(registry: &TagRegistry) -> i32 {
    let mut seen: Vec<String> = Vec::new();
    let mut power = 0;
    for tag in registry.selected() {
        let lower = tag.name.to_lowercase();
        if seen.contains(&lower) {
            continue;
        }
        seen.push(lower);
        power += if registry.is_weakness(&tag.name) { -1 } else { 1 };
    }
    power + registry.story_count() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use mw_core::{CharacterSheet, Persistence, Theme, sheet::WeaknessTags};

    fn registry() -> TagRegistry {
        TagRegistry::from_sheet(&CharacterSheet {
            name: "Nyx".to_string(),
            themes: vec![Theme {
                name: "Street Fighter".to_string(),
                power_tags: vec!["Sharp Tongue".to_string(), "Quick Reflexes".to_string()],
                weakness_tags: WeaknessTags::One("Glass Jaw".to_string()),
                mystery: None,
                description: None,
            }],
        })
    }

    #[test]
    fn empty_selection_is_zero() {
        assert_eq!(current_power(&registry()), 0);
    }

    #[test]
    fn selected_power_tag_is_plus_one() {
        let mut reg = registry();
        reg.toggle_select("Sharp Tongue").unwrap();
        assert_eq!(current_power(&reg), 1);
    }

    #[test]
    fn selected_weakness_tag_is_minus_one() {
        let mut reg = registry();
        reg.toggle_select("Glass Jaw").unwrap();
        assert_eq!(current_power(&reg), -1);
    }

    #[test]
    fn weakness_dominant_on_name_collision() {
        // A name listed as both a power and a weakness tag scores -1.
        let mut reg = TagRegistry::from_sheet(&CharacterSheet {
            name: "Nyx".to_string(),
            themes: vec![Theme {
                name: "Conflicted".to_string(),
                power_tags: vec!["Reckless".to_string()],
                weakness_tags: WeaknessTags::One("Reckless".to_string()),
                mystery: None,
                description: None,
            }],
        });
        reg.toggle_select("Reckless").unwrap();
        assert_eq!(current_power(&reg), -1);
    }

    #[test]
    fn story_tags_count_without_selection() {
        let mut reg = registry();
        reg.add_story_tag("Wired In", Persistence::Ongoing).unwrap();
        reg.add_story_tag("Fleeting Edge", Persistence::Temporary)
            .unwrap();
        assert_eq!(current_power(&reg), 2);
    }

    #[test]
    fn selected_story_tag_counts_twice() {
        // Once for being selected, once for existing.
        let mut reg = registry();
        reg.add_story_tag("Wired In", Persistence::Ongoing).unwrap();
        reg.toggle_select("Wired In").unwrap();
        assert_eq!(current_power(&reg), 2);
    }

    #[test]
    fn mixed_selection() {
        let mut reg = registry();
        reg.toggle_select("Sharp Tongue").unwrap();
        reg.toggle_select("Quick Reflexes").unwrap();
        reg.toggle_select("Glass Jaw").unwrap();
        reg.add_story_tag("Wired In", Persistence::Ongoing).unwrap();
        // +1 +1 -1 + 1 story
        assert_eq!(current_power(&reg), 2);
    }

    #[test]
    fn burnt_tags_do_not_contribute() {
        let mut reg = registry();
        reg.toggle_select("Sharp Tongue").unwrap();
        reg.burn("Sharp Tongue").unwrap();
        assert_eq!(current_power(&reg), 0);
    }

    #[test]
    fn each_story_tag_adds_exactly_one() {
        let mut reg = registry();
        reg.toggle_select("Sharp Tongue").unwrap();
        let base = current_power(&reg);
        for n in 1..=4 {
            reg.add_story_tag(format!("Story {n}").as_str(), Persistence::Ongoing)
                .unwrap();
            assert_eq!(current_power(&reg), base + n);
        }
    }
}
