//! Role heuristics for catalog champions.
//!
//! The catalog only carries class tags (Fighter, Mage, ...). Positions
//! are derived from a static tag map, with a manual override table for
//! champions the class heuristic places badly. Presentation/filtering
//! convenience only; the engine never reads roles.

use fearless_engine::Role;

/// Derives positional roles for a champion.
///
/// Overrides win outright; otherwise the union of the tag mappings is
/// used. Every champion gets at least one role (`Mid` fallback).
pub fn infer_roles(slug: &str, tags: &[String]) -> Vec<Role> {
    let mut roles: Vec<Role> = match override_roles(slug) {
        Some(fixed) => fixed.to_vec(),
        None => tags.iter().flat_map(|tag| tag_roles(tag)).copied().collect(),
    };

    roles.sort();
    roles.dedup();
    if roles.is_empty() {
        roles.push(Role::Mid);
    }
    roles
}

/// Class-tag to positions mapping.
fn tag_roles(tag: &str) -> &'static [Role] {
    match tag {
        "Fighter" => &[Role::Top, Role::Jungle],
        "Tank" => &[Role::Top, Role::Jungle, Role::Support],
        "Mage" => &[Role::Mid, Role::Support],
        "Assassin" => &[Role::Mid, Role::Jungle],
        "Marksman" => &[Role::Bot],
        "Support" => &[Role::Support],
        _ => &[],
    }
}

/// Champions whose tags mislead the heuristic.
fn override_roles(slug: &str) -> Option<&'static [Role]> {
    let roles: &'static [Role] = match slug {
        "Jayce" => &[Role::Top, Role::Mid],
        "Gangplank" => &[Role::Top],
        "Fiora" => &[Role::Top],
        "Camille" => &[Role::Top],
        "Irelia" => &[Role::Top, Role::Mid],
        "Graves" => &[Role::Jungle],
        "Nidalee" => &[Role::Jungle],
        "Kindred" => &[Role::Jungle],
        "Senna" => &[Role::Support, Role::Bot],
        "Pyke" => &[Role::Support],
        "Thresh" => &[Role::Support],
        "Blitzcrank" => &[Role::Support],
        "Nautilus" => &[Role::Support],
        _ => return None,
    };
    Some(roles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_tag_union() {
        let roles = infer_roles("Gragas", &tags(&["Fighter", "Mage"]));
        assert_eq!(roles, vec![Role::Top, Role::Jungle, Role::Mid, Role::Support]);
    }

    #[test]
    fn test_override_beats_tags() {
        // Graves is tagged Marksman, but plays jungle.
        let roles = infer_roles("Graves", &tags(&["Marksman"]));
        assert_eq!(roles, vec![Role::Jungle]);
    }

    #[test]
    fn test_unknown_tags_fall_back_to_mid() {
        let roles = infer_roles("Mystery", &tags(&["Artifact"]));
        assert_eq!(roles, vec![Role::Mid]);
    }

    #[test]
    fn test_marksman_is_bot() {
        let roles = infer_roles("Jinx", &tags(&["Marksman"]));
        assert_eq!(roles, vec![Role::Bot]);
    }
}
