//! Core domain types for the fearless draft.

use serde::{Deserialize, Serialize};

/// Number of ban slots (and pick slots) per side.
pub const SLOTS_PER_SIDE: usize = 5;

/// Stable numeric identifier for a champion.
///
/// Catalog ids are positive (Data Dragon numeric keys). The skip
/// sentinel lives outside that space as `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChampionId(pub i32);

impl ChampionId {
    /// Reserved id for the skip entry ("None" ban).
    pub const SKIP: ChampionId = ChampionId(-1);

    /// Returns true if this is the skip sentinel.
    pub fn is_skip(self) -> bool {
        self == Self::SKIP
    }
}

impl std::fmt::Display for ChampionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Positional role a champion can fill.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Top lane.
    Top,
    /// Jungle.
    Jungle,
    /// Mid lane.
    Mid,
    /// Bot lane carry.
    Bot,
    /// Support.
    Support,
}

/// A selectable catalog entry.
///
/// Immutable once loaded; all equality checks in the engine go through
/// `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    /// Stable unique id (comparable across games).
    pub id: ChampionId,
    /// Catalog slug, e.g. "Aatrox".
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Positional roles (presentation filtering only).
    pub roles: Vec<Role>,
    /// Display asset reference, opaque to the engine.
    pub image: String,
}

impl Champion {
    /// The skip entry: usable only on ban turns, exempt from all
    /// exclusivity rules, reusable indefinitely.
    pub fn skip() -> Self {
        Self {
            id: ChampionId::SKIP,
            slug: String::new(),
            name: "None".to_string(),
            roles: Vec::new(),
            image: String::new(),
        }
    }

    /// Returns true if this is the skip entry.
    pub fn is_skip(&self) -> bool {
        self.id.is_skip()
    }
}

/// Side color for the current game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Blue side.
    Blue,
    /// Red side.
    Red,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Blue => Side::Red,
            Side::Red => Side::Blue,
        }
    }
}

/// Competitive team identity, independent of side color.
///
/// Mapped onto a color per game via the series controller's
/// `team1_is_blue` flag; the mapping may flip between games (side swap).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum TeamId {
    /// First team of the series.
    Team1,
    /// Second team of the series.
    Team2,
}

/// Ban and pick slots for one side of the current game.
///
/// Each slot is set at most once per draft, only by the sequencer
/// committing the corresponding turn; slots are cleared only when a new
/// draft begins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideState {
    bans: [Option<Champion>; SLOTS_PER_SIDE],
    picks: [Option<Champion>; SLOTS_PER_SIDE],
}

impl SideState {
    /// Creates a side with all slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ban slots.
    pub fn bans(&self) -> &[Option<Champion>; SLOTS_PER_SIDE] {
        &self.bans
    }

    /// Returns the pick slots.
    pub fn picks(&self) -> &[Option<Champion>; SLOTS_PER_SIDE] {
        &self.picks
    }

    /// Fills a ban slot. The slot must be empty.
    pub(crate) fn set_ban(&mut self, slot: usize, champion: Champion) {
        debug_assert!(self.bans[slot].is_none(), "ban slot {slot} already filled");
        self.bans[slot] = Some(champion);
    }

    /// Fills a pick slot. The slot must be empty.
    pub(crate) fn set_pick(&mut self, slot: usize, champion: Champion) {
        debug_assert!(self.picks[slot].is_none(), "pick slot {slot} already filled");
        self.picks[slot] = Some(champion);
    }

    /// Clears every slot (new draft).
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    /// Iterates over all filled slots, bans and picks alike.
    pub fn filled(&self) -> impl Iterator<Item = &Champion> {
        self.bans
            .iter()
            .chain(self.picks.iter())
            .filter_map(|slot| slot.as_ref())
    }

    /// Filled pick slots in slot order, empties skipped.
    pub fn filled_picks(&self) -> Vec<Champion> {
        self.picks.iter().filter_map(|slot| slot.clone()).collect()
    }

    /// Filled ban slots in slot order, empties skipped.
    pub fn filled_bans(&self) -> Vec<Champion> {
        self.bans.iter().filter_map(|slot| slot.clone()).collect()
    }

    /// Number of filled slots across bans and picks.
    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_id_outside_catalog_space() {
        assert!(ChampionId::SKIP.is_skip());
        assert!(!ChampionId(266).is_skip());
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Blue.opponent(), Side::Red);
        assert_eq!(Side::Red.opponent(), Side::Blue);
    }

    #[test]
    fn test_side_state_starts_empty() {
        let side = SideState::new();
        assert_eq!(side.filled_count(), 0);
        assert!(side.filled_picks().is_empty());
        assert!(side.filled_bans().is_empty());
    }

    #[test]
    fn test_filled_skips_empty_slots() {
        let mut side = SideState::new();
        side.set_ban(2, Champion::skip());
        side.set_pick(0, test_champion(1, "Ahri"));
        assert_eq!(side.filled_count(), 2);
        assert_eq!(side.filled_picks().len(), 1);
        assert_eq!(side.filled_bans().len(), 1);
    }

    fn test_champion(id: i32, name: &str) -> Champion {
        Champion {
            id: ChampionId(id),
            slug: name.to_string(),
            name: name.to_string(),
            roles: vec![Role::Mid],
            image: String::new(),
        }
    }
}
