//! Eligibility rules for champion selection.
//!
//! This module contains pure functions for deciding whether a champion
//! may be taken at the current turn. Rules are separated from draft
//! storage so they can be evaluated against explicit state snapshots
//! without a live sequencer.

use crate::series::GameRecord;
use crate::types::{ChampionId, SideState};
use serde::{Deserialize, Serialize};

/// Why a champion cannot currently be selected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum DisabledReason {
    /// Already banned or picked in the current game.
    Current,
    /// Picked in an earlier game of the series (fearless rule).
    Fearless,
}

/// Result of an eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Whether the champion is blocked at this turn.
    pub disabled: bool,
    /// The rule that blocked it, if any.
    pub reason: Option<DisabledReason>,
}

impl Availability {
    /// The champion may be selected.
    pub fn open() -> Self {
        Self {
            disabled: false,
            reason: None,
        }
    }

    /// The champion is blocked by `reason`.
    pub fn blocked(reason: DisabledReason) -> Self {
        Self {
            disabled: true,
            reason: Some(reason),
        }
    }
}

/// Decides whether `id` may be selected given the current game's side
/// states and the accumulated series history.
///
/// Checks run in strict priority order:
/// 1. The skip entry bypasses every rule.
/// 2. Any ban or pick of `id` in the current game, either side, blocks
///    it with [`DisabledReason::Current`].
/// 3. Any *pick* of `id` in an earlier game blocks it with
///    [`DisabledReason::Fearless`]. Bans do not carry across games.
pub fn availability(
    id: ChampionId,
    blue: &SideState,
    red: &SideState,
    history: &[GameRecord],
) -> Availability {
    if id.is_skip() {
        return Availability::open();
    }

    if blue.filled().chain(red.filled()).any(|c| c.id == id) {
        return Availability::blocked(DisabledReason::Current);
    }

    if fearless_pool(history).contains(&id) {
        return Availability::blocked(DisabledReason::Fearless);
    }

    Availability::open()
}

/// Every champion picked in any archived game of the series.
///
/// Bans are deliberately excluded: per-game only, free to repeat. This
/// asymmetry is the defining rule of the fearless format.
pub fn fearless_pool(history: &[GameRecord]) -> Vec<ChampionId> {
    history
        .iter()
        .flat_map(|record| record.picks())
        .map(|champion| champion.id)
        .collect()
}
