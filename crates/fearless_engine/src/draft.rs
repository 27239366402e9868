//! Draft sequencer state machine.
//!
//! Advances turn-by-turn through the fixed draft order, committing
//! selections into per-side slots. Eligibility is the caller's gate
//! (the series controller consults the rules module before delegating
//! here); the sequencer itself enforces only its own contract.

use crate::order::{self, DRAFT_LEN, Turn, TurnAction};
use crate::rules::DisabledReason;
use crate::types::{Champion, ChampionId, Side, SideState};
use tracing::{debug, instrument};

/// Errors raised when a selection violates the draft contract.
///
/// A disabled champion or a skip entry on a pick turn reaching the
/// engine indicates a caller bug, so both are raised rather than
/// silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// The skip entry was offered on a pick turn; it may only fill ban
    /// slots.
    #[display("the skip entry cannot fill a pick slot")]
    SkipOnPick,

    /// The champion is blocked by an eligibility rule.
    #[display("champion {} is disabled ({})", _0, _1)]
    Disabled(ChampionId, DisabledReason),

    /// The series has completed; no further selections are accepted.
    #[display("the series is complete")]
    SeriesOver,
}

impl std::error::Error for SelectError {}

// ─────────────────────────────────────────────────────────────
//  Sequencer
// ─────────────────────────────────────────────────────────────

/// One game's 20-turn draft.
///
/// States: active (cursor in 0..20) and complete (cursor == 20). The
/// cursor is monotonically non-decreasing within a draft; slots are
/// write-once until the controller starts the next game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    cursor: usize,
    blue: SideState,
    red: SideState,
}

impl Draft {
    /// Creates a fresh draft at turn 0 with empty side states.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// The turn the next selection fills, or `None` once all 20 turns
    /// are taken.
    pub fn current_turn(&self) -> Option<&'static Turn> {
        order::turn_at(self.cursor)
    }

    /// Index of the current turn, 0..=20.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once all 20 turns are taken.
    pub fn is_complete(&self) -> bool {
        self.cursor >= DRAFT_LEN
    }

    /// Blue side's slots for this game.
    pub fn blue(&self) -> &SideState {
        &self.blue
    }

    /// Red side's slots for this game.
    pub fn red(&self) -> &SideState {
        &self.red
    }

    /// Commits `champion` to the slot addressed by the current turn and
    /// advances the cursor.
    ///
    /// Selecting after the draft is complete is a silent no-op: late
    /// stray input is tolerated, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::SkipOnPick`] if the skip entry is offered
    /// on a pick turn.
    #[instrument(skip(self, champion), fields(cursor = self.cursor, champion = %champion.name))]
    pub fn select(&mut self, champion: Champion) -> Result<(), SelectError> {
        let Some(turn) = self.current_turn() else {
            debug!("draft already complete, ignoring selection");
            return Ok(());
        };

        if turn.action == TurnAction::Pick && champion.is_skip() {
            return Err(SelectError::SkipOnPick);
        }

        let side = match turn.side {
            Side::Blue => &mut self.blue,
            Side::Red => &mut self.red,
        };
        match turn.action {
            TurnAction::Ban => side.set_ban(turn.slot, champion),
            TurnAction::Pick => side.set_pick(turn.slot, champion),
        }
        self.cursor += 1;

        crate::invariants::assert_draft(self);
        Ok(())
    }

    /// Restores turn 0 with both sides cleared. Invoked only by the
    /// series controller when a new game begins.
    #[instrument(skip(self))]
    pub(crate) fn reset(&mut self) {
        self.cursor = 0;
        self.blue.clear();
        self.red.clear();
    }
}
