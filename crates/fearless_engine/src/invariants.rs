//! First-class invariants for the draft and series state machines.
//!
//! Invariants are logical properties that must hold throughout
//! execution. Violations are programming errors, not runtime
//! conditions: they are asserted in debug builds and exercised directly
//! by tests.

use crate::draft::Draft;
use crate::order::DRAFT_LEN;
use crate::series::SeriesController;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

// ─────────────────────────────────────────────────────────────
//  Draft invariants
// ─────────────────────────────────────────────────────────────

/// Slots are write-once and only the sequencer fills them, so the
/// number of filled slots across both sides always equals the cursor.
pub struct SlotsMatchCursorInvariant;

impl Invariant<Draft> for SlotsMatchCursorInvariant {
    fn holds(draft: &Draft) -> bool {
        draft.blue().filled_count() + draft.red().filled_count() == draft.cursor()
    }

    fn description() -> &'static str {
        "filled slot count equals the cursor"
    }
}

/// The cursor never runs past the end of the draft order.
pub struct CursorBoundInvariant;

impl Invariant<Draft> for CursorBoundInvariant {
    fn holds(draft: &Draft) -> bool {
        draft.cursor() <= DRAFT_LEN
    }

    fn description() -> &'static str {
        "cursor stays within 0..=20"
    }
}

/// All draft invariants as a composable set.
pub type DraftInvariants = (SlotsMatchCursorInvariant, CursorBoundInvariant);

/// Asserts draft invariants in debug builds.
pub(crate) fn assert_draft(draft: &Draft) {
    debug_assert!(
        DraftInvariants::check_all(draft).is_ok(),
        "draft invariant violated: {:?}",
        DraftInvariants::check_all(draft)
    );
}

// ─────────────────────────────────────────────────────────────
//  Series invariants
// ─────────────────────────────────────────────────────────────

/// While the series is ongoing, exactly the finished games are
/// archived: history length equals `game_count - 1`.
pub struct HistoryMatchesGameCountInvariant;

impl Invariant<SeriesController> for HistoryMatchesGameCountInvariant {
    fn holds(series: &SeriesController) -> bool {
        series.is_complete() || series.history().len() == series.game_count() - 1
    }

    fn description() -> &'static str {
        "history length equals game_count - 1 while ongoing"
    }
}

/// History is append-only and game numbers are archived in order.
pub struct OrderedHistoryInvariant;

impl Invariant<SeriesController> for OrderedHistoryInvariant {
    fn holds(series: &SeriesController) -> bool {
        series
            .history()
            .iter()
            .enumerate()
            .all(|(index, record)| *record.game_number() == index + 1)
    }

    fn description() -> &'static str {
        "archived game numbers run 1..=n in order"
    }
}

/// All series invariants as a composable set.
pub type SeriesInvariants = (HistoryMatchesGameCountInvariant, OrderedHistoryInvariant);

/// Asserts series invariants in debug builds.
pub(crate) fn assert_series(series: &SeriesController) {
    debug_assert!(
        SeriesInvariants::check_all(series).is_ok(),
        "series invariant violated: {:?}",
        SeriesInvariants::check_all(series)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Champion, ChampionId, Role, Side};

    fn champ(id: i32) -> Champion {
        Champion {
            id: ChampionId(id),
            slug: format!("C{id}"),
            name: format!("C{id}"),
            roles: vec![Role::Bot],
            image: String::new(),
        }
    }

    #[test]
    fn test_draft_invariants_hold_through_a_draft() {
        let mut draft = Draft::new();
        assert!(DraftInvariants::check_all(&draft).is_ok());
        for i in 0..DRAFT_LEN {
            draft.select(champ(i as i32 + 1)).unwrap();
            assert!(DraftInvariants::check_all(&draft).is_ok());
        }
    }

    #[test]
    fn test_series_invariants_hold_across_games() {
        let mut series = SeriesController::new();
        assert!(SeriesInvariants::check_all(&series).is_ok());
        for game in 0..3 {
            for i in 0..DRAFT_LEN as i32 {
                series.select(champ(1 + game * 100 + i)).unwrap();
            }
            series.report_winner(Side::Blue).unwrap();
            assert!(SeriesInvariants::check_all(&series).is_ok());
        }
    }
}
