//! Best-of-five series management.
//!
//! The series controller owns the active draft, the archive of finished
//! games, and the mapping from team identities to side colors. It is the
//! single writer of series state: the sequencer surrenders its side
//! states whenever a new game begins.

use crate::draft::{Draft, SelectError};
use crate::rules::{self, Availability};
use crate::types::{Champion, ChampionId, Side, SideState, TeamId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Games a team must win to take the series.
pub const WINS_TO_TAKE_SERIES: usize = 3;

/// Maximum games in a series.
pub const MAX_GAMES: usize = 5;

/// Errors raised by series-level transitions.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SeriesError {
    /// A winner was reported while the draft still has open turns.
    #[display("cannot report a winner with only {} of 20 turns taken", _0)]
    DraftNotComplete(usize),

    /// The series already has a winner; only a full reset continues.
    #[display("the series is complete")]
    SeriesOver,
}

impl std::error::Error for SeriesError {}

// ─────────────────────────────────────────────────────────────
//  Game records
// ─────────────────────────────────────────────────────────────

/// One side's completed draft, empties filtered out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SideRecord {
    /// Filled picks in slot order.
    picks: Vec<Champion>,
    /// Filled bans in slot order (skip bans included).
    bans: Vec<Champion>,
}

impl SideRecord {
    fn from_state(state: &SideState) -> Self {
        Self {
            picks: state.filled_picks(),
            bans: state.filled_bans(),
        }
    }
}

/// Immutable snapshot of a finished game.
///
/// Created exactly once, when the winner is reported; never mutated
/// afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameRecord {
    /// Game number within the series (1-based).
    game_number: usize,
    /// Blue side's picks and bans.
    blue: SideRecord,
    /// Red side's picks and bans.
    red: SideRecord,
    /// The side color that won.
    winning_side: Side,
    /// The team identity that won, derived from the mapping in effect
    /// when the game was recorded.
    winning_team: TeamId,
    /// The `team1_is_blue` value in effect for this game.
    team1_was_blue: bool,
}

impl GameRecord {
    /// Snapshots a finished draft under the given identity mapping.
    pub fn new(
        game_number: usize,
        blue: &SideState,
        red: &SideState,
        winning_side: Side,
        team1_is_blue: bool,
    ) -> Self {
        Self {
            game_number,
            blue: SideRecord::from_state(blue),
            red: SideRecord::from_state(red),
            winning_side,
            winning_team: team_for_side(winning_side, team1_is_blue),
            team1_was_blue: team1_is_blue,
        }
    }

    /// Both sides' picks: the entries this game contributes to the
    /// fearless pool.
    pub fn picks(&self) -> impl Iterator<Item = &Champion> {
        self.blue.picks.iter().chain(self.red.picks.iter())
    }
}

fn team_for_side(side: Side, team1_is_blue: bool) -> TeamId {
    if (side == Side::Blue) == team1_is_blue {
        TeamId::Team1
    } else {
        TeamId::Team2
    }
}

// ─────────────────────────────────────────────────────────────
//  Series controller
// ─────────────────────────────────────────────────────────────

/// A best-of-five series of drafts under the fearless rule.
///
/// States: in progress, and complete (terminal; only
/// [`SeriesController::reset_series`] exits it). Completion fires at
/// three wins for either team identity, or unconditionally once game 5
/// is recorded.
#[derive(Debug, Clone)]
pub struct SeriesController {
    game_count: usize,
    team1_is_blue: bool,
    complete: bool,
    history: Vec<GameRecord>,
    draft: Draft,
}

impl SeriesController {
    /// Starts a fresh series at game 1, team 1 on blue.
    #[instrument]
    pub fn new() -> Self {
        info!("starting new series");
        Self {
            game_count: 1,
            team1_is_blue: true,
            complete: false,
            history: Vec::new(),
            draft: Draft::new(),
        }
    }

    /// The draft in progress (frozen as-is once the series completes,
    /// so the final board stays inspectable).
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Current game number, 1-based. Frozen once the series completes.
    pub fn game_count(&self) -> usize {
        self.game_count
    }

    /// Whether team 1 occupies the blue side for the current game.
    pub fn team1_is_blue(&self) -> bool {
        self.team1_is_blue
    }

    /// True once a termination condition has fired.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Archived games, oldest first.
    pub fn history(&self) -> &[GameRecord] {
        &self.history
    }

    /// Wins recorded for the given team identity.
    pub fn wins(&self, team: TeamId) -> usize {
        self.history
            .iter()
            .filter(|record| *record.winning_team() == team)
            .count()
    }

    /// Series score as (team 1 wins, team 2 wins).
    pub fn score(&self) -> (usize, usize) {
        (self.wins(TeamId::Team1), self.wins(TeamId::Team2))
    }

    /// Eligibility of `id` at the current turn, given the active draft
    /// and the accumulated history.
    pub fn availability(&self, id: ChampionId) -> Availability {
        rules::availability(id, self.draft.blue(), self.draft.red(), &self.history)
    }

    /// Whether reporting `hypothetical_winner` for the current game
    /// would end the series.
    ///
    /// This is the single authoritative completion predicate;
    /// [`SeriesController::report_winner`] uses it internally, so a
    /// side-swap prompt shown only for continuing series cannot drift
    /// from the archive logic.
    pub fn would_complete(&self, hypothetical_winner: Side) -> bool {
        let winner = team_for_side(hypothetical_winner, self.team1_is_blue);
        let team1 = self.wins(TeamId::Team1) + usize::from(winner == TeamId::Team1);
        let team2 = self.wins(TeamId::Team2) + usize::from(winner == TeamId::Team2);
        self.game_count >= MAX_GAMES
            || team1 >= WINS_TO_TAKE_SERIES
            || team2 >= WINS_TO_TAKE_SERIES
    }

    /// Gates a selection on eligibility, then commits it to the draft.
    ///
    /// # Errors
    ///
    /// - [`SelectError::SeriesOver`] once the series has completed.
    /// - [`SelectError::Disabled`] if an eligibility rule blocks the
    ///   champion. A disabled entry reaching this point is a caller
    ///   bug, so it raises rather than ignores.
    /// - [`SelectError::SkipOnPick`] from the sequencer's own contract.
    #[instrument(skip(self, champion), fields(game = self.game_count, champion = %champion.name))]
    pub fn select(&mut self, champion: Champion) -> Result<(), SelectError> {
        if self.complete {
            warn!("selection after series completion");
            return Err(SelectError::SeriesOver);
        }

        let availability = self.availability(champion.id);
        if let Some(reason) = availability.reason {
            warn!(%reason, "disabled champion reached select");
            return Err(SelectError::Disabled(champion.id, reason));
        }

        self.draft.select(champion)
    }

    /// Archives the finished draft under `winning_side` and either
    /// advances to the next game or freezes the series as complete.
    ///
    /// The identity mapping is not touched: side swap is a competitive
    /// choice the teams make, exposed separately as
    /// [`SeriesController::set_team1_is_blue`].
    ///
    /// # Errors
    ///
    /// - [`SeriesError::DraftNotComplete`] if the draft still has open
    ///   turns (an incomplete game record would be unrecoverable).
    /// - [`SeriesError::SeriesOver`] once the series has completed.
    #[instrument(skip(self), fields(game = self.game_count, winner = %winning_side))]
    pub fn report_winner(&mut self, winning_side: Side) -> Result<(), SeriesError> {
        if self.complete {
            warn!("winner reported after series completion");
            return Err(SeriesError::SeriesOver);
        }
        if !self.draft.is_complete() {
            warn!(turns = self.draft.cursor(), "winner reported mid-draft");
            return Err(SeriesError::DraftNotComplete(self.draft.cursor()));
        }

        let completes = self.would_complete(winning_side);
        let record = GameRecord::new(
            self.game_count,
            self.draft.blue(),
            self.draft.red(),
            winning_side,
            self.team1_is_blue,
        );
        let winning_team = *record.winning_team();
        self.history.push(record);

        if completes {
            // Freeze game count, cursor, and side states as-is.
            self.complete = true;
            let (team1, team2) = self.score();
            info!(%winning_team, team1, team2, "series complete");
        } else {
            self.game_count += 1;
            self.draft.reset();
            info!(%winning_team, next_game = self.game_count, "game archived");
        }

        crate::invariants::assert_series(self);
        Ok(())
    }

    /// Remaps team identities onto side colors for the upcoming game.
    ///
    /// Pure setter, no validation: whether to swap is the teams'
    /// decision, typically made once per game boundary.
    #[instrument(skip(self))]
    pub fn set_team1_is_blue(&mut self, value: bool) {
        self.team1_is_blue = value;
    }

    /// Full teardown: game 1, team 1 on blue, history cleared, fresh
    /// draft.
    #[instrument(skip(self))]
    pub fn reset_series(&mut self) {
        info!("resetting series");
        *self = Self::new();
    }
}

impl Default for SeriesController {
    fn default() -> Self {
        Self::new()
    }
}
