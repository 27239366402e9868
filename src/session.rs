//! Draft session management for presentation layers.
//!
//! A [`DraftSession`] is the single stateful object a UI talks to: it
//! owns the series controller and the roster state, gates selections on
//! eligibility, and exposes the read surface (current turn, boards,
//! history, score, availability). UI and audio language preferences are
//! deliberately not here; they are presentation concerns with no
//! bearing on draft state.

use crate::catalog::{CatalogClient, Roster};
use fearless_engine::{
    Availability, Champion, ChampionId, GameRecord, SelectError, SeriesController, SeriesError,
    Side, SideState, Turn,
};
use tracing::{debug, info, instrument, warn};

/// Lifecycle of the roster fetch.
///
/// The draft engine has no ordering dependency on this: a draft can sit
/// at turn 0 before the roster resolves, selection just has nothing to
/// offer yet.
#[derive(Debug, Clone, Default)]
pub enum RosterState {
    /// No fetch attempted yet.
    #[default]
    NotLoaded,
    /// Fetch in flight.
    Loading,
    /// Roster available.
    Ready(Roster),
    /// Fetch failed; roster is empty until a retry succeeds.
    Failed,
}

/// Errors surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The id resolves to no champion in the loaded roster.
    #[display("no champion with id {} in the roster", _0)]
    UnknownChampion(ChampionId),

    /// A selection violated the draft contract.
    #[display("{}", _0)]
    Select(SelectError),

    /// A series transition was rejected.
    #[display("{}", _0)]
    Series(SeriesError),
}

impl std::error::Error for SessionError {}

impl From<SelectError> for SessionError {
    fn from(error: SelectError) -> Self {
        SessionError::Select(error)
    }
}

impl From<SeriesError> for SessionError {
    fn from(error: SeriesError) -> Self {
        SessionError::Series(error)
    }
}

/// One running fearless-draft session.
#[derive(Debug, Clone, Default)]
pub struct DraftSession {
    series: SeriesController,
    roster: RosterState,
}

impl DraftSession {
    /// Creates a session with no roster loaded.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating draft session");
        Self::default()
    }

    /// Creates a session over an already-loaded roster.
    pub fn with_roster(roster: Roster) -> Self {
        Self {
            series: SeriesController::new(),
            roster: RosterState::Ready(roster),
        }
    }

    /// Fetches the roster through `client`.
    ///
    /// On failure the session is marked [`RosterState::Failed`] and the
    /// champion list stays empty; the draft state machine is untouched
    /// either way, and a later retry may succeed.
    #[instrument(skip(self, client))]
    pub async fn load_roster(&mut self, client: &CatalogClient) {
        self.roster = RosterState::Loading;
        match client.load_roster().await {
            Ok(roster) => {
                info!(version = %roster.version(), count = roster.len(), "Roster loaded");
                self.roster = RosterState::Ready(roster);
            }
            Err(error) => {
                warn!(%error, "Roster fetch failed");
                self.roster = RosterState::Failed;
            }
        }
    }

    /// The champions available for selection; empty until a fetch
    /// succeeds.
    pub fn champions(&self) -> &[Champion] {
        match &self.roster {
            RosterState::Ready(roster) => roster.champions(),
            _ => &[],
        }
    }

    /// True if the last roster fetch failed.
    pub fn roster_failed(&self) -> bool {
        matches!(self.roster, RosterState::Failed)
    }

    /// The patch version of the loaded roster, if any.
    pub fn roster_version(&self) -> Option<&str> {
        match &self.roster {
            RosterState::Ready(roster) => Some(roster.version().as_str()),
            _ => None,
        }
    }

    /// Resolves `id` against the roster and commits the selection.
    ///
    /// The skip sentinel resolves without a roster (it is a constant,
    /// never fetched); any other id must name a loaded champion.
    #[instrument(skip(self))]
    pub fn select_by_id(&mut self, id: ChampionId) -> Result<(), SessionError> {
        let champion = if id.is_skip() {
            Champion::skip()
        } else {
            match &self.roster {
                RosterState::Ready(roster) => roster
                    .get(id)
                    .cloned()
                    .ok_or(SessionError::UnknownChampion(id))?,
                _ => {
                    warn!(%id, "Selection attempted without a loaded roster");
                    return Err(SessionError::UnknownChampion(id));
                }
            }
        };

        self.series.select(champion).map_err(|error| {
            warn!(%id, %error, "Selection rejected");
            SessionError::from(error)
        })?;

        debug!(%id, cursor = self.series.draft().cursor(), "Selection committed");
        Ok(())
    }

    /// Reports the winner of the completed draft.
    #[instrument(skip(self))]
    pub fn report_winner(&mut self, winning_side: Side) -> Result<(), SessionError> {
        self.series.report_winner(winning_side).map_err(|error| {
            warn!(%winning_side, %error, "Winner report rejected");
            SessionError::from(error)
        })
    }

    /// Whether reporting `winner` would end the series. Drives the
    /// "swap sides?" prompt, which is only shown for continuing series.
    pub fn would_complete(&self, winner: Side) -> bool {
        self.series.would_complete(winner)
    }

    /// Remaps team 1 onto blue (or not) for the upcoming game.
    #[instrument(skip(self))]
    pub fn set_team1_is_blue(&mut self, value: bool) {
        self.series.set_team1_is_blue(value);
    }

    /// Resets the series; the roster is kept.
    #[instrument(skip(self))]
    pub fn reset_series(&mut self) {
        self.series.reset_series();
    }

    // ─────────────────────────────────────────────────────────────
    //  Read surface
    // ─────────────────────────────────────────────────────────────

    /// The turn the next selection fills, or `None` when the draft is
    /// complete.
    pub fn current_turn(&self) -> Option<&'static Turn> {
        self.series.draft().current_turn()
    }

    /// Blue side's slots for the current game.
    pub fn blue(&self) -> &SideState {
        self.series.draft().blue()
    }

    /// Red side's slots for the current game.
    pub fn red(&self) -> &SideState {
        self.series.draft().red()
    }

    /// Archived games, oldest first.
    pub fn history(&self) -> &[GameRecord] {
        self.series.history()
    }

    /// Current game number, 1-based.
    pub fn game_count(&self) -> usize {
        self.series.game_count()
    }

    /// True once the series has a winner (or game 5 was recorded).
    pub fn is_series_complete(&self) -> bool {
        self.series.is_complete()
    }

    /// Whether team 1 occupies blue for the current game.
    pub fn team1_is_blue(&self) -> bool {
        self.series.team1_is_blue()
    }

    /// Series score as (team 1 wins, team 2 wins).
    pub fn score(&self) -> (usize, usize) {
        self.series.score()
    }

    /// Eligibility of `id` at the current turn.
    pub fn availability(&self, id: ChampionId) -> Availability {
        self.series.availability(id)
    }
}
