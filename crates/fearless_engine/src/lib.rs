//! Fearless draft core - sequencing and eligibility for a best-of-five
//! champion select.
//!
//! # Architecture
//!
//! - **Order**: the fixed 20-turn ban/pick table (static data)
//! - **Rules**: pure eligibility functions over explicit state snapshots
//! - **Draft**: the turn-by-turn sequencer state machine
//! - **Series**: best-of-five controller with cross-game fearless memory
//!   and team-identity side mapping
//! - **Invariants**: first-class properties asserted in debug builds
//!
//! The crate is pure logic: no I/O, no async, no clock. Roster loading
//! and presentation live in the `fearless_draft` crate.
//!
//! # Example
//!
//! ```
//! use fearless_engine::{Champion, ChampionId, Role, SeriesController, Side};
//!
//! let mut series = SeriesController::new();
//! let aatrox = Champion {
//!     id: ChampionId(266),
//!     slug: "Aatrox".to_string(),
//!     name: "Aatrox".to_string(),
//!     roles: vec![Role::Top],
//!     image: String::new(),
//! };
//!
//! // Turn 0 is blue's first ban.
//! series.select(aatrox.clone()).unwrap();
//!
//! // Aatrox is now locked out for the rest of this game.
//! assert!(series.availability(aatrox.id).disabled);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod draft;
mod invariants;
mod order;
mod rules;
mod series;
mod types;

// Crate-level exports - domain types
pub use types::{Champion, ChampionId, Role, SLOTS_PER_SIDE, Side, SideState, TeamId};

// Crate-level exports - draft order table
pub use order::{DRAFT_LEN, DRAFT_ORDER, Turn, TurnAction, turn_at};

// Crate-level exports - eligibility rules
pub use rules::{Availability, DisabledReason, availability, fearless_pool};

// Crate-level exports - sequencer
pub use draft::{Draft, SelectError};

// Crate-level exports - series controller
pub use series::{
    GameRecord, MAX_GAMES, SeriesController, SeriesError, SideRecord, WINS_TO_TAKE_SERIES,
};

// Crate-level exports - invariants
pub use invariants::{
    CursorBoundInvariant, DraftInvariants, HistoryMatchesGameCountInvariant, Invariant,
    InvariantSet, InvariantViolation, OrderedHistoryInvariant, SeriesInvariants,
    SlotsMatchCursorInvariant,
};
