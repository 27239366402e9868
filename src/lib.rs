//! Fearless draft library - best-of-five champion select with
//! cross-game pick memory.
//!
//! # Architecture
//!
//! - **Engine** (`fearless_engine` crate): the pure draft sequencer,
//!   eligibility rules, and series controller
//! - **Catalog**: Data Dragon roster client (the only async boundary)
//! - **Roles**: static class-tag heuristics for position filtering
//! - **Session**: the stateful facade a presentation layer drives
//!
//! # Example
//!
//! ```no_run
//! use fearless_draft::{CatalogClient, CatalogConfig, ChampionId, DraftSession};
//!
//! # async fn example() {
//! let client = CatalogClient::new(CatalogConfig::default());
//! let mut session = DraftSession::new();
//! session.load_roster(&client).await;
//!
//! // Blue opens the draft by skipping its first ban.
//! session.select_by_id(ChampionId::SKIP).unwrap();
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod catalog;
mod config;
mod roles;
mod session;

// Crate-level exports - catalog client
pub use catalog::{CatalogClient, CatalogError, Roster};

// Crate-level exports - configuration
pub use config::{CatalogConfig, ConfigError};

// Crate-level exports - session management
pub use session::{DraftSession, RosterState, SessionError};

// Crate-level exports - engine types used at the API surface
pub use fearless_engine::{
    Availability, Champion, ChampionId, DisabledReason, Draft, GameRecord, Role, SelectError,
    SeriesController, SeriesError, Side, SideState, TeamId, Turn, TurnAction,
};
