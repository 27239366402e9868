//! Integration test driving a session the way a presentation layer
//! would: load roster, draft, report, swap sides, draft again.

use fearless_draft::{
    Champion, ChampionId, DisabledReason, DraftSession, Role, Roster, SelectError, SessionError,
    Side, TeamId, TurnAction,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

fn fixture_roster() -> Roster {
    let champions = (1..=60)
        .map(|id| Champion {
            id: ChampionId(id),
            slug: format!("Champ{id}"),
            name: format!("Champ {id}"),
            roles: vec![Role::Mid],
            image: String::new(),
        })
        .collect();
    Roster::new("15.3.1", champions)
}

/// Drives all 20 turns: every ban is the skip sentinel, every pick a
/// fresh id starting at `base`. Returns the picked ids.
fn draft_with_skip_bans(session: &mut DraftSession, base: i32) -> Vec<ChampionId> {
    let mut picked = Vec::new();
    let mut next = base;
    while let Some(turn) = session.current_turn() {
        match turn.action {
            TurnAction::Ban => session.select_by_id(ChampionId::SKIP).expect("skip ban"),
            TurnAction::Pick => {
                session.select_by_id(ChampionId(next)).expect("legal pick");
                picked.push(ChampionId(next));
                next += 1;
            }
        }
    }
    picked
}

#[test]
fn test_session_series_flow() {
    init_tracing();
    let mut session = DraftSession::with_roster(fixture_roster());

    assert_eq!(session.game_count(), 1);
    assert!(session.team1_is_blue());
    assert_eq!(session.champions().len(), 60);

    // Game 1.
    let picked = draft_with_skip_bans(&mut session, 1);
    assert_eq!(picked.len(), 10);
    assert!(session.current_turn().is_none());

    // Winner reported after a swap-prompt check, like the UI does.
    assert!(!session.would_complete(Side::Blue));
    session.report_winner(Side::Blue).expect("draft complete");
    assert_eq!(session.game_count(), 2);
    assert!(!session.is_series_complete());
    assert_eq!(session.history().len(), 1);
    assert_eq!(*session.history()[0].winning_team(), TeamId::Team1);

    // Teams choose to swap sides for game 2.
    session.set_team1_is_blue(false);
    assert!(!session.team1_is_blue());

    // Game 1 picks are gone for the rest of the series.
    let blocked = session.select_by_id(picked[0]);
    assert_eq!(
        blocked,
        Err(SessionError::Select(SelectError::Disabled(
            picked[0],
            DisabledReason::Fearless
        )))
    );

    // The skip sentinel never runs out.
    session.select_by_id(ChampionId::SKIP).expect("skip again");
}

#[test]
fn test_session_score_tracks_identities_across_swaps() {
    init_tracing();
    let mut session = DraftSession::with_roster(fixture_roster());

    // Game 1: team 1 on blue, blue wins.
    draft_with_skip_bans(&mut session, 1);
    session.report_winner(Side::Blue).unwrap();
    assert_eq!(session.score(), (1, 0));

    // Game 2: sides swapped, red is now team 1; red wins again.
    session.set_team1_is_blue(false);
    draft_with_skip_bans(&mut session, 11);
    session.report_winner(Side::Red).unwrap();
    assert_eq!(session.score(), (2, 0));

    // Game 3: swap back; blue win closes the series 3-0.
    session.set_team1_is_blue(true);
    draft_with_skip_bans(&mut session, 21);
    assert!(session.would_complete(Side::Blue));
    session.report_winner(Side::Blue).unwrap();
    assert!(session.is_series_complete());
    assert_eq!(session.score(), (3, 0));

    // Reset tears the series down but keeps the roster.
    session.reset_series();
    assert_eq!(session.game_count(), 1);
    assert!(session.history().is_empty());
    assert_eq!(session.champions().len(), 60);
}
