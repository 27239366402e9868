//! The fixed 20-turn ban/pick order.
//!
//! Static data, no runtime mutation: 3 bans per side, 3 picks per side
//! (snake order on the first pick leg), 2 more bans per side, then 2
//! more picks per side.

use crate::types::Side;
use serde::{Deserialize, Serialize};

/// Whether a turn removes a champion from the pool or claims it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum TurnAction {
    /// Ban: the champion is removed for this game only.
    Ban,
    /// Pick: the champion joins the side's roster for this game.
    Pick,
}

/// One turn in the draft order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// Which side acts.
    pub side: Side,
    /// Ban or pick.
    pub action: TurnAction,
    /// Slot index (0-4) this turn fills on the acting side.
    pub slot: usize,
}

/// Total turns in one draft.
pub const DRAFT_LEN: usize = 20;

/// The canonical draft order.
///
/// Each (side, action, slot) triple appears exactly once.
pub static DRAFT_ORDER: [Turn; DRAFT_LEN] = [
    // Phase 1 bans (3 each)
    turn(Side::Blue, TurnAction::Ban, 0),
    turn(Side::Red, TurnAction::Ban, 0),
    turn(Side::Blue, TurnAction::Ban, 1),
    turn(Side::Red, TurnAction::Ban, 1),
    turn(Side::Blue, TurnAction::Ban, 2),
    turn(Side::Red, TurnAction::Ban, 2),
    // Phase 1 picks (snake: B R R B B R)
    turn(Side::Blue, TurnAction::Pick, 0),
    turn(Side::Red, TurnAction::Pick, 0),
    turn(Side::Red, TurnAction::Pick, 1),
    turn(Side::Blue, TurnAction::Pick, 1),
    turn(Side::Blue, TurnAction::Pick, 2),
    turn(Side::Red, TurnAction::Pick, 2),
    // Phase 2 bans (2 each, red first)
    turn(Side::Red, TurnAction::Ban, 3),
    turn(Side::Blue, TurnAction::Ban, 3),
    turn(Side::Red, TurnAction::Ban, 4),
    turn(Side::Blue, TurnAction::Ban, 4),
    // Phase 2 picks (R B B R)
    turn(Side::Red, TurnAction::Pick, 3),
    turn(Side::Blue, TurnAction::Pick, 3),
    turn(Side::Blue, TurnAction::Pick, 4),
    turn(Side::Red, TurnAction::Pick, 4),
];

const fn turn(side: Side, action: TurnAction, slot: usize) -> Turn {
    Turn { side, action, slot }
}

/// Returns the turn at `index`, or `None` once the draft is complete
/// (index >= 20).
pub fn turn_at(index: usize) -> Option<&'static Turn> {
    DRAFT_ORDER.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_has_twenty_turns() {
        assert_eq!(DRAFT_ORDER.len(), DRAFT_LEN);
        assert!(turn_at(0).is_some());
        assert!(turn_at(19).is_some());
        assert!(turn_at(20).is_none());
    }

    #[test]
    fn test_each_triple_appears_once() {
        for (i, a) in DRAFT_ORDER.iter().enumerate() {
            for b in DRAFT_ORDER.iter().skip(i + 1) {
                assert_ne!(a, b, "duplicate turn in draft order");
            }
        }
    }

    #[test]
    fn test_five_slots_per_side_per_action() {
        for side in [Side::Blue, Side::Red] {
            for action in [TurnAction::Ban, TurnAction::Pick] {
                let mut slots: Vec<_> = DRAFT_ORDER
                    .iter()
                    .filter(|t| t.side == side && t.action == action)
                    .map(|t| t.slot)
                    .collect();
                slots.sort();
                assert_eq!(slots, vec![0, 1, 2, 3, 4]);
            }
        }
    }

    #[test]
    fn test_opens_with_blue_ban_and_closes_with_red_pick() {
        assert_eq!(
            DRAFT_ORDER[0],
            Turn {
                side: Side::Blue,
                action: TurnAction::Ban,
                slot: 0
            }
        );
        assert_eq!(
            DRAFT_ORDER[19],
            Turn {
                side: Side::Red,
                action: TurnAction::Pick,
                slot: 4
            }
        );
    }
}
