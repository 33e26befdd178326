use serde::{Deserialize, Serialize};

/// Where the table is inside a round. Rounds walk these in order and
/// wrap from `Reset` back to `Betting`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waits on the decision source for hand counts and bets.
    Betting,
    Deal,
    /// Waits on the decision source for hit, stand or double down.
    PlayerTurns,
    DealerReveal,
    DealerPlay,
    Settle,
    Reset,
}

impl RoundPhase {
    pub const ALL: [RoundPhase; 7] = [
        RoundPhase::Betting,
        RoundPhase::Deal,
        RoundPhase::PlayerTurns,
        RoundPhase::DealerReveal,
        RoundPhase::DealerPlay,
        RoundPhase::Settle,
        RoundPhase::Reset,
    ];

    pub fn next(self) -> RoundPhase {
        match self {
            RoundPhase::Betting => RoundPhase::Deal,
            RoundPhase::Deal => RoundPhase::PlayerTurns,
            RoundPhase::PlayerTurns => RoundPhase::DealerReveal,
            RoundPhase::DealerReveal => RoundPhase::DealerPlay,
            RoundPhase::DealerPlay => RoundPhase::Settle,
            RoundPhase::Settle => RoundPhase::Reset,
            RoundPhase::Reset => RoundPhase::Betting,
        }
    }

    /// Phases that block on an outside decision.
    pub fn awaits_decisions(self) -> bool {
        matches!(self, RoundPhase::Betting | RoundPhase::PlayerTurns)
    }
}
