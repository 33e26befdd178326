use crate::{Dealer, EventBus, Player};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerAction {
    Hit,
    Stand,
    DoubleDown,
}

impl PlayerAction {
    pub const ALL: [PlayerAction; 3] = [
        PlayerAction::Hit,
        PlayerAction::Stand,
        PlayerAction::DoubleDown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlayerAction::Hit => "hit",
            PlayerAction::Stand => "stand",
            PlayerAction::DoubleDown => "double down",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundaryError {
    #[error("input closed")]
    Closed,
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for BoundaryError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

/// Everything the table needs to hear from outside. The round engine
/// calls these only from the betting and player-turn phases.
///
/// Implementations are expected to re-prompt on malformed input; the
/// engine still checks the answers it gets and asks again when a bet or
/// hand count breaks the table rules.
pub trait TableIo {
    /// A non-empty display name for the `index`th human seat.
    fn ask_player_name(&mut self, index: usize) -> Result<String, BoundaryError>;

    /// How many hands to play this round. 0 leaves the table.
    fn ask_hand_count(&mut self, player: &Player, max_hands: u8) -> Result<u8, BoundaryError>;

    /// Wager for one hand, a positive multiple of `stake`.
    fn ask_bet(
        &mut self,
        player: &Player,
        hand_index: usize,
        stake: u32,
    ) -> Result<u32, BoundaryError>;

    fn ask_action(
        &mut self,
        player: &Player,
        hand_index: usize,
        dealer: &Dealer,
    ) -> Result<PlayerAction, BoundaryError>;

    /// Called before every question and after every phase so a front end
    /// can render what happened so far.
    fn observe(&mut self, _events: &mut EventBus) {}
}
