use crate::{Card, Payout, RoundPhase};
use serde::{Deserialize, Serialize};

/// Why the table refused an answer from the decision source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Rejection {
    NotStakeMultiple,
    NotPositive,
    InsufficientCash,
    TooManyHands,
    DoubleNotAllowed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    PlayerSeated {
        name: String,
        cash: f64,
        human: bool,
    },
    PlayerLeft {
        name: String,
        cash: f64,
    },
    PlayerBroke {
        name: String,
        cash: f64,
    },
    PhaseEntered {
        round: u32,
        phase: RoundPhase,
    },
    InputRejected {
        player: String,
        reason: Rejection,
    },
    BetPlaced {
        player: String,
        hand: usize,
        amount: u32,
        cash: f64,
    },
    CardDealt {
        player: String,
        hand: usize,
        /// `None` while the card is face down.
        card: Option<Card>,
    },
    DealerCardDealt {
        card: Option<Card>,
    },
    NaturalBlackjack {
        player: String,
        hand: usize,
        paid: bool,
    },
    Hit {
        player: String,
        hand: usize,
        card: Card,
        value: u8,
    },
    Stood {
        player: String,
        hand: usize,
        value: u8,
    },
    DoubledDown {
        player: String,
        hand: usize,
        wager: u32,
        card: Card,
        value: u8,
    },
    Busted {
        player: String,
        hand: usize,
        value: u8,
    },
    DealerRevealed {
        card: Card,
        value: u8,
    },
    DealerHits {
        card: Card,
        value: u8,
    },
    DealerStands {
        value: u8,
    },
    DealerBusts {
        value: u8,
    },
    HandSettled {
        player: String,
        hand: usize,
        payout: Payout,
        value: u8,
        credited: f64,
        cash: f64,
    },
    RoundFinished {
        round: u32,
    },
    SessionEnded {
        rounds: u32,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
