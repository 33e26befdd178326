#![allow(dead_code)]

use blackjack_core::{
    BoundaryError, Card, Dealer, Deck, Event, EventBus, Player, PlayerAction, PlayerKind, Rank,
    RngState, Suit, Table, TableConfig, TableIo,
};
use std::collections::VecDeque;

/// Answers from queues; an empty queue reads as closed input.
#[derive(Debug, Default)]
pub struct ScriptedIo {
    pub names: VecDeque<String>,
    pub hand_counts: VecDeque<u8>,
    pub bets: VecDeque<u32>,
    pub actions: VecDeque<PlayerAction>,
    pub seen: Vec<Event>,
    pub questions: usize,
}

impl ScriptedIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hands(mut self, counts: &[u8]) -> Self {
        self.hand_counts.extend(counts.iter().copied());
        self
    }

    pub fn bets(mut self, bets: &[u32]) -> Self {
        self.bets.extend(bets.iter().copied());
        self
    }

    pub fn actions(mut self, actions: &[PlayerAction]) -> Self {
        self.actions.extend(actions.iter().copied());
        self
    }

    /// Everything observed so far plus what is still queued on the bus.
    pub fn all_events(&mut self, events: &mut EventBus) -> Vec<Event> {
        self.seen.extend(events.drain());
        self.seen.clone()
    }
}

impl TableIo for ScriptedIo {
    fn ask_player_name(&mut self, _index: usize) -> Result<String, BoundaryError> {
        self.questions += 1;
        self.names.pop_front().ok_or(BoundaryError::Closed)
    }

    fn ask_hand_count(&mut self, _player: &Player, _max_hands: u8) -> Result<u8, BoundaryError> {
        self.questions += 1;
        self.hand_counts.pop_front().ok_or(BoundaryError::Closed)
    }

    fn ask_bet(
        &mut self,
        _player: &Player,
        _hand_index: usize,
        _stake: u32,
    ) -> Result<u32, BoundaryError> {
        self.questions += 1;
        self.bets.pop_front().ok_or(BoundaryError::Closed)
    }

    fn ask_action(
        &mut self,
        _player: &Player,
        _hand_index: usize,
        _dealer: &Dealer,
    ) -> Result<PlayerAction, BoundaryError> {
        self.questions += 1;
        self.actions.pop_front().ok_or(BoundaryError::Closed)
    }

    fn observe(&mut self, events: &mut EventBus) {
        self.seen.extend(events.drain());
    }
}

pub fn card(rank: Rank) -> Card {
    Card::new(Suit::Hearts, rank)
}

pub fn cards(ranks: &[Rank]) -> Vec<Card> {
    ranks.iter().map(|rank| card(*rank)).collect()
}

/// A table dealing `ranks` in order with one human seat named "Ann".
pub fn stacked_table(stake: u32, ranks: &[Rank]) -> (Table, EventBus) {
    let config = TableConfig::with_stake(stake);
    let deck = Deck::stacked(cards(ranks));
    let mut table = Table::with_deck(config, deck, RngState::from_seed(0)).expect("table");
    let mut events = EventBus::default();
    table.add_player("Ann", PlayerKind::Human, &mut events);
    (table, events)
}

pub fn settled(events: &[Event]) -> Vec<(String, usize, f64)> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::HandSettled {
                player,
                hand,
                credited,
                ..
            } => Some((player.clone(), *hand, *credited)),
            _ => None,
        })
        .collect()
}
