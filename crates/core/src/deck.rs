use crate::{Card, Rank, RngState, Suit};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("the deck is empty")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOrder {
    /// Any remaining card, uniformly.
    Random,
    /// Front to back. Used to stack a deck for replays and tests.
    Top,
}

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    order: DrawOrder,
}

impl Deck {
    pub fn standard52() -> Self {
        Self::new(1)
    }

    /// A pool of `packs` standard 52-card packs.
    pub fn new(packs: u8) -> Self {
        let mut cards = Vec::with_capacity(packs as usize * 52);
        for _ in 0..packs {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }
        Self {
            cards,
            order: DrawOrder::Random,
        }
    }

    pub fn stacked(cards: Vec<Card>) -> Self {
        Self {
            cards,
            order: DrawOrder::Top,
        }
    }

    pub fn order(&self) -> DrawOrder {
        self.order
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn draw(&mut self, rng: &mut RngState) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        let card = match self.order {
            DrawOrder::Random => {
                let idx = rng.index(self.cards.len());
                self.cards.swap_remove(idx)
            }
            DrawOrder::Top => self.cards.remove(0),
        };
        tracing::debug!(
            rank = card.rank.label(),
            suit = card.suit.id(),
            left = self.cards.len(),
            "card drawn"
        );
        Ok(card)
    }
}
