use crate::{Card, Hand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Cpu,
}

/// How a settled hand was paid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Payout {
    Blackjack,
    Win,
    Push,
    Loss,
}

impl Payout {
    /// Credit as a multiple of the wager; the wager itself was debited at bet time.
    pub fn multiplier(self) -> f64 {
        match self {
            Payout::Blackjack => 2.5,
            Payout::Win => 2.0,
            Payout::Push => 1.0,
            Payout::Loss => 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub cash: f64,
    pub kind: PlayerKind,
    hands: Vec<Hand>,
}

impl Player {
    pub fn new(name: impl Into<String>, cash: f64, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            cash,
            kind,
            hands: vec![Hand::new()],
        }
    }

    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }

    pub fn hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        self.hands.get_mut(index)
    }

    /// Opens hands up to `count`, keeping the first one.
    pub fn set_hands(&mut self, count: usize) {
        if count == 0 {
            if let Some(first) = self.hands.first_mut() {
                first.playing = false;
            }
            return;
        }
        for idx in 0..count {
            match self.hands.get_mut(idx) {
                Some(hand) => hand.playing = true,
                None => self.hands.push(Hand::new()),
            }
        }
        self.hands.truncate(count);
    }

    /// Drops hands from `count` onwards for this round.
    pub fn truncate_hands(&mut self, count: usize) {
        self.hands.truncate(count.max(1));
    }

    /// Moves `amount` from cash onto the hand's wager.
    pub fn place_bet(&mut self, hand_index: usize, amount: u32) -> bool {
        let Some(hand) = self.hands.get_mut(hand_index) else {
            return false;
        };
        hand.wager = amount;
        self.cash -= f64::from(amount);
        true
    }

    pub fn can_cover(&self, amount: u32) -> bool {
        self.cash >= f64::from(amount)
    }

    /// Matches the wager a second time. The caller deals the single card.
    pub fn double_down(&mut self, hand_index: usize) -> Option<u32> {
        let hand = self.hands.get(hand_index)?;
        let wager = hand.wager;
        if hand.len() != 2 || !hand.playing || hand.blackjack || !self.can_cover(wager) {
            return None;
        }
        self.cash -= f64::from(wager);
        let hand = self.hands.get_mut(hand_index)?;
        hand.wager = wager.saturating_mul(2);
        Some(hand.wager)
    }

    pub fn pay_blackjack(&mut self, hand_index: usize) -> Option<f64> {
        self.settle(hand_index, Payout::Blackjack)
    }

    pub fn pay_win(&mut self, hand_index: usize) -> Option<f64> {
        self.settle(hand_index, Payout::Win)
    }

    pub fn pay_push(&mut self, hand_index: usize) -> Option<f64> {
        self.settle(hand_index, Payout::Push)
    }

    /// Credits the hand once and closes it. A closed hand is left alone.
    pub fn settle(&mut self, hand_index: usize, payout: Payout) -> Option<f64> {
        let hand = self.hands.get_mut(hand_index)?;
        if !hand.playing {
            return None;
        }
        hand.playing = false;
        let credit = f64::from(hand.wager) * payout.multiplier();
        self.cash += credit;
        Some(credit)
    }

    /// Back to a single empty hand for the next round.
    pub fn reset_hands(&mut self) {
        self.hands.truncate(1);
        if let Some(first) = self.hands.first_mut() {
            first.reset();
        } else {
            self.hands.push(Hand::new());
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dealer {
    pub name: String,
    pub hand: Hand,
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}

impl Dealer {
    pub fn new() -> Self {
        Self {
            name: "Dealer".to_string(),
            hand: Hand::new(),
        }
    }

    /// First card dealt to the dealer, which is always face up.
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    pub fn reveal_hole_card(&mut self) -> Option<Card> {
        self.hand.reveal_hidden()
    }

    pub fn value(&self) -> u8 {
        self.hand.highest_value()
    }

    pub fn reset(&mut self) {
        self.hand = Hand::new();
    }
}
