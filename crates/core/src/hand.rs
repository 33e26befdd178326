use crate::Card;
use serde::{Deserialize, Serialize};

pub const BLACKJACK: u8 = 21;

/// Legal point totals for the visible cards, ascending.
///
/// Cards with fewer possible values are folded in first, so aces only
/// branch totals that are already fixed. Totals over 21 are dropped; if
/// one total is exactly 21 the set collapses to `[21]`. When every total
/// is over 21 the result is the single forced total (all aces low), which
/// keeps bust detection working on an otherwise empty set. No visible
/// cards gives an empty set.
pub fn hand_totals(cards: &[Card]) -> Vec<u8> {
    let mut visible: Vec<&'static [u8]> = cards
        .iter()
        .filter(|card| !card.hidden)
        .map(|card| card.values())
        .collect();
    if visible.is_empty() {
        return Vec::new();
    }
    visible.sort_by_key(|values| values.len());

    let forced: u32 = visible
        .iter()
        .map(|values| values.iter().copied().min().unwrap_or(0) as u32)
        .sum();

    let mut totals: Vec<u8> = vec![0];
    for values in &visible {
        let mut next = Vec::with_capacity(totals.len() * values.len());
        for total in &totals {
            for value in values.iter() {
                let candidate = total.saturating_add(*value);
                if candidate <= BLACKJACK && !next.contains(&candidate) {
                    next.push(candidate);
                }
            }
        }
        totals = next;
        if totals.is_empty() {
            break;
        }
    }

    if totals.is_empty() {
        return vec![u8::try_from(forced).unwrap_or(u8::MAX)];
    }
    if totals.contains(&BLACKJACK) {
        return vec![BLACKJACK];
    }
    totals.sort_unstable();
    totals
}

/// Cards held against one wager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    totals: Vec<u8>,
    pub wager: u32,
    /// Still waiting to be settled this round.
    pub playing: bool,
    /// Two-card 21.
    pub blackjack: bool,
    #[serde(default)]
    history: Vec<Vec<Card>>,
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            totals: Vec::new(),
            wager: 0,
            playing: true,
            blackjack: false,
            history: Vec::new(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().filter(|card| !card.hidden)
    }

    pub fn totals(&self) -> &[u8] {
        &self.totals
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.totals = hand_totals(&self.cards);
    }

    /// Turns the first face-down card up and returns it.
    pub fn reveal_hidden(&mut self) -> Option<Card> {
        let card = self.cards.iter_mut().find(|card| card.hidden)?;
        card.hidden = false;
        let revealed = *card;
        self.totals = hand_totals(&self.cards);
        Some(revealed)
    }

    /// Best total, or 0 with nothing visible.
    pub fn highest_value(&self) -> u8 {
        self.totals.iter().copied().max().unwrap_or(0)
    }

    pub fn is_bust(&self) -> bool {
        self.highest_value() > BLACKJACK
    }

    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.highest_value() == BLACKJACK
    }

    /// At least one ace is still counted high.
    pub fn is_soft(&self) -> bool {
        let hard: u32 = self
            .visible_cards()
            .map(|card| card.values()[0] as u32)
            .sum();
        !self.is_bust() && u32::from(self.highest_value()) > hard
    }

    /// Earlier rounds' cards, oldest first.
    pub fn history(&self) -> &[Vec<Card>] {
        &self.history
    }

    pub fn reset(&mut self) {
        if !self.cards.is_empty() {
            self.history.push(std::mem::take(&mut self.cards));
        }
        self.totals.clear();
        self.wager = 0;
        self.playing = true;
        self.blackjack = false;
    }
}
