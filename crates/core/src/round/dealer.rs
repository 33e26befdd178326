use super::*;
use crate::{Table, BLACKJACK};

impl Table {
    /// Turns the hole card. Held naturals are paid unless the dealer also
    /// shows 21.
    pub(super) fn dealer_reveal(&mut self, events: &mut EventBus) -> Result<(), RoundError> {
        let card = self
            .dealer
            .reveal_hole_card()
            .ok_or(RoundError::NoDealerCard)?;
        let value = self.dealer.value();
        events.push(Event::DealerRevealed { card, value });
        if value != BLACKJACK {
            self.pay_held_naturals(events);
        }
        Ok(())
    }

    fn pay_held_naturals(&mut self, events: &mut EventBus) {
        for idx in 0..self.players.len() {
            for hand_index in 0..self.players[idx].hands().len() {
                let held = self.players[idx]
                    .hand(hand_index)
                    .is_some_and(|hand| hand.blackjack && hand.playing);
                if held {
                    self.pay_natural(idx, hand_index, events);
                }
            }
        }
    }

    /// Draws while under the stand value; a bust ends the loop too.
    pub(super) fn dealer_play(&mut self, events: &mut EventBus) -> Result<(), RoundError> {
        let stands_on = self.config.dealer_stands_on;
        while self.dealer.value() < stands_on {
            let card = self.deck.draw(&mut self.rng)?;
            self.dealer.hand.add_card(card);
            events.push(Event::DealerHits {
                card,
                value: self.dealer.value(),
            });
        }
        let value = self.dealer.value();
        if value > BLACKJACK {
            tracing::debug!(value, "dealer busts");
            events.push(Event::DealerBusts { value });
        } else {
            tracing::debug!(value, "dealer stands");
            events.push(Event::DealerStands { value });
        }
        Ok(())
    }
}
