use super::*;
use crate::{Payout, Table};

impl Table {
    /// Two passes over every hand in seat order, each pass ending with one
    /// card to the dealer. The dealer's second card goes face down.
    pub(super) fn initial_deal(&mut self, events: &mut EventBus) -> Result<(), RoundError> {
        for pass in 0..2 {
            for idx in 0..self.players.len() {
                for hand_index in 0..self.players[idx].hands().len() {
                    let card = self.deck.draw(&mut self.rng)?;
                    let player = &mut self.players[idx];
                    let Some(hand) = player.hand_mut(hand_index) else {
                        continue;
                    };
                    hand.add_card(card);
                    let natural = hand.is_natural();
                    events.push(Event::CardDealt {
                        player: player.name.clone(),
                        hand: hand_index,
                        card: Some(card),
                    });
                    if natural {
                        self.resolve_natural(idx, hand_index, events);
                    }
                }
            }
            let mut card = self.deck.draw(&mut self.rng)?;
            card.hidden = pass == 1;
            self.dealer.hand.add_card(card);
            events.push(Event::DealerCardDealt {
                card: (!card.hidden).then_some(card),
            });
        }
        Ok(())
    }

    /// Flags a two-card 21 and pays it at once unless the dealer's up card
    /// could still make a dealer blackjack.
    fn resolve_natural(&mut self, idx: usize, hand_index: usize, events: &mut EventBus) {
        let withhold = self.config.withhold_on_dealer_ace_or_ten
            && self
                .dealer
                .up_card()
                .is_some_and(|card| card.is_ten_or_ace());
        let player = &mut self.players[idx];
        let Some(hand) = player.hand_mut(hand_index) else {
            return;
        };
        hand.blackjack = true;
        events.push(Event::NaturalBlackjack {
            player: player.name.clone(),
            hand: hand_index,
            paid: !withhold,
        });
        if withhold {
            tracing::debug!(player = %player.name, hand = hand_index, "natural held until reveal");
            return;
        }
        self.pay_natural(idx, hand_index, events);
    }

    pub(super) fn pay_natural(&mut self, idx: usize, hand_index: usize, events: &mut EventBus) {
        let player = &mut self.players[idx];
        let Some(credited) = player.pay_blackjack(hand_index) else {
            return;
        };
        tracing::info!(player = %player.name, hand = hand_index, credited, "blackjack paid");
        events.push(Event::HandSettled {
            player: player.name.clone(),
            hand: hand_index,
            payout: Payout::Blackjack,
            value: crate::BLACKJACK,
            credited,
            cash: player.cash,
        });
    }
}
