use super::*;
use crate::{Payout, Table, BLACKJACK};

/// Result of an unpaid hand against the dealer's final value.
pub fn settlement_for(player_value: u8, dealer_value: u8) -> Payout {
    let player_bust = player_value > BLACKJACK;
    let dealer_bust = dealer_value > BLACKJACK;
    if player_bust {
        Payout::Loss
    } else if dealer_bust || player_value > dealer_value {
        Payout::Win
    } else if player_value == dealer_value {
        Payout::Push
    } else {
        Payout::Loss
    }
}

impl Table {
    pub(super) fn settle_hands(&mut self, events: &mut EventBus) {
        let dealer_value = self.dealer.value();
        for player in &mut self.players {
            for hand_index in 0..player.hands().len() {
                let Some(hand) = player.hand(hand_index) else {
                    continue;
                };
                if !hand.playing {
                    continue;
                }
                let value = hand.highest_value();
                let payout = settlement_for(value, dealer_value);
                let Some(credited) = player.settle(hand_index, payout) else {
                    continue;
                };
                tracing::info!(
                    player = %player.name,
                    hand = hand_index,
                    ?payout,
                    value,
                    dealer = dealer_value,
                    credited,
                    "hand settled"
                );
                events.push(Event::HandSettled {
                    player: player.name.clone(),
                    hand: hand_index,
                    payout,
                    value,
                    credited,
                    cash: player.cash,
                });
            }
        }
    }
}
