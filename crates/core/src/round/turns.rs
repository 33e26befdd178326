use super::*;
use crate::{PlayerAction, Rejection, Table};

impl Table {
    pub(super) fn player_turns(
        &mut self,
        io: &mut dyn TableIo,
        events: &mut EventBus,
    ) -> Result<(), RoundError> {
        for idx in 0..self.players.len() {
            for hand_index in 0..self.players[idx].hands().len() {
                self.play_hand(io, idx, hand_index, events)?;
            }
        }
        Ok(())
    }

    /// Offers actions on one hand until it stands or busts. Naturals and
    /// settled hands are skipped; CPUs always stand.
    fn play_hand(
        &mut self,
        io: &mut dyn TableIo,
        idx: usize,
        hand_index: usize,
        events: &mut EventBus,
    ) -> Result<(), RoundError> {
        loop {
            let player = &self.players[idx];
            let Some(hand) = player.hand(hand_index) else {
                return Ok(());
            };
            if hand.blackjack || !hand.playing {
                return Ok(());
            }
            let action = if player.is_human() {
                io.observe(events);
                io.ask_action(player, hand_index, &self.dealer)?
            } else {
                PlayerAction::Stand
            };

            match action {
                PlayerAction::Hit => {
                    let card = self.deck.draw(&mut self.rng)?;
                    let value = self.add_to_hand(idx, hand_index, card);
                    events.push(Event::Hit {
                        player: self.players[idx].name.clone(),
                        hand: hand_index,
                        card,
                        value,
                    });
                    if value > crate::BLACKJACK {
                        self.announce_bust(idx, hand_index, value, events);
                        return Ok(());
                    }
                }
                PlayerAction::Stand => {
                    let player = &self.players[idx];
                    let value = player.hand(hand_index).map_or(0, |hand| hand.highest_value());
                    events.push(Event::Stood {
                        player: player.name.clone(),
                        hand: hand_index,
                        value,
                    });
                    return Ok(());
                }
                PlayerAction::DoubleDown => {
                    let Some(wager) = self.players[idx].double_down(hand_index) else {
                        self.reject(idx, Rejection::DoubleNotAllowed, events);
                        continue;
                    };
                    let card = self.deck.draw(&mut self.rng)?;
                    let value = self.add_to_hand(idx, hand_index, card);
                    events.push(Event::DoubledDown {
                        player: self.players[idx].name.clone(),
                        hand: hand_index,
                        wager,
                        card,
                        value,
                    });
                    if value > crate::BLACKJACK {
                        self.announce_bust(idx, hand_index, value, events);
                    }
                    return Ok(());
                }
            }
        }
    }

    fn add_to_hand(&mut self, idx: usize, hand_index: usize, card: crate::Card) -> u8 {
        match self.players[idx].hand_mut(hand_index) {
            Some(hand) => {
                hand.add_card(card);
                hand.highest_value()
            }
            None => 0,
        }
    }

    fn announce_bust(&self, idx: usize, hand_index: usize, value: u8, events: &mut EventBus) {
        let name = self.players[idx].name.clone();
        tracing::debug!(player = %name, hand = hand_index, value, "hand bust");
        events.push(Event::Busted {
            player: name,
            hand: hand_index,
            value,
        });
    }
}
