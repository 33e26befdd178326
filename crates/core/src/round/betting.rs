use super::*;
use crate::{Rejection, Table};

impl Table {
    /// Collects hand counts and wagers. Returns false when no human is
    /// left to play, in which case nothing is debited.
    pub(super) fn collect_bets(
        &mut self,
        io: &mut dyn TableIo,
        events: &mut EventBus,
    ) -> Result<bool, RoundError> {
        let stake = self.config.stake;
        let mut leaving = Vec::new();
        let mut active_humans = 0usize;

        for idx in 0..self.players.len() {
            if !self.players[idx].is_human() {
                continue;
            }
            if !self.players[idx].can_cover(stake) {
                let player = &self.players[idx];
                events.push(Event::PlayerBroke {
                    name: player.name.clone(),
                    cash: player.cash,
                });
                leaving.push(idx);
                continue;
            }
            let count = self.ask_hand_count(io, idx, events)?;
            if count == 0 {
                leaving.push(idx);
                continue;
            }
            active_humans += 1;
            self.players[idx].set_hands(count as usize);
            for hand_index in 0..count as usize {
                if !self.players[idx].can_cover(stake) {
                    self.players[idx].truncate_hands(hand_index);
                    break;
                }
                let amount = self.ask_bet(io, idx, hand_index, events)?;
                self.record_bet(idx, hand_index, amount, events);
            }
        }

        for idx in leaving.into_iter().rev() {
            if let Some(player) = self.remove_player(idx) {
                events.push(Event::PlayerLeft {
                    name: player.name,
                    cash: player.cash,
                });
            }
        }

        if active_humans == 0 {
            return Ok(false);
        }

        for idx in 0..self.players.len() {
            if self.players[idx].is_human() {
                continue;
            }
            let amount = if self.rng.percent(self.config.cpu_double_bet_percent) {
                stake.saturating_mul(2)
            } else {
                stake
            };
            self.players[idx].set_hands(1);
            self.record_bet(idx, 0, amount, events);
        }
        Ok(true)
    }

    fn record_bet(&mut self, idx: usize, hand_index: usize, amount: u32, events: &mut EventBus) {
        let player = &mut self.players[idx];
        if !player.place_bet(hand_index, amount) {
            return;
        }
        tracing::debug!(player = %player.name, hand = hand_index, amount, "bet placed");
        events.push(Event::BetPlaced {
            player: player.name.clone(),
            hand: hand_index,
            amount,
            cash: player.cash,
        });
    }

    fn ask_hand_count(
        &mut self,
        io: &mut dyn TableIo,
        idx: usize,
        events: &mut EventBus,
    ) -> Result<u8, RoundError> {
        let max = self.config.max_hands;
        loop {
            io.observe(events);
            let count = io.ask_hand_count(&self.players[idx], max)?;
            if count <= max {
                return Ok(count);
            }
            self.reject(idx, Rejection::TooManyHands, events);
        }
    }

    fn ask_bet(
        &mut self,
        io: &mut dyn TableIo,
        idx: usize,
        hand_index: usize,
        events: &mut EventBus,
    ) -> Result<u32, RoundError> {
        let stake = self.config.stake;
        loop {
            io.observe(events);
            let amount = io.ask_bet(&self.players[idx], hand_index, stake)?;
            match check_bet(amount, stake, self.players[idx].cash) {
                Ok(()) => return Ok(amount),
                Err(reason) => self.reject(idx, reason, events),
            }
        }
    }

    pub(super) fn reject(&self, idx: usize, reason: Rejection, events: &mut EventBus) {
        let name = self.players[idx].name.clone();
        tracing::warn!(player = %name, ?reason, "input rejected");
        events.push(Event::InputRejected {
            player: name,
            reason,
        });
    }
}

fn check_bet(amount: u32, stake: u32, cash: f64) -> Result<(), Rejection> {
    if amount == 0 {
        return Err(Rejection::NotPositive);
    }
    if amount % stake != 0 {
        return Err(Rejection::NotStakeMultiple);
    }
    if f64::from(amount) > cash {
        return Err(Rejection::InsufficientCash);
    }
    Ok(())
}
