use crate::{BoundaryError, DeckError, Event, EventBus, RoundPhase, Table, TableIo};
use thiserror::Error;

mod betting;
mod deal;
mod dealer;
mod settle;
mod turns;

pub use settle::settlement_for;

#[derive(Debug, Error)]
pub enum RoundError {
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),
    #[error("decision source failed: {0}")]
    Boundary(#[from] BoundaryError),
    #[error("invalid phase: {0:?}")]
    InvalidPhase(RoundPhase),
    #[error("dealer has no hole card to reveal")]
    NoDealerCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Continue,
    SessionOver,
}

impl Table {
    /// Runs the current phase and moves to the next one.
    pub fn step(
        &mut self,
        io: &mut dyn TableIo,
        events: &mut EventBus,
    ) -> Result<RoundOutcome, RoundError> {
        if self.finished {
            return Ok(RoundOutcome::SessionOver);
        }
        let phase = self.phase;
        tracing::debug!(round = self.round, ?phase, "entering phase");
        events.push(Event::PhaseEntered {
            round: self.round,
            phase,
        });
        match phase {
            RoundPhase::Betting => {
                if !self.collect_bets(io, events)? {
                    self.finished = true;
                    tracing::info!(
                        rounds = self.rounds_played(),
                        "no active humans, session over"
                    );
                    events.push(Event::SessionEnded {
                        rounds: self.rounds_played(),
                    });
                    return Ok(RoundOutcome::SessionOver);
                }
            }
            RoundPhase::Deal => self.initial_deal(events)?,
            RoundPhase::PlayerTurns => self.player_turns(io, events)?,
            RoundPhase::DealerReveal => self.dealer_reveal(events)?,
            RoundPhase::DealerPlay => self.dealer_play(events)?,
            RoundPhase::Settle => self.settle_hands(events),
            RoundPhase::Reset => self.reset_round(events),
        }
        self.phase = phase.next();
        Ok(RoundOutcome::Continue)
    }

    /// Plays betting through reset. Must start from `Betting`.
    pub fn play_round(
        &mut self,
        io: &mut dyn TableIo,
        events: &mut EventBus,
    ) -> Result<RoundOutcome, RoundError> {
        if self.phase != RoundPhase::Betting {
            return Err(RoundError::InvalidPhase(self.phase));
        }
        loop {
            if self.step(io, events)? == RoundOutcome::SessionOver {
                return Ok(RoundOutcome::SessionOver);
            }
            if self.phase == RoundPhase::Betting {
                return Ok(RoundOutcome::Continue);
            }
        }
    }

    /// Plays rounds until every human has left. Returns the number of
    /// completed rounds.
    pub fn run_session(
        &mut self,
        io: &mut dyn TableIo,
        events: &mut EventBus,
    ) -> Result<u32, RoundError> {
        loop {
            let outcome = self.step(io, events);
            io.observe(events);
            if outcome? == RoundOutcome::SessionOver {
                return Ok(self.rounds_played());
            }
        }
    }

    fn reset_round(&mut self, events: &mut EventBus) {
        for player in &mut self.players {
            player.reset_hands();
        }
        self.dealer.reset();
        events.push(Event::RoundFinished { round: self.round });
        self.round = self.round.saturating_add(1);
    }
}
