use crate::{
    BoundaryError, ConfigError, Dealer, Deck, Event, EventBus, Player, PlayerKind, RngState,
    RoundPhase, TableConfig, TableIo,
};

const CPU_NAMES: [&str; 12] = [
    "Ada", "Bram", "Cleo", "Dmitri", "Esme", "Farid", "Greta", "Hugo", "Ines", "Jonas", "Kaya",
    "Luca",
];

/// Session state that outlives a single round: roster, shoe, dealer and
/// where the round engine currently stands.
#[derive(Debug)]
pub struct Table {
    pub config: TableConfig,
    pub rng: RngState,
    pub deck: Deck,
    pub dealer: Dealer,
    pub(crate) players: Vec<Player>,
    pub(crate) phase: RoundPhase,
    pub(crate) round: u32,
    pub(crate) finished: bool,
}

impl Table {
    pub fn new(config: TableConfig, seed: u64) -> Result<Self, ConfigError> {
        let deck = Deck::new(config.packs);
        Self::with_deck(config, deck, RngState::from_seed(seed))
    }

    pub fn with_deck(config: TableConfig, deck: Deck, rng: RngState) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            deck,
            dealer: Dealer::new(),
            players: Vec::new(),
            phase: RoundPhase::Betting,
            round: 1,
            finished: false,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The round in progress, counting from 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn rounds_played(&self) -> u32 {
        self.round - 1
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn human_count(&self) -> usize {
        self.players.iter().filter(|player| player.is_human()).count()
    }

    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        kind: PlayerKind,
        events: &mut EventBus,
    ) -> &Player {
        let player = Player::new(name, self.config.starting_cash(), kind);
        tracing::info!(name = %player.name, ?kind, cash = player.cash, "player seated");
        events.push(Event::PlayerSeated {
            name: player.name.clone(),
            cash: player.cash,
            human: kind == PlayerKind::Human,
        });
        self.players.push(player);
        &self.players[self.players.len() - 1]
    }

    pub fn remove_player(&mut self, index: usize) -> Option<Player> {
        if index >= self.players.len() {
            return None;
        }
        let player = self.players.remove(index);
        tracing::info!(name = %player.name, cash = player.cash, "player removed");
        Some(player)
    }

    /// Seats named humans first, then CPUs with roster names.
    pub fn seat_players(
        &mut self,
        humans: usize,
        cpus: usize,
        io: &mut dyn TableIo,
        events: &mut EventBus,
    ) -> Result<(), BoundaryError> {
        for idx in 0..humans {
            io.observe(events);
            let name = io.ask_player_name(idx)?;
            let name = match name.trim() {
                "" => format!("Player {}", idx + 1),
                trimmed => trimmed.to_string(),
            };
            self.add_player(name, PlayerKind::Human, events);
        }
        for _ in 0..cpus {
            let name = self.pick_cpu_name();
            self.add_player(name, PlayerKind::Cpu, events);
        }
        Ok(())
    }

    fn pick_cpu_name(&mut self) -> String {
        let free: Vec<&str> = CPU_NAMES
            .iter()
            .copied()
            .filter(|name| !self.players.iter().any(|player| player.name == *name))
            .collect();
        if free.is_empty() {
            return format!("Cpu {}", self.players.len() + 1);
        }
        free[self.rng.index(free.len())].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_starts_betting() {
        let table = Table::new(TableConfig::default(), 3).expect("table");
        assert_eq!(table.phase(), RoundPhase::Betting);
        assert_eq!(table.round(), 1);
        assert_eq!(table.deck.remaining(), 104);
        assert!(table.players().is_empty());
    }

    #[test]
    fn invalid_config_is_refused() {
        let config = TableConfig::with_stake(0);
        assert!(matches!(Table::new(config, 1), Err(ConfigError::ZeroStake)));
    }

    #[test]
    fn cpu_names_do_not_repeat() {
        let mut table = Table::new(TableConfig::default(), 11).expect("table");
        let mut events = EventBus::default();
        for _ in 0..CPU_NAMES.len() {
            let name = table.pick_cpu_name();
            table.add_player(name, PlayerKind::Cpu, &mut events);
        }
        let mut names: Vec<&str> = table.players().iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CPU_NAMES.len());
        assert_eq!(events.len(), CPU_NAMES.len());
    }

    #[test]
    fn players_start_with_stake_multiple() {
        let mut table = Table::new(TableConfig::with_stake(50), 2).expect("table");
        let mut events = EventBus::default();
        let cash = table.add_player("Nia", PlayerKind::Human, &mut events).cash;
        assert_eq!(cash, 750.0);
        assert_eq!(table.human_count(), 1);
        assert!(table.remove_player(0).is_some());
        assert!(table.remove_player(0).is_none());
    }
}
