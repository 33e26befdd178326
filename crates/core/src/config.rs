use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stakes offered when a table is opened.
pub const STAKE_CHOICES: [u32; 4] = [15, 50, 100, 500];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("stake must be positive")]
    ZeroStake,
    #[error("the shoe needs at least one pack")]
    NoPacks,
    #[error("players must be allowed at least one hand")]
    NoHands,
    #[error("percentage out of range: {0}")]
    Percent(u8),
    #[error("dealer must stand on a value between 2 and 21, got {0}")]
    DealerStand(u8),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableConfig {
    pub stake: u32,
    pub packs: u8,
    /// Starting cash as a multiple of the stake.
    pub starting_cash_multiplier: u32,
    pub max_hands: u8,
    /// Chance a CPU bets twice the stake instead of once.
    pub cpu_double_bet_percent: u8,
    pub dealer_stands_on: u8,
    /// Hold back instant natural payouts while the dealer shows ten or ace.
    #[serde(default = "default_withhold")]
    pub withhold_on_dealer_ace_or_ten: bool,
}

fn default_withhold() -> bool {
    true
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            stake: STAKE_CHOICES[0],
            packs: 2,
            starting_cash_multiplier: 15,
            max_hands: 2,
            cpu_double_bet_percent: 15,
            dealer_stands_on: 17,
            withhold_on_dealer_ace_or_ten: true,
        }
    }
}

impl TableConfig {
    pub fn with_stake(stake: u32) -> Self {
        Self {
            stake,
            ..Self::default()
        }
    }

    pub fn starting_cash(&self) -> f64 {
        f64::from(self.stake) * f64::from(self.starting_cash_multiplier)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stake == 0 {
            return Err(ConfigError::ZeroStake);
        }
        if self.packs == 0 {
            return Err(ConfigError::NoPacks);
        }
        if self.max_hands == 0 {
            return Err(ConfigError::NoHands);
        }
        if self.cpu_double_bet_percent > 100 {
            return Err(ConfigError::Percent(self.cpu_double_bet_percent));
        }
        if !(2..=21).contains(&self.dealer_stands_on) {
            return Err(ConfigError::DealerStand(self.dealer_stands_on));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = TableConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.starting_cash(), 225.0);
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = TableConfig::with_stake(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroStake));
        config.stake = 50;
        config.packs = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoPacks));
        config.packs = 6;
        config.cpu_double_bet_percent = 120;
        assert_eq!(config.validate(), Err(ConfigError::Percent(120)));
        config.cpu_double_bet_percent = 15;
        config.dealer_stands_on = 30;
        assert_eq!(config.validate(), Err(ConfigError::DealerStand(30)));
    }
}
