//! Application configuration

use std::env;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Health of a freshly created character
    pub starting_health: i64,
    /// Power of a freshly created character
    pub starting_power: i64,
    /// Money balance of a freshly created character
    pub starting_money: u64,
    /// Fixed reward credited per earn action
    pub earn_reward: u64,
    /// Percentage of the catalog price paid out when selling (integer floor)
    pub sell_rate_percent: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            starting_health: 500,
            starting_power: 100,
            starting_money: 10_000,
            earn_reward: 100,
            sell_rate_percent: 60,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            starting_health: read_var("STARTING_HEALTH", defaults.starting_health)?,
            starting_power: read_var("STARTING_POWER", defaults.starting_power)?,
            starting_money: read_var("STARTING_MONEY", defaults.starting_money)?,
            earn_reward: read_var("EARN_REWARD", defaults.earn_reward)?,
            sell_rate_percent: read_var("SELL_RATE_PERCENT", defaults.sell_rate_percent)?,
        };

        if config.sell_rate_percent > 100 {
            anyhow::bail!("SELL_RATE_PERCENT must not exceed 100");
        }
        Ok(config)
    }
}

fn read_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{name} must be a valid number")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_game_rules() {
        let config = AppConfig::default();
        assert_eq!(config.earn_reward, 100);
        assert_eq!(config.sell_rate_percent, 60);
        assert_eq!(config.starting_money, 10_000);
    }
}
