//! Earnings Service - The auxiliary earn action
//!
//! Each call credits the configured fixed reward to an owned character. There
//! is no cooldown or rate limiting; callers that want one put it in front of
//! the engine.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::application::dto::EarningsReceipt;
use crate::application::ports::outbound::CharacterRepositoryPort;
use crate::domain::errors::{GameError, GameResult};
use crate::domain::value_objects::{CharacterId, UserId};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::locks::CharacterLockRegistry;

/// Earnings service trait defining the application use cases
#[async_trait]
pub trait EarningsService: Send + Sync {
    /// Credit the fixed reward to a character the actor owns
    async fn earn(&self, actor: UserId, character_id: CharacterId) -> GameResult<EarningsReceipt>;
}

/// Default implementation of EarningsService
pub struct EarningsServiceImpl {
    characters: Arc<dyn CharacterRepositoryPort>,
    locks: Arc<CharacterLockRegistry>,
    config: AppConfig,
}

impl EarningsServiceImpl {
    pub fn new(
        characters: Arc<dyn CharacterRepositoryPort>,
        locks: Arc<CharacterLockRegistry>,
        config: AppConfig,
    ) -> Self {
        Self {
            characters,
            locks,
            config,
        }
    }
}

#[async_trait]
impl EarningsService for EarningsServiceImpl {
    #[instrument(skip(self), fields(character_id = %character_id))]
    async fn earn(&self, actor: UserId, character_id: CharacterId) -> GameResult<EarningsReceipt> {
        let _guard = self.locks.acquire(character_id).await;

        let mut character = self.characters.get(character_id).await?.ok_or_else(|| {
            GameError::not_found(format!("character {character_id} does not exist"))
        })?;

        if !character.is_owned_by(actor) {
            return Err(GameError::forbidden(
                "character does not belong to the requesting user",
            ));
        }

        character.credit(self.config.earn_reward);
        self.characters.update(&character).await?;

        info!(
            character_id = %character_id,
            money = character.money,
            "Credited earn reward of {}",
            self.config.earn_reward
        );
        Ok(EarningsReceipt {
            money: character.money,
        })
    }
}
