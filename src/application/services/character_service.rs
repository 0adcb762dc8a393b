//! Character Service - Application service for character lifecycle
//!
//! Covers the roster flows adjacent to the economy core: creating a character
//! with configured starting stats, rendering a sheet with owner-only money
//! visibility, owner-initiated deletion, and listing a user's roster.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::application::dto::{CharacterSheet, CreatedCharacter};
use crate::application::ports::outbound::CharacterRepositoryPort;
use crate::domain::entities::NewCharacter;
use crate::domain::errors::{GameError, GameResult};
use crate::domain::value_objects::{CharacterId, UserId};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::locks::CharacterLockRegistry;

/// Character service trait defining the application use cases
#[async_trait]
pub trait CharacterService: Send + Sync {
    /// Create a character for the actor with configured starting stats
    async fn create_character(&self, actor: UserId, name: String) -> GameResult<CreatedCharacter>;

    /// Render a character sheet; `viewer` controls money visibility
    async fn get_character(
        &self,
        viewer: Option<UserId>,
        id: CharacterId,
    ) -> GameResult<CharacterSheet>;

    /// List the actor's own characters as owner-visible sheets
    async fn list_characters(&self, actor: UserId) -> GameResult<Vec<CharacterSheet>>;

    /// Delete a character the actor owns
    async fn delete_character(&self, actor: UserId, id: CharacterId) -> GameResult<()>;
}

/// Default implementation of CharacterService
pub struct CharacterServiceImpl {
    characters: Arc<dyn CharacterRepositoryPort>,
    locks: Arc<CharacterLockRegistry>,
    config: AppConfig,
}

impl CharacterServiceImpl {
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

    /// Business rules for character names (types were checked at the boundary)
    fn validate_name(name: &str) -> GameResult<()> {
        let trimmed = name.trim();
        if trimmed.len() < 3 || trimmed.len() > 30 {
            return Err(GameError::bad_request(
                "character name must be between 3 and 30 characters",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CharacterService for CharacterServiceImpl {
    #[instrument(skip(self), fields(actor = %actor, name = %name))]
    async fn create_character(&self, actor: UserId, name: String) -> GameResult<CreatedCharacter> {
        Self::validate_name(&name)?;
        let name = name.trim().to_string();

        if self.characters.find_by_name(&name).await?.is_some() {
            return Err(GameError::conflict(format!(
                "character {name} already exists"
            )));
        }

        let character = self
            .characters
            .create(NewCharacter {
                user_id: actor,
                name,
                health: self.config.starting_health,
                power: self.config.starting_power,
                money: self.config.starting_money,
            })
            .await?;

        info!(
            character_id = %character.id,
            "Created character: {}",
            character.name
        );
        Ok(CreatedCharacter {
            character_id: character.id,
            name: character.name,
        })
    }

    #[instrument(skip(self))]
    async fn get_character(
        &self,
        viewer: Option<UserId>,
        id: CharacterId,
    ) -> GameResult<CharacterSheet> {
        debug!(character_id = %id, "Fetching character sheet");
        let character = self
            .characters
            .get(id)
            .await?
            .ok_or_else(|| GameError::not_found(format!("character {id} does not exist")))?;

        let is_owner = viewer.is_some_and(|v| character.is_owned_by(v));
        Ok(CharacterSheet::for_viewer(&character, is_owner))
    }

    #[instrument(skip(self))]
    async fn list_characters(&self, actor: UserId) -> GameResult<Vec<CharacterSheet>> {
        let characters = self.characters.list_by_user(actor).await?;
        Ok(characters
            .iter()
            .map(|c| CharacterSheet::for_viewer(c, true))
            .collect())
    }

    #[instrument(skip(self), fields(character_id = %id))]
    async fn delete_character(&self, actor: UserId, id: CharacterId) -> GameResult<()> {
        let _guard = self.locks.acquire(id).await;

        let character = self
            .characters
            .get(id)
            .await?
            .ok_or_else(|| GameError::not_found(format!("character {id} does not exist")))?;

        if !character.is_owned_by(actor) {
            return Err(GameError::forbidden(
                "only the owner can delete a character",
            ));
        }

        self.characters.delete(id).await?;
        self.locks.retire(id).await;

        info!(character_id = %id, "Deleted character: {}", character.name);
        Ok(())
    }
}
