//! Repository ports - Interfaces for data persistence
//!
//! These traits define the contracts that infrastructure repositories must
//! implement. Application services depend on these traits, not concrete
//! implementations, and receive them by injection - there is no ambient
//! process-wide store handle.
//!
//! `update` persists a whole aggregate in one step; orchestrators rely on it
//! as the single atomic commit point of a multi-step mutation.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::{Character, Item, NewCharacter, NewItem};
use crate::domain::value_objects::{CharacterId, ItemId, UserId};

// =============================================================================
// Character Repository Port
// =============================================================================

/// Repository port for Character aggregate operations
#[async_trait]
pub trait CharacterRepositoryPort: Send + Sync {
    /// Persist a new character; the store assigns and returns its id
    async fn create(&self, draft: NewCharacter) -> Result<Character>;

    /// Get a character by ID
    async fn get(&self, id: CharacterId) -> Result<Option<Character>>;

    /// Find a character by exact name (names are unique)
    async fn find_by_name(&self, name: &str) -> Result<Option<Character>>;

    /// List all characters owned by a user
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Character>>;

    /// Replace the stored aggregate with the given state
    async fn update(&self, character: &Character) -> Result<()>;

    /// Delete a character and everything it owns
    async fn delete(&self, id: CharacterId) -> Result<()>;

    /// Ids of characters that currently have the item equipped
    async fn list_equipping(&self, item_id: ItemId) -> Result<Vec<CharacterId>>;
}

// =============================================================================
// Item Repository Port
// =============================================================================

/// Repository port for catalog Item operations
#[async_trait]
pub trait ItemRepositoryPort: Send + Sync {
    /// Persist a new catalog item; the store assigns and returns its code
    async fn create(&self, draft: NewItem) -> Result<Item>;

    /// Get an item by code
    async fn get(&self, id: ItemId) -> Result<Option<Item>>;

    /// Find an item by exact name (names are unique)
    async fn find_by_name(&self, name: &str) -> Result<Option<Item>>;

    /// List the whole catalog
    async fn list(&self) -> Result<Vec<Item>>;

    /// Replace the stored item definition
    async fn update(&self, item: &Item) -> Result<()>;
}
