//! Armory Engine - Character economy and equipment backend for a browser game
//!
//! The engine owns the rules that keep a character's money balance, stackable
//! inventory, equipped-item set, and derived stats mutually consistent across
//! multi-step operations (equip, unequip, buy, sell). HTTP routing, session
//! issuance, and request-schema validation are external collaborators: callers
//! hand the services an authenticated [`UserId`](domain::value_objects::UserId)
//! and pre-validated, typed inputs, and get back response DTOs or a typed
//! [`GameError`](domain::errors::GameError) to map onto the transport.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use domain::errors::{GameError, GameResult};
pub use infrastructure::config::AppConfig;
pub use infrastructure::state::AppState;
