//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Character (aggregate root), Item, inventory and equipment state
//! - Value Objects: strongly-typed identifiers
//! - Errors: the typed failure kinds every operation surfaces

pub mod entities;
pub mod errors;
pub mod value_objects;
