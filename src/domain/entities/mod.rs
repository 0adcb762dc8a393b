//! Domain entities - Core business objects with identity

mod character;
mod equipment;
mod inventory;
mod item;

pub use character::{Character, NewCharacter};
pub use equipment::{EquipmentEntry, EquipmentSet};
pub use inventory::{InventoryEntry, InventoryLedger};
pub use item::{Item, NewItem};
