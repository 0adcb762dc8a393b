//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so a transport adapter (HTTP, RPC, a
//! test harness) can serialize responses without reaching into the domain
//! model.

mod character;
mod equipment;
mod inventory;
mod item;
mod store;

pub use character::{CharacterSheet, CreatedCharacter};
pub use equipment::{EquipmentLine, StatSnapshot};
pub use inventory::InventoryLine;
pub use item::{ItemDetail, ItemSummary};
pub use store::{EarningsReceipt, PurchaseReceipt, SaleReceipt};
