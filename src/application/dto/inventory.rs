//! Inventory listing payloads

use serde::Serialize;

use crate::domain::value_objects::ItemId;

/// One inventory stack as rendered to the owner
#[derive(Debug, Clone, Serialize)]
pub struct InventoryLine {
    pub item_code: ItemId,
    /// Best-effort catalog enrichment; absent when the catalog entry is gone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    pub count: u32,
}
