//! Store and earnings receipts

use serde::Serialize;

/// New balance after a successful purchase
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseReceipt {
    pub money: u64,
}

/// New balance after a successful sale
#[derive(Debug, Clone, Serialize)]
pub struct SaleReceipt {
    pub money: u64,
}

/// New balance after an earn action
#[derive(Debug, Clone, Serialize)]
pub struct EarningsReceipt {
    pub money: u64,
}
