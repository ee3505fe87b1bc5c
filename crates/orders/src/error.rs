use crate::{OrderId, OrderStatus};

/// Errors loading or validating the sample pools the generator draws from.
#[derive(Debug, thiserror::Error)]
pub enum PoolsError {
    #[error("Sample pool '{pool}' must contain at least one entry")]
    EmptyPool { pool: &'static str },
    #[error("Failed to read pools file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid pools JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Order records that break the data-model invariants.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Order #{order_id} must contain at least one item")]
    EmptyItems { order_id: OrderId },
    #[error("Order #{order_id} total {stated} does not match line totals {computed}")]
    TotalMismatch {
        order_id: OrderId,
        stated: u64,
        computed: u64,
    },
    #[error("Order #{order_id} shipping history does not match status {status}")]
    HistoryMismatch {
        order_id: OrderId,
        status: OrderStatus,
    },
}
