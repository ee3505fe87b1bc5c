use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod catalog;
pub mod error;
pub mod generator;
pub mod notification;
pub mod order;
pub mod pools;
pub mod price;

#[cfg(test)]
pub mod test_utils;

pub use catalog::{StatusCatalog, filter_by_label};
pub use error::{OrderError, PoolsError};
pub use generator::{FakeDataGenerator, ORDER_COUNT};
pub use notification::{Notification, notification_list, notification_samples};
pub use order::{
    Order, OrderItem, OrderStatus, ParseOrderStatusError, ShippingStatus, shipping_history,
};
pub use pools::SamplePools;
pub use price::format_price;

/// Caller-visible order identifier. Generated collections number orders from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
