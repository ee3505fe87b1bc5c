use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod history;
pub mod status;

pub use history::shipping_history;
pub use status::{OrderStatus, ParseOrderStatusError};

use crate::{OrderError, OrderId, StatusCatalog};

/// One product line in an order. `price` is in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_name: String,
    pub variant: String,
    pub price: u64,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(
        product_name: impl Into<String>,
        variant: impl Into<String>,
        price: u64,
        quantity: u32,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            variant: variant.into(),
            price,
            quantity,
        }
    }

    pub fn line_total(&self) -> u64 {
        self.price * u64::from(self.quantity)
    }
}

/// A point-in-time shipping milestone.
///
/// `time` is either `YYYY-MM-DD` or `YYYY-MM-DD HH:MM`. `note` is empty when
/// there is nothing to add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingStatus {
    pub status: String,
    pub time: String,
    pub note: String,
}

impl ShippingStatus {
    pub fn new(status: impl Into<String>, time: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            time: time.into(),
            note: note.into(),
        }
    }
}

/// An order as shown in the order list and detail screens.
///
/// `shipping_status_history` is in order of occurrence; there is no separate
/// sort key. Both constructors and deserialization check that `items` is
/// non-empty, `total_amount` is the sum of the line totals and the history
/// matches `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "OrderFile")]
pub struct Order {
    pub order_id: OrderId,
    pub order_date: NaiveDate,
    pub total_amount: u64,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub shop_name: String,
    pub shipping_status_history: Vec<ShippingStatus>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderFile {
    order_id: OrderId,
    order_date: NaiveDate,
    total_amount: u64,
    status: OrderStatus,
    items: Vec<OrderItem>,
    shop_name: String,
    shipping_status_history: Vec<ShippingStatus>,
}

impl TryFrom<OrderFile> for Order {
    type Error = OrderError;

    fn try_from(file: OrderFile) -> Result<Self, Self::Error> {
        let order = Self {
            order_id: file.order_id,
            order_date: file.order_date,
            total_amount: file.total_amount,
            status: file.status,
            items: file.items,
            shop_name: file.shop_name,
            shipping_status_history: file.shipping_status_history,
        };
        order.validate()?;
        Ok(order)
    }
}

impl Order {
    /// Assembles an order, deriving `total_amount` from the items and the
    /// shipping history from `status`.
    pub fn new(
        order_id: OrderId,
        order_date: NaiveDate,
        status: OrderStatus,
        items: Vec<OrderItem>,
        shop_name: impl Into<String>,
    ) -> Result<Self, OrderError> {
        if items.is_empty() {
            return Err(OrderError::EmptyItems { order_id });
        }
        Ok(Self::assemble(order_id, order_date, status, items, shop_name))
    }

    // Callers guarantee `items` is non-empty.
    pub(crate) fn assemble(
        order_id: OrderId,
        order_date: NaiveDate,
        status: OrderStatus,
        items: Vec<OrderItem>,
        shop_name: impl Into<String>,
    ) -> Self {
        let total_amount = items.iter().map(OrderItem::line_total).sum();
        let shipping_status_history = shipping_history(status, order_date);

        Self {
            order_id,
            order_date,
            total_amount,
            status,
            items,
            shop_name: shop_name.into(),
            shipping_status_history,
        }
    }

    pub fn validate(&self) -> Result<(), OrderError> {
        if self.items.is_empty() {
            return Err(OrderError::EmptyItems {
                order_id: self.order_id,
            });
        }

        let computed = self.computed_total();
        if self.total_amount != computed {
            return Err(OrderError::TotalMismatch {
                order_id: self.order_id,
                stated: self.total_amount,
                computed,
            });
        }

        if self.shipping_status_history != shipping_history(self.status, self.order_date) {
            return Err(OrderError::HistoryMismatch {
                order_id: self.order_id,
                status: self.status,
            });
        }

        Ok(())
    }

    /// Sum of line totals, independent of the stored `total_amount`.
    pub fn computed_total(&self) -> u64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn display_label(&self) -> &'static str {
        StatusCatalog::label_for(self.status)
    }
}
