use crate::{Order, OrderStatus};

/// Display labels for the order screens' status tabs.
///
/// Labels are for showing and comparing in the UI only. Branch on
/// [`OrderStatus`] instead.
pub enum StatusCatalog {}

impl StatusCatalog {
    pub const AWAITING_CONFIRMATION: &'static str = "awaiting confirmation";
    pub const AWAITING_PICKUP: &'static str = "awaiting pickup";
    pub const IN_TRANSIT: &'static str = "in transit";
    pub const DELIVERED: &'static str = "delivered";
    pub const CANCELLED: &'static str = "cancelled";
    pub const RETURN_REFUND: &'static str = "return/refund";

    /// All labels in tab order.
    pub const ALL: [&'static str; 6] = [
        Self::AWAITING_CONFIRMATION,
        Self::AWAITING_PICKUP,
        Self::IN_TRANSIT,
        Self::DELIVERED,
        Self::CANCELLED,
        Self::RETURN_REFUND,
    ];

    /// Tab label an order with `status` is listed under.
    ///
    /// No lifecycle code maps to [`Self::RETURN_REFUND`].
    pub const fn label_for(status: OrderStatus) -> &'static str {
        match status {
            OrderStatus::Pending => Self::AWAITING_CONFIRMATION,
            OrderStatus::Processing => Self::AWAITING_PICKUP,
            OrderStatus::Shipping => Self::IN_TRANSIT,
            OrderStatus::Completed => Self::DELIVERED,
            OrderStatus::Cancelled => Self::CANCELLED,
        }
    }

    pub fn is_label(candidate: &str) -> bool {
        Self::ALL.contains(&candidate)
    }
}

/// Orders listed under the `label` tab, in input order.
pub fn filter_by_label<'a>(orders: &'a [Order], label: &str) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|order| order.display_label() == label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OrderId, OrderItem};
    use chrono::NaiveDate;

    fn order(id: u32, status: OrderStatus) -> Order {
        Order::new(
            OrderId(id),
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            status,
            vec![OrderItem::new("Hand wash", "500ml", 60_000, 1)],
            "Shopee Mall",
        )
        .unwrap()
    }

    #[test]
    fn test_labels_are_distinct() {
        for (i, a) in StatusCatalog::ALL.iter().enumerate() {
            for b in &StatusCatalog::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_every_status_maps_to_a_catalog_label() {
        for status in OrderStatus::ALL {
            assert!(StatusCatalog::is_label(StatusCatalog::label_for(status)));
        }
    }

    #[test]
    fn test_return_refund_has_no_status() {
        assert!(
            OrderStatus::ALL
                .iter()
                .all(|status| StatusCatalog::label_for(*status) != StatusCatalog::RETURN_REFUND)
        );
    }

    #[test]
    fn test_is_label_is_exact() {
        assert!(StatusCatalog::is_label("in transit"));
        assert!(!StatusCatalog::is_label("In Transit"));
        assert!(!StatusCatalog::is_label("shipping"));
    }

    #[test]
    fn test_filter_by_label_keeps_order() {
        let orders = vec![
            order(1, OrderStatus::Completed),
            order(2, OrderStatus::Pending),
            order(3, OrderStatus::Completed),
            order(4, OrderStatus::Cancelled),
        ];

        let delivered = filter_by_label(&orders, StatusCatalog::DELIVERED);
        let ids: Vec<OrderId> = delivered.iter().map(|o| o.order_id).collect();
        assert_eq!(ids, vec![OrderId(1), OrderId(3)]);

        assert!(filter_by_label(&orders, StatusCatalog::RETURN_REFUND).is_empty());
        assert!(filter_by_label(&orders, "no such tab").is_empty());
    }
}
