use chrono::NaiveDate;

use super::{OrderStatus, ShippingStatus};

pub const ORDER_PLACED: &str = "order placed successfully";
pub const PROCESSING: &str = "processing";
pub const IN_TRANSIT: &str = "in transit";
pub const DELIVERED: &str = "delivered successfully";
pub const ORDER_CANCELLED: &str = "order cancelled";
pub const CANCELLATION_NOTE: &str = "customer requested cancellation or shop out of stock";

/// Builds the shipping milestones an order with `status` has gone through.
///
/// Milestones are appended by independent checks rather than by walking a
/// single-state machine, so later stages carry every earlier one with them:
///
/// | status     | milestones                                        |
/// |------------|---------------------------------------------------|
/// | pending    | placed                                            |
/// | processing | placed, processing                                |
/// | shipping   | placed, processing, in transit                    |
/// | completed  | placed, processing, in transit, delivered         |
/// | cancelled  | placed, cancelled                                 |
///
/// Every milestone is stamped with `date`.
pub fn shipping_history(status: OrderStatus, date: NaiveDate) -> Vec<ShippingStatus> {
    let time = date.format("%Y-%m-%d").to_string();
    let mut history = vec![ShippingStatus::new(ORDER_PLACED, &time, "")];

    if matches!(
        status,
        OrderStatus::Processing | OrderStatus::Shipping | OrderStatus::Completed
    ) {
        history.push(ShippingStatus::new(PROCESSING, &time, ""));
    }

    if matches!(status, OrderStatus::Shipping | OrderStatus::Completed) {
        history.push(ShippingStatus::new(IN_TRANSIT, &time, ""));
    }

    if status == OrderStatus::Completed {
        history.push(ShippingStatus::new(DELIVERED, &time, ""));
    }

    if status == OrderStatus::Cancelled {
        history.push(ShippingStatus::new(
            ORDER_CANCELLED,
            &time,
            CANCELLATION_NOTE,
        ));
    }

    history
}

#[cfg(test)]
mod tests {
    use super::*;

    fn april(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    fn labels(history: &[ShippingStatus]) -> Vec<&str> {
        history.iter().map(|entry| entry.status.as_str()).collect()
    }

    #[test]
    fn test_pending_has_only_placed() {
        let history = shipping_history(OrderStatus::Pending, april(3));
        assert_eq!(labels(&history), vec![ORDER_PLACED]);
    }

    #[test]
    fn test_processing_adds_processing() {
        let history = shipping_history(OrderStatus::Processing, april(3));
        assert_eq!(labels(&history), vec![ORDER_PLACED, PROCESSING]);
    }

    #[test]
    fn test_shipping_adds_in_transit() {
        let history = shipping_history(OrderStatus::Shipping, april(3));
        assert_eq!(labels(&history), vec![ORDER_PLACED, PROCESSING, IN_TRANSIT]);
    }

    #[test]
    fn test_completed_accumulates_all_four_milestones() {
        let history = shipping_history(OrderStatus::Completed, april(3));
        assert_eq!(
            labels(&history),
            vec![ORDER_PLACED, PROCESSING, IN_TRANSIT, DELIVERED]
        );
    }

    #[test]
    fn test_cancelled_skips_processing_and_carries_note() {
        let history = shipping_history(OrderStatus::Cancelled, april(3));
        assert_eq!(labels(&history), vec![ORDER_PLACED, ORDER_CANCELLED]);
        assert_eq!(history[1].note, CANCELLATION_NOTE);
    }

    #[test]
    fn test_only_cancellation_has_a_note() {
        for status in OrderStatus::ALL {
            for entry in shipping_history(status, april(9)) {
                if entry.status == ORDER_CANCELLED {
                    assert!(!entry.note.is_empty());
                } else {
                    assert!(entry.note.is_empty(), "{status}: {entry:?}");
                }
            }
        }
    }

    #[test]
    fn test_every_milestone_is_stamped_with_padded_order_date() {
        for status in OrderStatus::ALL {
            let history = shipping_history(status, april(7));
            assert!(history.iter().all(|entry| entry.time == "2025-04-07"));
        }
    }
}
