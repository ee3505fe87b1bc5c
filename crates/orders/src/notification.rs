use serde::{Deserialize, Serialize};

/// An entry in the notification screen.
///
/// `kind` is a free-form category such as `order`, `promo`, `system` or
/// `task`, and is keyed as `type` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        time: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            time: time.into(),
            kind: kind.into(),
        }
    }
}

const NOTIFICATION_SAMPLES: [&str; 5] = [
    "Order #12345 has been delivered successfully!",
    "10% off voucher for orders from 200K, use it today!",
    "Shop giadungtuyetnhi just updated the status of your order.",
    "Order #12346 is on its way.",
    "You have 1 new review from Shop ABC.",
];

/// One-line messages for the notification dialog.
pub fn notification_samples() -> [&'static str; 5] {
    NOTIFICATION_SAMPLES
}

/// Fixed entries for the notification screen.
pub fn notification_list() -> Vec<Notification> {
    vec![
        Notification::new("Custom Action", "Action Description", "1 minute ago", "system"),
        Notification::new(
            "Task assigned to you",
            "Aye yo, do this ting bruv",
            "2 hours ago",
            "task",
        ),
        Notification::new(
            "Notification triggered",
            "Michael is in the warehouse",
            "6 hours ago",
            "order",
        ),
        Notification::new(
            "Notification triggered",
            "Kevin spilled chili",
            "6 hours ago",
            "order",
        ),
    ]
}
