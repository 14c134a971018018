use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// An append-only log entry representing one outbound message. Never
/// mutated or read back by the worker after insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: ID,
    pub tenant_id: ID,
    pub rent_id: ID,
    /// Recipient phone number
    pub phone: String,
    pub message: String,
    /// Timestamp in millis at which the message was dispatched
    pub sent_at: i64,
    /// Whether a payment link was embedded in the message body
    pub link_included: bool,
}

impl NotificationRecord {
    pub fn new(tenant_id: ID, rent_id: ID, phone: String, message: String, sent_at: i64) -> Self {
        Self {
            id: Default::default(),
            tenant_id,
            rent_id,
            phone,
            message,
            sent_at,
            link_included: false,
        }
    }
}

impl Entity for NotificationRecord {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
