use super::INotificationRepo;
use crate::repos::shared::inmemory_repo::*;
use renta_worker_domain::{NotificationRecord, ID};

pub struct InMemoryNotificationRepo {
    notifications: std::sync::Mutex<Vec<NotificationRecord>>,
}

impl InMemoryNotificationRepo {
    pub fn new() -> Self {
        Self {
            notifications: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl INotificationRepo for InMemoryNotificationRepo {
    async fn insert(&self, notification: &NotificationRecord) -> anyhow::Result<()> {
        insert(notification, &self.notifications);
        Ok(())
    }

    async fn find_by_rent(&self, rent_id: &ID) -> anyhow::Result<Vec<NotificationRecord>> {
        Ok(find_by(&self.notifications, |n| n.rent_id == *rent_id))
    }
}
