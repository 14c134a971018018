mod inmemory;
mod postgres;

pub use inmemory::InMemoryNotificationRepo;
pub use postgres::PostgresNotificationRepo;
use renta_worker_domain::{NotificationRecord, ID};

#[async_trait::async_trait]
pub trait INotificationRepo: Send + Sync {
    async fn insert(&self, notification: &NotificationRecord) -> anyhow::Result<()>;
    async fn find_by_rent(&self, rent_id: &ID) -> anyhow::Result<Vec<NotificationRecord>>;
}
