mod inmemory;
mod postgres;

use chrono::NaiveDate;
pub use inmemory::InMemoryScheduleRepo;
pub use postgres::PostgresScheduleRepo;
use renta_worker_domain::{ReminderSchedule, ID};

#[async_trait::async_trait]
pub trait IScheduleRepo: Send + Sync {
    async fn insert(&self, schedule: &ReminderSchedule) -> anyhow::Result<()>;
    async fn save(&self, schedule: &ReminderSchedule) -> anyhow::Result<()>;
    async fn find(&self, schedule_id: &ID) -> anyhow::Result<Option<ReminderSchedule>>;
    /// Active schedules whose next reminder date equals `date`
    async fn find_due(&self, date: NaiveDate) -> anyhow::Result<Vec<ReminderSchedule>>;
}
