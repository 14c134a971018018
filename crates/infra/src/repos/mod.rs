mod flat;
mod notification;
mod rent;
mod schedule;
mod shared;
mod tenant;

pub use flat::{IFlatRepo, InMemoryFlatRepo, PostgresFlatRepo};
pub use notification::{INotificationRepo, InMemoryNotificationRepo, PostgresNotificationRepo};
pub use rent::{IRentRepo, InMemoryRentRepo, PostgresRentRepo};
pub use schedule::{IScheduleRepo, InMemoryScheduleRepo, PostgresScheduleRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use tenant::{ITenantRepo, InMemoryTenantRepo, PostgresTenantRepo};

#[derive(Clone)]
pub struct Repos {
    pub tenants: Arc<dyn ITenantRepo>,
    pub flats: Arc<dyn IFlatRepo>,
    pub rents: Arc<dyn IRentRepo>,
    pub schedules: Arc<dyn IScheduleRepo>,
    pub notifications: Arc<dyn INotificationRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;

        Ok(Self {
            tenants: Arc::new(PostgresTenantRepo::new(pool.clone())),
            flats: Arc::new(PostgresFlatRepo::new(pool.clone())),
            rents: Arc::new(PostgresRentRepo::new(pool.clone())),
            schedules: Arc::new(PostgresScheduleRepo::new(pool.clone())),
            notifications: Arc::new(PostgresNotificationRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            tenants: Arc::new(InMemoryTenantRepo::new()),
            flats: Arc::new(InMemoryFlatRepo::new()),
            rents: Arc::new(InMemoryRentRepo::new()),
            schedules: Arc::new(InMemoryScheduleRepo::new()),
            notifications: Arc::new(InMemoryNotificationRepo::new()),
        }
    }
}
