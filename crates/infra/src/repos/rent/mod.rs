mod inmemory;
mod postgres;

use chrono::NaiveDate;
pub use inmemory::InMemoryRentRepo;
pub use postgres::PostgresRentRepo;
use renta_worker_domain::{RentObligation, ID};

#[async_trait::async_trait]
pub trait IRentRepo: Send + Sync {
    async fn insert(&self, rent: &RentObligation) -> anyhow::Result<()>;
    async fn save(&self, rent: &RentObligation) -> anyhow::Result<()>;
    async fn find(&self, rent_id: &ID) -> anyhow::Result<Option<RentObligation>>;
    /// Monthly obligations whose due date predates `before`. This is the
    /// selection the recurring rent job runs on, with `before` set to the
    /// first day of the current calendar month.
    async fn find_stale_monthly(&self, before: NaiveDate) -> anyhow::Result<Vec<RentObligation>>;
    /// Monthly obligations for the given tenant/flat pair falling due in
    /// `[from, until)`. Used as the dedup guard before a new obligation
    /// is generated for a period.
    async fn find_monthly_for_period(
        &self,
        tenant_id: &ID,
        flat_id: &ID,
        from: NaiveDate,
        until: NaiveDate,
    ) -> anyhow::Result<Vec<RentObligation>>;
}
