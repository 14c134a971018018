mod inmemory;
mod postgres;

pub use inmemory::InMemoryFlatRepo;
pub use postgres::PostgresFlatRepo;
use renta_worker_domain::{Flat, ID};

#[async_trait::async_trait]
pub trait IFlatRepo: Send + Sync {
    async fn insert(&self, flat: &Flat) -> anyhow::Result<()>;
    async fn find(&self, flat_id: &ID) -> anyhow::Result<Option<Flat>>;
}
