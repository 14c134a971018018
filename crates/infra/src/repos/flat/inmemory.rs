use super::IFlatRepo;
use crate::repos::shared::inmemory_repo::*;
use renta_worker_domain::{Flat, ID};

pub struct InMemoryFlatRepo {
    flats: std::sync::Mutex<Vec<Flat>>,
}

impl InMemoryFlatRepo {
    pub fn new() -> Self {
        Self {
            flats: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IFlatRepo for InMemoryFlatRepo {
    async fn insert(&self, flat: &Flat) -> anyhow::Result<()> {
        insert(flat, &self.flats);
        Ok(())
    }

    async fn find(&self, flat_id: &ID) -> anyhow::Result<Option<Flat>> {
        Ok(find(flat_id, &self.flats))
    }
}
