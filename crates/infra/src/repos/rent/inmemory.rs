use super::IRentRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::NaiveDate;
use renta_worker_domain::{PaymentFrequency, RentObligation, ID};

pub struct InMemoryRentRepo {
    rents: std::sync::Mutex<Vec<RentObligation>>,
}

impl InMemoryRentRepo {
    pub fn new() -> Self {
        Self {
            rents: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IRentRepo for InMemoryRentRepo {
    async fn insert(&self, rent: &RentObligation) -> anyhow::Result<()> {
        insert(rent, &self.rents);
        Ok(())
    }

    async fn save(&self, rent: &RentObligation) -> anyhow::Result<()> {
        save(rent, &self.rents);
        Ok(())
    }

    async fn find(&self, rent_id: &ID) -> anyhow::Result<Option<RentObligation>> {
        Ok(find(rent_id, &self.rents))
    }

    async fn find_stale_monthly(&self, before: NaiveDate) -> anyhow::Result<Vec<RentObligation>> {
        Ok(find_by(&self.rents, |r| {
            r.frequency == PaymentFrequency::Monthly && r.due_date < before
        }))
    }

    async fn find_monthly_for_period(
        &self,
        tenant_id: &ID,
        flat_id: &ID,
        from: NaiveDate,
        until: NaiveDate,
    ) -> anyhow::Result<Vec<RentObligation>> {
        Ok(find_by(&self.rents, |r| {
            r.frequency == PaymentFrequency::Monthly
                && r.tenant_id == *tenant_id
                && r.flat_id == *flat_id
                && r.due_date >= from
                && r.due_date < until
        }))
    }
}
