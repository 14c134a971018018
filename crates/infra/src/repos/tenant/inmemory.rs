use super::ITenantRepo;
use crate::repos::shared::inmemory_repo::*;
use renta_worker_domain::{Tenant, ID};

pub struct InMemoryTenantRepo {
    tenants: std::sync::Mutex<Vec<Tenant>>,
}

impl InMemoryTenantRepo {
    pub fn new() -> Self {
        Self {
            tenants: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl ITenantRepo for InMemoryTenantRepo {
    async fn insert(&self, tenant: &Tenant) -> anyhow::Result<()> {
        insert(tenant, &self.tenants);
        Ok(())
    }

    async fn find(&self, tenant_id: &ID) -> anyhow::Result<Option<Tenant>> {
        Ok(find(tenant_id, &self.tenants))
    }
}
