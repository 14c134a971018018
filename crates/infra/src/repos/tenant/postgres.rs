use super::ITenantRepo;

use renta_worker_domain::{Tenant, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresTenantRepo {
    pool: PgPool,
}

impl PostgresTenantRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TenantRaw {
    tenant_uid: Uuid,
    name: String,
    phone: Option<String>,
}

impl Into<Tenant> for TenantRaw {
    fn into(self) -> Tenant {
        Tenant {
            id: ID::from(self.tenant_uid),
            name: self.name,
            phone: self.phone,
        }
    }
}

#[async_trait::async_trait]
impl ITenantRepo for PostgresTenantRepo {
    async fn insert(&self, tenant: &Tenant) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO tenants
            (tenant_uid, name, phone)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(tenant.id.inner_ref())
        .bind(&tenant.name)
        .bind(&tenant.phone)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, tenant_id: &ID) -> anyhow::Result<Option<Tenant>> {
        let tenant: Option<TenantRaw> = sqlx::query_as(
            r#"
            SELECT * FROM tenants AS t
            WHERE t.tenant_uid = $1
            "#,
        )
        .bind(tenant_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(tenant.map(|t| t.into()))
    }
}
