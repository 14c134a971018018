use super::IFlatRepo;

use renta_worker_domain::{Flat, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresFlatRepo {
    pool: PgPool,
}

impl PostgresFlatRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FlatRaw {
    flat_uid: Uuid,
    name: String,
}

impl Into<Flat> for FlatRaw {
    fn into(self) -> Flat {
        Flat {
            id: ID::from(self.flat_uid),
            name: self.name,
        }
    }
}

#[async_trait::async_trait]
impl IFlatRepo for PostgresFlatRepo {
    async fn insert(&self, flat: &Flat) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO flats
            (flat_uid, name)
            VALUES($1, $2)
            "#,
        )
        .bind(flat.id.inner_ref())
        .bind(&flat.name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, flat_id: &ID) -> anyhow::Result<Option<Flat>> {
        let flat: Option<FlatRaw> = sqlx::query_as(
            r#"
            SELECT * FROM flats AS f
            WHERE f.flat_uid = $1
            "#,
        )
        .bind(flat_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(flat.map(|f| f.into()))
    }
}
