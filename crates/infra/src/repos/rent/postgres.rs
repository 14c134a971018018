use super::IRentRepo;

use chrono::NaiveDate;
use renta_worker_domain::{PaymentFrequency, RentObligation, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;

pub struct PostgresRentRepo {
    pool: PgPool,
}

impl PostgresRentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RentRaw {
    rent_uid: Uuid,
    tenant_uid: Uuid,
    flat_uid: Uuid,
    amount: i64,
    due_date: NaiveDate,
    paid: bool,
    frequency: String,
    reminder_day: Option<i32>,
    last_reminder_date: Option<NaiveDate>,
    custom_message: Option<String>,
}

impl TryFrom<RentRaw> for RentObligation {
    type Error = anyhow::Error;

    fn try_from(raw: RentRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: ID::from(raw.rent_uid),
            tenant_id: ID::from(raw.tenant_uid),
            flat_id: ID::from(raw.flat_uid),
            amount: raw.amount,
            due_date: raw.due_date,
            paid: raw.paid,
            frequency: raw.frequency.parse::<PaymentFrequency>()?,
            reminder_day: raw.reminder_day.map(|d| d as u32),
            last_reminder_date: raw.last_reminder_date,
            custom_message: raw.custom_message,
        })
    }
}

#[async_trait::async_trait]
impl IRentRepo for PostgresRentRepo {
    async fn insert(&self, rent: &RentObligation) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO rent_obligations
            (rent_uid, tenant_uid, flat_uid, amount, due_date, paid, frequency, reminder_day, last_reminder_date, custom_message)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(rent.id.inner_ref())
        .bind(rent.tenant_id.inner_ref())
        .bind(rent.flat_id.inner_ref())
        .bind(rent.amount)
        .bind(rent.due_date)
        .bind(rent.paid)
        .bind(rent.frequency.as_str())
        .bind(rent.reminder_day.map(|d| d as i32))
        .bind(rent.last_reminder_date)
        .bind(&rent.custom_message)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, rent: &RentObligation) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE rent_obligations SET
                amount = $2,
                due_date = $3,
                paid = $4,
                frequency = $5,
                reminder_day = $6,
                last_reminder_date = $7,
                custom_message = $8
            WHERE rent_uid = $1
            "#,
        )
        .bind(rent.id.inner_ref())
        .bind(rent.amount)
        .bind(rent.due_date)
        .bind(rent.paid)
        .bind(rent.frequency.as_str())
        .bind(rent.reminder_day.map(|d| d as i32))
        .bind(rent.last_reminder_date)
        .bind(&rent.custom_message)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, rent_id: &ID) -> anyhow::Result<Option<RentObligation>> {
        let rent: Option<RentRaw> = sqlx::query_as(
            r#"
            SELECT * FROM rent_obligations AS r
            WHERE r.rent_uid = $1
            "#,
        )
        .bind(rent_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        rent.map(RentObligation::try_from).transpose()
    }

    async fn find_stale_monthly(&self, before: NaiveDate) -> anyhow::Result<Vec<RentObligation>> {
        let rents: Vec<RentRaw> = sqlx::query_as(
            r#"
            SELECT * FROM rent_obligations AS r
            WHERE r.frequency = 'monthly' AND r.due_date < $1
            "#,
        )
        .bind(before)
        .fetch_all(&self.pool)
        .await?;

        rents.into_iter().map(RentObligation::try_from).collect()
    }

    async fn find_monthly_for_period(
        &self,
        tenant_id: &ID,
        flat_id: &ID,
        from: NaiveDate,
        until: NaiveDate,
    ) -> anyhow::Result<Vec<RentObligation>> {
        let rents: Vec<RentRaw> = sqlx::query_as(
            r#"
            SELECT * FROM rent_obligations AS r
            WHERE r.frequency = 'monthly'
                AND r.tenant_uid = $1
                AND r.flat_uid = $2
                AND r.due_date >= $3
                AND r.due_date < $4
            "#,
        )
        .bind(tenant_id.inner_ref())
        .bind(flat_id.inner_ref())
        .bind(from)
        .bind(until)
        .fetch_all(&self.pool)
        .await?;

        rents.into_iter().map(RentObligation::try_from).collect()
    }
}
