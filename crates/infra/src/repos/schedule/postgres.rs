use super::IScheduleRepo;

use chrono::NaiveDate;
use renta_worker_domain::{ReminderSchedule, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresScheduleRepo {
    pool: PgPool,
}

impl PostgresScheduleRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ScheduleRaw {
    schedule_uid: Uuid,
    tenant_uid: Uuid,
    rent_uid: Uuid,
    next_reminder_date: NaiveDate,
    reminder_day: i32,
    active: bool,
    amount: i64,
    message: String,
}

impl Into<ReminderSchedule> for ScheduleRaw {
    fn into(self) -> ReminderSchedule {
        ReminderSchedule {
            id: ID::from(self.schedule_uid),
            tenant_id: ID::from(self.tenant_uid),
            rent_id: ID::from(self.rent_uid),
            next_reminder_date: self.next_reminder_date,
            reminder_day: self.reminder_day as u32,
            active: self.active,
            amount: self.amount,
            message: self.message,
        }
    }
}

#[async_trait::async_trait]
impl IScheduleRepo for PostgresScheduleRepo {
    async fn insert(&self, schedule: &ReminderSchedule) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminder_schedules
            (schedule_uid, tenant_uid, rent_uid, next_reminder_date, reminder_day, active, amount, message)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(schedule.id.inner_ref())
        .bind(schedule.tenant_id.inner_ref())
        .bind(schedule.rent_id.inner_ref())
        .bind(schedule.next_reminder_date)
        .bind(schedule.reminder_day as i32)
        .bind(schedule.active)
        .bind(schedule.amount)
        .bind(&schedule.message)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, schedule: &ReminderSchedule) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminder_schedules SET
                next_reminder_date = $2,
                reminder_day = $3,
                active = $4,
                amount = $5,
                message = $6
            WHERE schedule_uid = $1
            "#,
        )
        .bind(schedule.id.inner_ref())
        .bind(schedule.next_reminder_date)
        .bind(schedule.reminder_day as i32)
        .bind(schedule.active)
        .bind(schedule.amount)
        .bind(&schedule.message)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, schedule_id: &ID) -> anyhow::Result<Option<ReminderSchedule>> {
        let schedule: Option<ScheduleRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminder_schedules AS s
            WHERE s.schedule_uid = $1
            "#,
        )
        .bind(schedule_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(schedule.map(|s| s.into()))
    }

    async fn find_due(&self, date: NaiveDate) -> anyhow::Result<Vec<ReminderSchedule>> {
        let schedules: Vec<ScheduleRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminder_schedules AS s
            WHERE s.active = TRUE AND s.next_reminder_date = $1
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(schedules.into_iter().map(|s| s.into()).collect())
    }
}
