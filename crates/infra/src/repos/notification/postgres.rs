use super::INotificationRepo;

use renta_worker_domain::{NotificationRecord, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresNotificationRepo {
    pool: PgPool,
}

impl PostgresNotificationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NotificationRaw {
    notification_uid: Uuid,
    tenant_uid: Uuid,
    rent_uid: Uuid,
    phone: String,
    message: String,
    sent_at: i64,
    link_included: bool,
}

impl Into<NotificationRecord> for NotificationRaw {
    fn into(self) -> NotificationRecord {
        NotificationRecord {
            id: ID::from(self.notification_uid),
            tenant_id: ID::from(self.tenant_uid),
            rent_id: ID::from(self.rent_uid),
            phone: self.phone,
            message: self.message,
            sent_at: self.sent_at,
            link_included: self.link_included,
        }
    }
}

#[async_trait::async_trait]
impl INotificationRepo for PostgresNotificationRepo {
    async fn insert(&self, notification: &NotificationRecord) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO notification_records
            (notification_uid, tenant_uid, rent_uid, phone, message, sent_at, link_included)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(notification.id.inner_ref())
        .bind(notification.tenant_id.inner_ref())
        .bind(notification.rent_id.inner_ref())
        .bind(&notification.phone)
        .bind(&notification.message)
        .bind(notification.sent_at)
        .bind(notification.link_included)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_rent(&self, rent_id: &ID) -> anyhow::Result<Vec<NotificationRecord>> {
        let notifications: Vec<NotificationRaw> = sqlx::query_as(
            r#"
            SELECT * FROM notification_records AS n
            WHERE n.rent_uid = $1
            "#,
        )
        .bind(rent_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications.into_iter().map(|n| n.into()).collect())
    }
}
