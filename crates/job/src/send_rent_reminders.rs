use crate::shared::batch::BatchSummary;
use crate::shared::usecase::UseCase;
use renta_worker_domain::{date, NotificationRecord, ReminderSchedule};
use renta_worker_infra::{
    INotificationRepo, IRentRepo, IScheduleRepo, ITenantRepo, RentaContext,
};
use tracing::error;

/// Dispatches every active `ReminderSchedule` that is due today: emits
/// one `NotificationRecord` (when the tenant has a phone number),
/// advances the schedule one month and stamps the rent obligation's
/// last reminder date.
#[derive(Debug)]
pub struct SendRentRemindersUseCase;

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait]
impl UseCase for SendRentRemindersUseCase {
    type Response = BatchSummary;

    type Error = UseCaseError;

    const NAME: &'static str = "SendRentReminders";

    async fn execute(&mut self, ctx: &RentaContext) -> Result<Self::Response, Self::Error> {
        let today = ctx.sys.get_date_today();

        let due_schedules = ctx.repos.schedules.find_due(today).await.map_err(|e| {
            error!("Unable to fetch due reminder schedules: {:?}", e);
            UseCaseError::StorageError
        })?;

        let mut summary = BatchSummary::default();
        for schedule in due_schedules {
            match dispatch_schedule(&schedule, ctx).await {
                Ok(()) => summary.record_success(schedule.id.clone()),
                Err(e) => {
                    error!(
                        "Unable to process reminder schedule {}: {:?}",
                        schedule.id, e
                    );
                    summary.record_failure(schedule.id.clone(), e.to_string());
                }
            }
        }

        Ok(summary)
    }
}

async fn dispatch_schedule(schedule: &ReminderSchedule, ctx: &RentaContext) -> anyhow::Result<()> {
    let today = ctx.sys.get_date_today();

    let tenant = ctx
        .repos
        .tenants
        .find(&schedule.tenant_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Tenant {} not found", schedule.tenant_id))?;

    // Tenants without a phone number get no notification, but their
    // schedule still advances.
    if let Some(phone) = tenant.phone {
        let notification = NotificationRecord::new(
            schedule.tenant_id.clone(),
            schedule.rent_id.clone(),
            phone,
            schedule.message.clone(),
            ctx.sys.get_timestamp_millis(),
        );
        ctx.repos.notifications.insert(&notification).await?;
    }

    let mut advanced = schedule.clone();
    advanced.next_reminder_date = date::next_month_on_day(today, schedule.reminder_day);
    ctx.repos.schedules.save(&advanced).await?;

    let mut rent = ctx
        .repos
        .rents
        .find(&schedule.rent_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Rent obligation {} not found", schedule.rent_id))?;
    rent.last_reminder_date = Some(today);
    ctx.repos.rents.save(&rent).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usecase::execute;
    use chrono::NaiveDate;
    use renta_worker_domain::{
        Flat, PaymentFrequency, RentObligation, Tenant, ID,
    };
    use renta_worker_infra::{IFlatRepo, ISys};
    use std::sync::Arc;

    struct StaticDateSys {
        today: NaiveDate,
    }
    impl ISys for StaticDateSys {
        fn get_timestamp_millis(&self) -> i64 {
            1774656000000
        }

        fn get_date_today(&self) -> NaiveDate {
            self.today
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    struct TestContext {
        ctx: RentaContext,
        rent: RentObligation,
        schedule: ReminderSchedule,
    }

    async fn setup(today: NaiveDate, reminder_day: u32, phone: Option<&str>) -> TestContext {
        let mut ctx = RentaContext::create_inmemory();
        ctx.sys = Arc::new(StaticDateSys { today });

        let mut tenant = Tenant::new("Asha");
        tenant.phone = phone.map(|p| p.to_string());
        ctx.repos.tenants.insert(&tenant).await.unwrap();

        let flat = Flat::new("Green View 2B");
        ctx.repos.flats.insert(&flat).await.unwrap();

        let mut rent =
            RentObligation::new(tenant.id.clone(), flat.id.clone(), 12000, today);
        rent.frequency = PaymentFrequency::Monthly;
        rent.reminder_day = Some(reminder_day);
        ctx.repos.rents.insert(&rent).await.unwrap();

        let schedule = ReminderSchedule::new(
            tenant.id.clone(),
            rent.id.clone(),
            today,
            reminder_day,
            rent.amount,
            ReminderSchedule::default_template(&tenant.name, rent.amount, &flat.name),
        );
        ctx.repos.schedules.insert(&schedule).await.unwrap();

        TestContext {
            ctx,
            rent,
            schedule,
        }
    }

    #[tokio::test]
    async fn it_dispatches_due_schedules_and_advances_them() {
        let today = date(2026, 8, 10);
        let TestContext {
            ctx,
            rent,
            schedule,
        } = setup(today, 10, Some("+4712345678")).await;

        let summary = execute(SendRentRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(summary.processed, vec![schedule.id.clone()]);
        assert!(summary.failed.is_empty());

        let notifications = ctx.repos.notifications.find_by_rent(&rent.id).await.unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].phone, "+4712345678");
        assert_eq!(notifications[0].message, schedule.message);
        assert!(!notifications[0].link_included);

        let advanced = ctx.repos.schedules.find(&schedule.id).await.unwrap().unwrap();
        assert_eq!(advanced.next_reminder_date, date(2026, 9, 10));

        let rent = ctx.repos.rents.find(&rent.id).await.unwrap().unwrap();
        assert_eq!(rent.last_reminder_date, Some(today));
    }

    #[tokio::test]
    async fn it_skips_the_notification_when_the_tenant_has_no_phone() {
        let today = date(2026, 8, 10);
        let TestContext {
            ctx,
            rent,
            schedule,
        } = setup(today, 10, None).await;

        let summary = execute(SendRentRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(summary.processed.len(), 1);

        let notifications = ctx.repos.notifications.find_by_rent(&rent.id).await.unwrap();
        assert!(notifications.is_empty());

        // Dates are still advanced
        let advanced = ctx.repos.schedules.find(&schedule.id).await.unwrap().unwrap();
        assert_eq!(advanced.next_reminder_date, date(2026, 9, 10));
        let rent = ctx.repos.rents.find(&rent.id).await.unwrap().unwrap();
        assert_eq!(rent.last_reminder_date, Some(today));
    }

    #[tokio::test]
    async fn it_clamps_the_advanced_date_in_short_months() {
        let today = date(2027, 1, 31);
        let TestContext { ctx, schedule, .. } = setup(today, 31, Some("+4712345678")).await;

        execute(SendRentRemindersUseCase, &ctx).await.unwrap();

        let advanced = ctx.repos.schedules.find(&schedule.id).await.unwrap().unwrap();
        assert_eq!(advanced.next_reminder_date, date(2027, 2, 28));
    }

    #[tokio::test]
    async fn it_leaves_undue_schedules_alone() {
        let today = date(2026, 8, 10);
        let TestContext { ctx, schedule, .. } = setup(today, 10, Some("+4712345678")).await;

        let mut future = ctx.repos.schedules.find(&schedule.id).await.unwrap().unwrap();
        future.next_reminder_date = date(2026, 9, 10);
        ctx.repos.schedules.save(&future).await.unwrap();

        let summary = execute(SendRentRemindersUseCase, &ctx).await.unwrap();
        assert!(summary.processed.is_empty());
        assert!(summary.failed.is_empty());
    }

    struct FailingNotificationRepo {
        fail_phone: String,
        inner: Arc<dyn INotificationRepo>,
    }

    #[async_trait::async_trait]
    impl INotificationRepo for FailingNotificationRepo {
        async fn insert(&self, notification: &NotificationRecord) -> anyhow::Result<()> {
            if notification.phone == self.fail_phone {
                anyhow::bail!("Simulated notification insert failure");
            }
            self.inner.insert(notification).await
        }

        async fn find_by_rent(&self, rent_id: &ID) -> anyhow::Result<Vec<NotificationRecord>> {
            self.inner.find_by_rent(rent_id).await
        }
    }

    #[tokio::test]
    async fn a_row_failure_does_not_abort_the_remaining_rows() {
        let today = date(2026, 8, 10);
        let TestContext {
            mut ctx, schedule, ..
        } = setup(today, 10, Some("+4700000000")).await;

        let mut tenant2 = Tenant::new("Ravi");
        tenant2.phone = Some("+4711111111".into());
        ctx.repos.tenants.insert(&tenant2).await.unwrap();
        let flat2 = Flat::new("Green View 3A");
        ctx.repos.flats.insert(&flat2).await.unwrap();
        let mut rent2 = RentObligation::new(tenant2.id.clone(), flat2.id.clone(), 9000, today);
        rent2.frequency = PaymentFrequency::Monthly;
        ctx.repos.rents.insert(&rent2).await.unwrap();
        let schedule2 = ReminderSchedule::new(
            tenant2.id.clone(),
            rent2.id.clone(),
            today,
            10,
            rent2.amount,
            "Rent is due".into(),
        );
        ctx.repos.schedules.insert(&schedule2).await.unwrap();

        ctx.repos.notifications = Arc::new(FailingNotificationRepo {
            fail_phone: "+4700000000".into(),
            inner: ctx.repos.notifications.clone(),
        });

        let summary = execute(SendRentRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(summary.processed, vec![schedule2.id.clone()]);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].id, schedule.id);

        // The second schedule was fully processed
        let notifications = ctx.repos.notifications.find_by_rent(&rent2.id).await.unwrap();
        assert_eq!(notifications.len(), 1);
        let advanced = ctx.repos.schedules.find(&schedule2.id).await.unwrap().unwrap();
        assert_eq!(advanced.next_reminder_date, date(2026, 9, 10));

        // The failed schedule was not advanced and will fire again
        let stuck = ctx.repos.schedules.find(&schedule.id).await.unwrap().unwrap();
        assert_eq!(stuck.next_reminder_date, today);
    }

    struct FailingScheduleRepo;

    #[async_trait::async_trait]
    impl IScheduleRepo for FailingScheduleRepo {
        async fn insert(&self, _schedule: &ReminderSchedule) -> anyhow::Result<()> {
            anyhow::bail!("Storage is down")
        }

        async fn save(&self, _schedule: &ReminderSchedule) -> anyhow::Result<()> {
            anyhow::bail!("Storage is down")
        }

        async fn find(&self, _schedule_id: &ID) -> anyhow::Result<Option<ReminderSchedule>> {
            anyhow::bail!("Storage is down")
        }

        async fn find_due(&self, _date: NaiveDate) -> anyhow::Result<Vec<ReminderSchedule>> {
            anyhow::bail!("Storage is down")
        }
    }

    #[tokio::test]
    async fn a_fetch_failure_is_batch_fatal() {
        let today = date(2026, 8, 10);
        let TestContext { mut ctx, .. } = setup(today, 10, Some("+4712345678")).await;
        ctx.repos.schedules = Arc::new(FailingScheduleRepo);

        let res = execute(SendRentRemindersUseCase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::StorageError)));
    }
}
