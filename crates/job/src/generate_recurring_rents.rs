use crate::shared::batch::BatchSummary;
use crate::shared::usecase::UseCase;
use chrono::Datelike;
use renta_worker_domain::{date, PaymentFrequency, RentObligation, ReminderSchedule};
use renta_worker_infra::{
    IFlatRepo, IRentRepo, IScheduleRepo, ITenantRepo, RentaContext, DEFAULT_DUE_DAY,
};
use tracing::{debug, error};

/// Materializes the current month's `RentObligation` for every monthly
/// obligation whose due date has fallen behind the first of the month,
/// together with its `ReminderSchedule` when a reminder day is
/// configured.
///
/// A tenant/flat pair that already has an obligation in the current
/// month is skipped, so running the job twice within the same month
/// never double-bills.
#[derive(Debug)]
pub struct GenerateRecurringRentsUseCase;

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

enum RowOutcome {
    Generated,
    AlreadyGenerated,
}

#[async_trait::async_trait]
impl UseCase for GenerateRecurringRentsUseCase {
    type Response = BatchSummary;

    type Error = UseCaseError;

    const NAME: &'static str = "GenerateRecurringRents";

    async fn execute(&mut self, ctx: &RentaContext) -> Result<Self::Response, Self::Error> {
        let today = ctx.sys.get_date_today();
        let month_start = date::first_day_of_month(today);

        let stale_rents = ctx
            .repos
            .rents
            .find_stale_monthly(month_start)
            .await
            .map_err(|e| {
                error!("Unable to fetch stale monthly rent obligations: {:?}", e);
                UseCaseError::StorageError
            })?;

        let mut summary = BatchSummary::default();
        for rent in stale_rents {
            match generate_for_rent(&rent, ctx).await {
                Ok(RowOutcome::Generated) => summary.record_success(rent.id.clone()),
                Ok(RowOutcome::AlreadyGenerated) => {
                    debug!(
                        "Rent obligation {} already has a row for the current month",
                        rent.id
                    );
                    summary.record_skip(rent.id.clone());
                }
                Err(e) => {
                    error!("Unable to roll rent obligation {} forward: {:?}", rent.id, e);
                    summary.record_failure(rent.id.clone(), e.to_string());
                }
            }
        }

        Ok(summary)
    }
}

async fn generate_for_rent(
    source: &RentObligation,
    ctx: &RentaContext,
) -> anyhow::Result<RowOutcome> {
    let today = ctx.sys.get_date_today();
    let month_start = date::first_day_of_month(today);
    let next_month_start = date::next_month_on_day(month_start, 1);

    // Dedup guard: at most one generated obligation per tenant/flat
    // pair per calendar month, regardless of how often the job runs.
    let existing = ctx
        .repos
        .rents
        .find_monthly_for_period(
            &source.tenant_id,
            &source.flat_id,
            month_start,
            next_month_start,
        )
        .await?;
    if !existing.is_empty() {
        return Ok(RowOutcome::AlreadyGenerated);
    }

    let tenant = ctx
        .repos
        .tenants
        .find(&source.tenant_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Tenant {} not found", source.tenant_id))?;
    let flat = ctx
        .repos
        .flats
        .find(&source.flat_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Flat {} not found", source.flat_id))?;

    let due_day = source.reminder_day.unwrap_or(DEFAULT_DUE_DAY);
    let due_date = date::day_in_month_clamped(today.year(), today.month(), due_day);

    let mut rent = RentObligation::new(
        source.tenant_id.clone(),
        source.flat_id.clone(),
        source.amount,
        due_date,
    );
    rent.frequency = PaymentFrequency::Monthly;
    rent.reminder_day = source.reminder_day;
    rent.custom_message = Some(RentObligation::recurring_message(
        today.year(),
        today.month(),
    ));
    ctx.repos.rents.insert(&rent).await?;

    if let Some(reminder_day) = source.reminder_day {
        let mut next_reminder_date =
            date::day_in_month_clamped(today.year(), today.month(), reminder_day);
        if next_reminder_date < today {
            // This month's reminder day is already behind us
            next_reminder_date = date::next_month_on_day(next_reminder_date, reminder_day);
        }

        let schedule = ReminderSchedule::new(
            source.tenant_id.clone(),
            rent.id.clone(),
            next_reminder_date,
            reminder_day,
            source.amount,
            ReminderSchedule::default_template(&tenant.name, source.amount, &flat.name),
        );
        ctx.repos.schedules.insert(&schedule).await?;
    }

    Ok(RowOutcome::Generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usecase::execute;
    use chrono::NaiveDate;
    use renta_worker_domain::{Flat, Tenant, ID};
    use renta_worker_infra::ISys;
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
        source: RentObligation,
    }

    async fn setup(
        today: NaiveDate,
        source_due: NaiveDate,
        reminder_day: Option<u32>,
    ) -> TestContext {
        let mut ctx = RentaContext::create_inmemory();
        ctx.sys = Arc::new(StaticDateSys { today });

        let mut tenant = Tenant::new("Asha");
        tenant.phone = Some("+4712345678".into());
        ctx.repos.tenants.insert(&tenant).await.unwrap();

        let flat = Flat::new("Green View 2B");
        ctx.repos.flats.insert(&flat).await.unwrap();

        let mut source = RentObligation::new(tenant.id.clone(), flat.id.clone(), 12000, source_due);
        source.frequency = PaymentFrequency::Monthly;
        source.reminder_day = reminder_day;
        ctx.repos.rents.insert(&source).await.unwrap();

        TestContext { ctx, source }
    }

    async fn rents_for_pair(ctx: &RentaContext, source: &RentObligation) -> Vec<RentObligation> {
        ctx.repos
            .rents
            .find_monthly_for_period(
                &source.tenant_id,
                &source.flat_id,
                date(1970, 1, 1),
                date(2100, 1, 1),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn it_creates_the_current_months_obligation() {
        let today = date(2026, 8, 25);
        let TestContext { ctx, source } = setup(today, date(2026, 7, 5), Some(5)).await;

        let summary = execute(GenerateRecurringRentsUseCase, &ctx).await.unwrap();
        assert_eq!(summary.processed, vec![source.id.clone()]);
        assert!(summary.failed.is_empty());

        let rents = rents_for_pair(&ctx, &source).await;
        assert_eq!(rents.len(), 2);
        let generated = rents.iter().find(|r| r.id != source.id).unwrap();
        assert_eq!(generated.due_date, date(2026, 8, 5));
        assert!(!generated.paid);
        assert_eq!(generated.amount, source.amount);
        assert_eq!(generated.reminder_day, Some(5));
        assert_eq!(
            generated.custom_message.as_deref(),
            Some("Rent for August 2026")
        );
    }

    #[tokio::test]
    async fn it_rolls_an_elapsed_reminder_date_into_the_next_month() {
        // Reminder day 5 is already behind on the 25th
        let today = date(2026, 8, 25);
        let TestContext { ctx, .. } = setup(today, date(2026, 7, 5), Some(5)).await;

        execute(GenerateRecurringRentsUseCase, &ctx).await.unwrap();

        let schedules = ctx.repos.schedules.find_due(date(2026, 9, 5)).await.unwrap();
        assert_eq!(schedules.len(), 1);
        assert!(schedules[0].active);
        assert_eq!(schedules[0].amount, 12000);
        assert!(schedules[0].message.contains("Asha"));
        assert!(schedules[0].message.contains("Green View 2B"));
    }

    #[tokio::test]
    async fn it_keeps_an_upcoming_reminder_date_in_the_current_month() {
        let today = date(2026, 8, 3);
        let TestContext { ctx, .. } = setup(today, date(2026, 7, 10), Some(10)).await;

        execute(GenerateRecurringRentsUseCase, &ctx).await.unwrap();

        let schedules = ctx
            .repos
            .schedules
            .find_due(date(2026, 8, 10))
            .await
            .unwrap();
        assert_eq!(schedules.len(), 1);
    }

    #[tokio::test]
    async fn it_defaults_the_due_day_and_creates_no_schedule_without_a_reminder_day() {
        let today = date(2026, 8, 25);
        let TestContext { ctx, source } = setup(today, date(2026, 7, 1), None).await;

        execute(GenerateRecurringRentsUseCase, &ctx).await.unwrap();

        let rents = rents_for_pair(&ctx, &source).await;
        assert_eq!(rents.len(), 2);
        let generated = rents.iter().find(|r| r.id != source.id).unwrap();
        assert_eq!(generated.due_date, date(2026, 8, 1));

        // No reminder day, no schedule
        for day in 1..=31 {
            let due = ctx
                .repos
                .schedules
                .find_due(date::day_in_month_clamped(2026, 8, day))
                .await
                .unwrap();
            assert!(due.is_empty());
        }
    }

    #[tokio::test]
    async fn it_clamps_the_generated_dates_in_short_months() {
        let today = date(2027, 2, 15);
        let TestContext { ctx, source } = setup(today, date(2027, 1, 31), Some(31)).await;

        execute(GenerateRecurringRentsUseCase, &ctx).await.unwrap();

        let rents = rents_for_pair(&ctx, &source).await;
        let generated = rents.iter().find(|r| r.id != source.id).unwrap();
        assert_eq!(generated.due_date, date(2027, 2, 28));

        let schedules = ctx
            .repos
            .schedules
            .find_due(date(2027, 2, 28))
            .await
            .unwrap();
        assert_eq!(schedules.len(), 1);
    }

    #[tokio::test]
    async fn a_second_run_within_the_month_generates_nothing_more() {
        let today = date(2026, 8, 25);
        let TestContext { ctx, source } = setup(today, date(2026, 7, 5), Some(5)).await;

        let first = execute(GenerateRecurringRentsUseCase, &ctx).await.unwrap();
        assert_eq!(first.processed.len(), 1);

        let second = execute(GenerateRecurringRentsUseCase, &ctx).await.unwrap();
        assert!(second.processed.is_empty());
        assert_eq!(second.skipped, vec![source.id.clone()]);

        let rents = rents_for_pair(&ctx, &source).await;
        assert_eq!(rents.len(), 2);
    }

    #[tokio::test]
    async fn a_missing_tenant_is_a_row_failure_that_spares_other_rows() {
        let today = date(2026, 8, 25);
        let TestContext { ctx, source } = setup(today, date(2026, 7, 5), Some(5)).await;

        // A second stale obligation pointing at a tenant that was deleted
        let orphan = {
            let mut rent =
                RentObligation::new(ID::new(), source.flat_id.clone(), 8000, date(2026, 7, 1));
            rent.frequency = PaymentFrequency::Monthly;
            rent
        };
        ctx.repos.rents.insert(&orphan).await.unwrap();

        let summary = execute(GenerateRecurringRentsUseCase, &ctx).await.unwrap();
        assert_eq!(summary.processed, vec![source.id.clone()]);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].id, orphan.id);

        let rents = rents_for_pair(&ctx, &source).await;
        assert_eq!(rents.len(), 2);
    }
}
