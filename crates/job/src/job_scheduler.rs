use crate::generate_recurring_rents::GenerateRecurringRentsUseCase;
use crate::send_rent_reminders::SendRentRemindersUseCase;
use crate::shared::usecase::execute;
use renta_worker_infra::RentaContext;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{error, info};

/// Runs one full worker cycle: reminder dispatch first, then recurring
/// rent generation. Errors are logged and never propagated, so the
/// surrounding loop always re-arms.
pub async fn run_cycle(ctx: &RentaContext) {
    info!("Rent worker cycle starting");

    match execute(SendRentRemindersUseCase, ctx).await {
        Ok(summary) => info!(
            processed = summary.processed.len(),
            failed = summary.failed.len(),
            "Rent reminders dispatched"
        ),
        Err(e) => error!("Rent reminder dispatch failed: {:?}", e),
    }

    match execute(GenerateRecurringRentsUseCase, ctx).await {
        Ok(summary) => info!(
            processed = summary.processed.len(),
            skipped = summary.skipped.len(),
            failed = summary.failed.len(),
            "Recurring rents generated"
        ),
        Err(e) => error!("Recurring rent generation failed: {:?}", e),
    }

    info!("Rent worker cycle finished");
}

/// Spawns the worker loop: one cycle immediately on startup, then one
/// per `config.worker_interval`, indefinitely.
pub fn start_worker_job(ctx: RentaContext) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut worker_interval = interval(ctx.config.worker_interval);
        loop {
            worker_interval.tick().await;
            run_cycle(&ctx).await;
        }
    })
}
