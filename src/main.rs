mod telemetry;

use renta_worker_infra::{run_migration, setup_context};
use renta_worker_job::start_worker_job;
use telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() {
    let subscriber = get_subscriber("renta_worker".into(), "info".into());
    init_subscriber(subscriber);

    run_migration()
        .await
        .expect("Failed to run database migrations");

    let context = setup_context().await;

    // Runs forever; the worker has no graceful-shutdown hook.
    let job = start_worker_job(context);
    if let Err(e) = job.await {
        panic!("Rent worker job stopped unexpectedly: {}", e);
    }
}
