mod generate_recurring_rents;
mod job_scheduler;
mod send_rent_reminders;
mod shared;

pub use generate_recurring_rents::GenerateRecurringRentsUseCase;
pub use job_scheduler::{run_cycle, start_worker_job};
pub use send_rent_reminders::SendRentRemindersUseCase;
pub use shared::batch::{BatchSummary, RowFailure};
pub use shared::usecase::{execute, UseCase};
