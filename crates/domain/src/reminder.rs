use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A recurring notification policy tied to one `RentObligation`.
///
/// Each time the reminder job fires a schedule, `next_reminder_date`
/// is advanced one month (clamped to `reminder_day`), so a completed
/// run always leaves it at a date >= today. A failed advancement may
/// leave it in the past, in which case the schedule simply fires
/// again on the next run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderSchedule {
    pub id: ID,
    pub tenant_id: ID,
    pub rent_id: ID,
    pub next_reminder_date: NaiveDate,
    /// Day-of-month the reminder should fire on
    pub reminder_day: u32,
    /// Deactivated schedules are never picked up by the reminder job
    pub active: bool,
    /// Amount in the minor currency unit, carried from the obligation
    pub amount: i64,
    /// Message template dispatched as the notification body
    pub message: String,
}

impl ReminderSchedule {
    pub fn new(
        tenant_id: ID,
        rent_id: ID,
        next_reminder_date: NaiveDate,
        reminder_day: u32,
        amount: i64,
        message: String,
    ) -> Self {
        Self {
            id: Default::default(),
            tenant_id,
            rent_id,
            next_reminder_date,
            reminder_day,
            active: true,
            amount,
            message,
        }
    }

    /// Default reminder body naming the tenant, the amount and the flat.
    pub fn default_template(tenant_name: &str, amount: i64, flat_name: &str) -> String {
        format!(
            "Hi {}, this is a reminder that your rent of {} for {} is due. Please make the payment at your earliest convenience.",
            tenant_name, amount, flat_name
        )
    }
}

impl Entity for ReminderSchedule {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
