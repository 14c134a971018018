pub mod date;
mod flat;
mod notification;
mod reminder;
mod rent;
mod shared;
mod tenant;

pub use flat::Flat;
pub use notification::NotificationRecord;
pub use reminder::ReminderSchedule;
pub use rent::{InvalidPaymentFrequencyError, PaymentFrequency, RentObligation};
pub use shared::entity::{Entity, ID};
pub use tenant::Tenant;
