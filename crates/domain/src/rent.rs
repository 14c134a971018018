use crate::date;
use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFrequency {
    /// Rolled forward into a new `RentObligation` each month
    Monthly,
    /// A single obligation that is never regenerated
    OneTime,
}

impl PaymentFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::OneTime => "one_time",
        }
    }
}

impl Display for PaymentFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum InvalidPaymentFrequencyError {
    #[error("Payment frequency: {0} is not known")]
    Unknown(String),
}

impl FromStr for PaymentFrequency {
    type Err = InvalidPaymentFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Self::Monthly),
            "one_time" => Ok(Self::OneTime),
            _ => Err(InvalidPaymentFrequencyError::Unknown(s.to_string())),
        }
    }
}

/// One billing-period's rent liability for a tenant/flat pair.
///
/// Monthly obligations whose `due_date` has fallen behind the current
/// calendar month are picked up by the recurring rent job, which
/// materializes the current month's row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentObligation {
    pub id: ID,
    pub tenant_id: ID,
    pub flat_id: ID,
    /// Amount in the minor currency unit
    pub amount: i64,
    pub due_date: NaiveDate,
    pub paid: bool,
    pub frequency: PaymentFrequency,
    /// Day-of-month on which the tenant should be reminded. Days past
    /// the end of a month are clamped to its last day.
    pub reminder_day: Option<u32>,
    pub last_reminder_date: Option<NaiveDate>,
    pub custom_message: Option<String>,
}

impl RentObligation {
    pub fn new(tenant_id: ID, flat_id: ID, amount: i64, due_date: NaiveDate) -> Self {
        Self {
            id: Default::default(),
            tenant_id,
            flat_id,
            amount,
            due_date,
            paid: false,
            frequency: PaymentFrequency::OneTime,
            reminder_day: None,
            last_reminder_date: None,
            custom_message: None,
        }
    }

    /// Message attached to an obligation generated by the recurring
    /// rent job, naming the billing month.
    pub fn recurring_message(year: i32, month: u32) -> String {
        format!("Rent for {} {}", date::month_name(month), year)
    }
}

impl Entity for RentObligation {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
