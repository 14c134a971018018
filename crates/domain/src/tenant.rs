use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// A person renting one or more `Flat`s. The phone number is the only
/// notification channel; tenants without one never receive
/// `NotificationRecord`s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: ID,
    pub name: String,
    pub phone: Option<String>,
}

impl Tenant {
    pub fn new(name: &str) -> Self {
        Self {
            id: Default::default(),
            name: name.to_string(),
            phone: None,
        }
    }
}

impl Entity for Tenant {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
