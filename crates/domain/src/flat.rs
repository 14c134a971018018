use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flat {
    pub id: ID,
    pub name: String,
}

impl Flat {
    pub fn new(name: &str) -> Self {
        Self {
            id: Default::default(),
            name: name.to_string(),
        }
    }
}

impl Entity for Flat {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
