use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::resource::interface::{Resource, ResourceId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Subject {
    pub fn new(name: &str) -> Self {
        Subject {
            id: None,
            name: name.to_string(),
            description: String::new(),
            is_active: true,
            updated_at: None,
        }
    }
}

impl Resource for Subject {
    fn id(&self) -> Option<ResourceId> {
        self.id
    }
}
