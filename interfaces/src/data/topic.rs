use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::resource::interface::{Resource, ResourceId};

/// A unit of study inside a subject. `subject_name` is filled in by the
/// server; it is never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub subject: ResourceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Topic {
    pub fn new(subject: ResourceId, title: &str) -> Self {
        Topic {
            id: None,
            subject,
            subject_name: None,
            title: title.to_string(),
            description: String::new(),
            is_active: true,
            updated_at: None,
        }
    }
}

impl Resource for Topic {
    fn id(&self) -> Option<ResourceId> {
        self.id
    }
}
