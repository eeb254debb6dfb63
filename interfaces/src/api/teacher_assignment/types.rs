use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::resource::interface::ResourceId;

/// What a teacher teaches to a group. One singleton per (group, teacher)
/// pair, addressed through the group, never through a collection of its own.
///
/// The same shape serves the nested endpoint and the copy embedded in a
/// group listing; the embedded copy omits the group fields. An unassigned
/// response carries no id and null subject/topic fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherAssignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    pub teacher: Option<ResourceId>,
    pub teacher_username: Option<String>,
    pub subject: Option<ResourceId>,
    pub subject_name: Option<String>,
    pub topic: Option<ResourceId>,
    pub topic_title: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TeacherAssignment {
    pub fn is_assigned(&self) -> bool {
        self.id.is_some()
    }
}

/// Update payload for the singleton. Both keys are always sent; an explicit
/// null clears that side, and clearing both removes the assignment entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherAssignmentUpdate {
    pub subject: Option<ResourceId>,
    pub topic: Option<ResourceId>,
}
