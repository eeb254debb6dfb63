use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{
    group::types::StudentBrief,
    resource::interface::{Resource, ResourceId},
    teacher_assignment::types::TeacherAssignment,
};

/// A student group. `teacher_assignment` is the requesting teacher's own
/// assignment, embedded read-only by the server; `students` is only present
/// in the detail rendition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub teacher: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_assignment: Option<TeacherAssignment>,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub students: Vec<StudentBrief>,
}

impl Group {
    pub fn new(name: &str) -> Self {
        Group {
            id: None,
            name: name.to_string(),
            description: String::new(),
            teacher: None,
            teacher_assignment: None,
            is_active: true,
            updated_at: None,
            students: Vec::new(),
        }
    }
}

impl Resource for Group {
    fn id(&self) -> Option<ResourceId> {
        self.id
    }
}
