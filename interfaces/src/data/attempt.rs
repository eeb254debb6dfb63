use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    api::resource::interface::{Resource, ResourceId},
    data::question::Question,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    InProgress,
    Completed,
    Abandoned,
}

/// One pass of a student through a topic's questions. `correct_count` is a
/// server-side annotation on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub student: ResourceId,
    pub topic: ResourceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
    pub status: AttemptStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_count: Option<u32>,
}

impl Resource for Attempt {
    fn id(&self) -> Option<ResourceId> {
        self.id
    }
}

/// A question slotted into an attempt. The nested question rendition hides
/// which choices are correct; `answer` is present once the student answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptQuestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub attempt: ResourceId,
    pub order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<Answer>,
}

impl Resource for AttemptQuestion {
    fn id(&self) -> Option<ResourceId> {
        self.id
    }
}

/// A student's answer. `is_correct == None` means not graded yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub attempt_question: ResourceId,
    #[serde(default)]
    pub selected_choices: Vec<ResourceId>,
    #[serde(default)]
    pub answered_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_correct: Option<bool>,
    #[serde(default)]
    pub teacher_comment: String,
}

impl Resource for Answer {
    fn id(&self) -> Option<ResourceId> {
        self.id
    }
}
