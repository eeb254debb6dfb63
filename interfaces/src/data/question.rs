use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::resource::interface::{Resource, ResourceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    SingleChoice,
}

/// An answer choice. The rendition nested under attempt questions omits
/// `is_correct`, so it defaults to false when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
    pub order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    pub topic: ResourceId,
    pub text: String,
    pub question_type: QuestionType,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub choices: Vec<Choice>,
}

impl Resource for Question {
    fn id(&self) -> Option<ResourceId> {
        self.id
    }
}
