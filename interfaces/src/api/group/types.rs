use serde::{Deserialize, Serialize};

use crate::api::resource::interface::ResourceId;

/// Student as rendered by the membership actions: the student profile id plus
/// the account it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentBrief {
    pub id: ResourceId,
    pub user: ResourceId,
    pub username: String,
    pub email: String,
}

/// A search hit, a brief annotated with membership in the queried group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentSearchResult {
    pub id: ResourceId,
    pub user: ResourceId,
    pub username: String,
    pub email: String,
    pub in_group: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipChangeRequest {
    pub user_id: ResourceId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddStudentResponse {
    pub added: bool,
    pub student: StudentBrief,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveStudentResponse {
    pub removed: bool,
    pub student: StudentBrief,
}
