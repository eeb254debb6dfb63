use async_trait::async_trait;

use crate::api::{
    error::ServerError,
    resource::interface::ResourceId,
    teacher_assignment::types::{TeacherAssignment, TeacherAssignmentUpdate},
};

/// Operations on the per-group teaching assignment singleton.
///
/// These live on a fixed nested path under the group, independent of any
/// collection endpoint configuration.
#[async_trait(?Send)]
pub trait TeacherAssignmentClientInterface {
    /// Fetch the requesting teacher's assignment for a group. The response
    /// is always 200; an unassigned group comes back without an id.
    async fn get(&self, group_id: ResourceId) -> Result<TeacherAssignment, ServerError>;

    /// Upsert the assignment. Always a partial update against the nested
    /// path, even when no assignment exists yet.
    async fn save(
        &self,
        group_id: ResourceId,
        update: &TeacherAssignmentUpdate,
    ) -> Result<TeacherAssignment, ServerError>;

    /// Remove the assignment. The response body is discarded.
    async fn clear(&self, group_id: ResourceId) -> Result<(), ServerError>;

    /// The requesting teacher's assignments across all groups for one
    /// subject.
    async fn list_for_subject(
        &self,
        subject_id: ResourceId,
    ) -> Result<Vec<TeacherAssignment>, ServerError>;
}
