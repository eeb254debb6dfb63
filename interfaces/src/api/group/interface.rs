use async_trait::async_trait;

use crate::api::{
    error::ServerError,
    group::types::{AddStudentResponse, RemoveStudentResponse, StudentSearchResult},
    resource::interface::ResourceId,
};

/// Membership actions nested under a single group.
#[async_trait(?Send)]
pub trait GroupMembershipClientInterface {
    /// Search students by username fragment or account id. The server
    /// answers a blank query with an empty list.
    async fn search_students(
        &self,
        group_id: ResourceId,
        q: &str,
    ) -> Result<Vec<StudentSearchResult>, ServerError>;

    async fn find_student(
        &self,
        group_id: ResourceId,
        user_id: ResourceId,
    ) -> Result<StudentSearchResult, ServerError>;

    /// Idempotent: adding an existing member answers `added == false`.
    async fn add_student(
        &self,
        group_id: ResourceId,
        user_id: ResourceId,
    ) -> Result<AddStudentResponse, ServerError>;

    async fn remove_student(
        &self,
        group_id: ResourceId,
        user_id: ResourceId,
    ) -> Result<RemoveStudentResponse, ServerError>;
}
