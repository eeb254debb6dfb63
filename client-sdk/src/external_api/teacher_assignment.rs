use async_trait::async_trait;
use studyhall_interfaces::api::{
    error::ServerError,
    resource::interface::ResourceId,
    teacher_assignment::{
        interface::TeacherAssignmentClientInterface,
        types::{TeacherAssignment, TeacherAssignmentUpdate},
    },
};

use super::utils::{
    query::{delete_request, get_request, patch_request},
    transport::Transport,
};

/// Client for the per-group teaching assignment singleton. The nested paths
/// are fixed; they do not derive from any collection endpoint.
#[derive(Debug, Clone)]
pub struct TeacherAssignmentClient {
    transport: Transport,
}

impl TeacherAssignmentClient {
    pub fn new(transport: Transport) -> Self {
        TeacherAssignmentClient { transport }
    }

    fn assignment_path(group_id: ResourceId) -> String {
        format!("/api/group/{}/teacher-assignment/", group_id)
    }
}

#[async_trait(?Send)]
impl TeacherAssignmentClientInterface for TeacherAssignmentClient {
    async fn get(&self, group_id: ResourceId) -> Result<TeacherAssignment, ServerError> {
        get_request(&self.transport, &Self::assignment_path(group_id)).await
    }

    async fn save(
        &self,
        group_id: ResourceId,
        update: &TeacherAssignmentUpdate,
    ) -> Result<TeacherAssignment, ServerError> {
        patch_request(&self.transport, &Self::assignment_path(group_id), update).await
    }

    async fn clear(&self, group_id: ResourceId) -> Result<(), ServerError> {
        delete_request(&self.transport, &Self::assignment_path(group_id)).await?;
        Ok(())
    }

    async fn list_for_subject(
        &self,
        subject_id: ResourceId,
    ) -> Result<Vec<TeacherAssignment>, ServerError> {
        let path = format!("/api/subject/{}/groups/", subject_id);
        get_request(&self.transport, &path).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::*;
    use crate::client::config::ClientConfig;

    fn client_for(server: &Server) -> TeacherAssignmentClient {
        let config = ClientConfig::new(&server.url());
        TeacherAssignmentClient::new(Transport::new(&config).unwrap())
    }

    fn assigned_body() -> serde_json::Value {
        json!({
            "id": 11,
            "group": 5,
            "group_name": "Algebra club",
            "teacher": 2,
            "teacher_username": "mr_t",
            "subject": 3,
            "subject_name": "Algebra",
            "topic": 9,
            "topic_title": "Fractions",
            "updated_at": "2024-05-01T10:00:00Z"
        })
    }

    fn unassigned_body() -> serde_json::Value {
        json!({
            "group": 5,
            "group_name": "Algebra club",
            "teacher": 2,
            "teacher_username": "mr_t",
            "subject": null,
            "subject_name": null,
            "topic": null,
            "topic_title": null,
            "updated_at": null
        })
    }

    #[tokio::test]
    async fn test_get_unassigned_group_has_no_id() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/group/5/teacher-assignment/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(unassigned_body().to_string())
            .create_async()
            .await;

        let assignment = client_for(&server).get(5).await.unwrap();
        assert!(!assignment.is_assigned());
        assert_eq!(assignment.group_name.as_deref(), Some("Algebra club"));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_save_is_always_a_patch() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/group/5/teacher-assignment/")
            .match_query(Matcher::Any)
            .match_body(Matcher::Json(json!({"subject": 3, "topic": 9})))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(assigned_body().to_string())
            .create_async()
            .await;

        let update = TeacherAssignmentUpdate {
            subject: Some(3),
            topic: Some(9),
        };
        let assignment = client_for(&server).save(5, &update).await.unwrap();
        assert!(assignment.is_assigned());
        assert_eq!(assignment.subject, Some(3));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_save_with_nulls_comes_back_unassigned() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/group/5/teacher-assignment/")
            .match_query(Matcher::Any)
            .match_body(Matcher::Json(json!({"subject": null, "topic": null})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(unassigned_body().to_string())
            .create_async()
            .await;

        let update = TeacherAssignmentUpdate {
            subject: None,
            topic: None,
        };
        let assignment = client_for(&server).save(5, &update).await.unwrap();
        assert!(!assignment.is_assigned());

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_clear_discards_empty_response() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/group/5/teacher-assignment/")
            .match_query(Matcher::Any)
            .with_status(204)
            .create_async()
            .await;

        client_for(&server).clear(5).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_for_subject_decodes_assignments() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/subject/3/groups/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!([assigned_body()]).to_string())
            .create_async()
            .await;

        let assignments = client_for(&server).list_for_subject(3).await.unwrap();
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].group, Some(5));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_forbidden_clear_propagates_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/group/5/teacher-assignment/")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_header("content-type", "application/json")
            .with_body(json!({"detail": "Only teachers can manage assignments."}).to_string())
            .create_async()
            .await;

        let result = client_for(&server).clear(5).await;
        match result {
            Err(ServerError::ServerError(status, message, _, _)) => {
                assert_eq!(status, 403);
                assert_eq!(message, "Only teachers can manage assignments.");
            }
            _ => panic!("Expected ServerError::ServerError"),
        }

        mock.assert_async().await;
    }
}
