use async_trait::async_trait;
use studyhall_interfaces::api::{
    error::ServerError,
    group::{
        interface::GroupMembershipClientInterface,
        types::{
            AddStudentResponse, MembershipChangeRequest, RemoveStudentResponse,
            StudentSearchResult,
        },
    },
    resource::{filter::Filter, interface::ResourceId},
};

use super::utils::{
    query::{encode_query, get_request, post_request},
    transport::Transport,
};

/// Client for the membership actions nested under `/api/group/{id}/`.
#[derive(Debug, Clone)]
pub struct GroupMembershipClient {
    transport: Transport,
}

impl GroupMembershipClient {
    pub fn new(transport: Transport) -> Self {
        GroupMembershipClient { transport }
    }

    fn action_path(group_id: ResourceId, action: &str) -> String {
        format!("/api/group/{}/{}/", group_id, action)
    }
}

#[async_trait(?Send)]
impl GroupMembershipClientInterface for GroupMembershipClient {
    async fn search_students(
        &self,
        group_id: ResourceId,
        q: &str,
    ) -> Result<Vec<StudentSearchResult>, ServerError> {
        let query = encode_query(&Filter::new().push("q", q))?;
        let path = format!("{}?{}", Self::action_path(group_id, "search-students"), query);
        get_request(&self.transport, &path).await
    }

    async fn find_student(
        &self,
        group_id: ResourceId,
        user_id: ResourceId,
    ) -> Result<StudentSearchResult, ServerError> {
        let query = encode_query(&Filter::new().push_id("user_id", user_id))?;
        let path = format!("{}?{}", Self::action_path(group_id, "find-student"), query);
        get_request(&self.transport, &path).await
    }

    async fn add_student(
        &self,
        group_id: ResourceId,
        user_id: ResourceId,
    ) -> Result<AddStudentResponse, ServerError> {
        let path = Self::action_path(group_id, "add-student");
        post_request(&self.transport, &path, &MembershipChangeRequest { user_id }).await
    }

    async fn remove_student(
        &self,
        group_id: ResourceId,
        user_id: ResourceId,
    ) -> Result<RemoveStudentResponse, ServerError> {
        let path = Self::action_path(group_id, "remove-student");
        post_request(&self.transport, &path, &MembershipChangeRequest { user_id }).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::*;
    use crate::client::config::ClientConfig;

    fn client_for(server: &Server) -> GroupMembershipClient {
        let config = ClientConfig::new(&server.url());
        GroupMembershipClient::new(Transport::new(&config).unwrap())
    }

    fn brief(id: u64, username: &str) -> serde_json::Value {
        json!({
            "id": id,
            "user": 100 + id,
            "username": username,
            "email": format!("{}@example.com", username)
        })
    }

    #[tokio::test]
    async fn test_search_students_encodes_query() {
        let mut server = Server::new_async().await;
        let mut hit = brief(1, "maria");
        hit["in_group"] = json!(false);
        let mock = server
            .mock("GET", "/api/group/5/search-students/")
            .match_query(Matcher::Exact("q=mar".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!([hit]).to_string())
            .create_async()
            .await;

        let results = client_for(&server).search_students(5, "mar").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].username, "maria");
        assert!(!results[0].in_group);

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_add_student_posts_user_id() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/group/5/add-student/")
            .match_query(Matcher::Any)
            .match_body(Matcher::Json(json!({"user_id": 101})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"added": true, "student": brief(1, "maria")}).to_string())
            .create_async()
            .await;

        let response = client_for(&server).add_student(5, 101).await.unwrap();
        assert!(response.added);
        assert_eq!(response.student.username, "maria");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_remove_student_reports_non_member() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/group/5/remove-student/")
            .match_query(Matcher::Any)
            .match_body(Matcher::Json(json!({"user_id": 101})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"removed": false, "student": brief(1, "maria")}).to_string())
            .create_async()
            .await;

        let response = client_for(&server).remove_student(5, 101).await.unwrap();
        assert!(!response.removed);

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_find_student_missing_user_is_plain_server_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/group/5/find-student/")
            .match_query(Matcher::Exact("user_id=999".to_string()))
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(json!({"detail": "Not found."}).to_string())
            .create_async()
            .await;

        let result = client_for(&server).find_student(5, 999).await;
        match result {
            Err(ServerError::ServerError(status, message, _, _)) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not found.");
            }
            _ => panic!("Expected ServerError::ServerError"),
        }

        mock.assert_async().await;
    }
}
