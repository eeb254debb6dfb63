use serde_json::Value;
use studyhall_interfaces::data::{
    attempt::{Answer, Attempt, AttemptQuestion},
    group::Group,
    question::Question,
    subject::Subject,
    topic::Topic,
    user::User,
};

use crate::external_api::{
    group::GroupMembershipClient,
    resource::ResourceClient,
    teacher_assignment::TeacherAssignmentClient,
    utils::transport::Transport,
};

use super::{config::ClientConfig, error::ClientError};

/// One client per collection the backend exposes, all sharing a single
/// transport so the session and CSRF state stay in one place.
///
/// Datasets have no fixed schema on this side; their client works on plain
/// JSON values.
#[derive(Debug, Clone)]
pub struct Client {
    pub config: ClientConfig,
    pub datasets: ResourceClient<Value>,
    pub subjects: ResourceClient<Subject>,
    pub topics: ResourceClient<Topic>,
    pub questions: ResourceClient<Question>,
    pub groups: ResourceClient<Group>,
    pub users: ResourceClient<User>,
    pub attempts: ResourceClient<Attempt>,
    pub attempt_questions: ResourceClient<AttemptQuestion>,
    pub answers: ResourceClient<Answer>,
    pub group_membership: GroupMembershipClient,
    pub teacher_assignments: TeacherAssignmentClient,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = Transport::new(&config)?;
        Ok(Client {
            datasets: ResourceClient::new(transport.clone(), "/api/dataset/"),
            subjects: ResourceClient::new(transport.clone(), "/api/subject/"),
            topics: ResourceClient::new(transport.clone(), "/api/topic/"),
            questions: ResourceClient::new(transport.clone(), "/api/question/"),
            groups: ResourceClient::new(transport.clone(), "/api/group/"),
            users: ResourceClient::new(transport.clone(), "/api/user/"),
            attempts: ResourceClient::new(transport.clone(), "/api/attempt/"),
            attempt_questions: ResourceClient::new(transport.clone(), "/api/attempt_question/"),
            answers: ResourceClient::new(transport.clone(), "/api/answer/"),
            group_membership: GroupMembershipClient::new(transport.clone()),
            teacher_assignments: TeacherAssignmentClient::new(transport),
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_endpoints() {
        let client = Client::new(ClientConfig::new("http://localhost:8000")).unwrap();
        assert_eq!(client.datasets.endpoint(), "/api/dataset/");
        assert_eq!(client.subjects.endpoint(), "/api/subject/");
        assert_eq!(client.topics.endpoint(), "/api/topic/");
        assert_eq!(client.questions.endpoint(), "/api/question/");
        assert_eq!(client.groups.endpoint(), "/api/group/");
        assert_eq!(client.users.endpoint(), "/api/user/");
        assert_eq!(client.attempts.endpoint(), "/api/attempt/");
        assert_eq!(client.attempt_questions.endpoint(), "/api/attempt_question/");
        assert_eq!(client.answers.endpoint(), "/api/answer/");
    }

    #[test]
    fn test_malformed_base_url_is_rejected() {
        let result = Client::new(ClientConfig::new("not a url"));
        assert!(result.is_err());
    }
}
