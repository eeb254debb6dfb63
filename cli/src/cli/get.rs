use studyhall_interfaces::{
    api::resource::{filter::Filter, interface::ResourceId},
    data::{group::Group, question::Question, subject::Subject, topic::Topic},
};

use crate::cli::client::get_client;

use super::error::CliError;

fn active_mark(is_active: bool) -> &'static str {
    if is_active {
        "active"
    } else {
        "inactive"
    }
}

pub async fn subjects(name: Option<String>, active: Option<bool>) -> Result<(), CliError> {
    let client = get_client()?;
    let filter = Filter::new()
        .push_opt("name", name)
        .push_opt("is_active", active);
    let subjects: Vec<Subject> = client.subjects.filter(&filter).await?;
    println!("Subjects:");
    for subject in subjects.iter() {
        println!(
            "#{}: {} ({})",
            subject.id.unwrap_or_default(),
            subject.name,
            active_mark(subject.is_active)
        );
    }
    Ok(())
}

pub async fn topics(
    subject: Option<ResourceId>,
    title: Option<String>,
    active: Option<bool>,
) -> Result<(), CliError> {
    let client = get_client()?;
    let mut filter = Filter::new();
    if let Some(subject) = subject {
        filter = filter.push_id("subject", subject);
    }
    filter = filter.push_opt("title", title).push_opt("is_active", active);
    let topics: Vec<Topic> = client.topics.filter(&filter).await?;
    println!("Topics:");
    for topic in topics.iter() {
        println!(
            "#{}: {} / {} ({})",
            topic.id.unwrap_or_default(),
            topic.subject_name.as_deref().unwrap_or("?"),
            topic.title,
            active_mark(topic.is_active)
        );
    }
    Ok(())
}

pub async fn questions(
    topic: Option<ResourceId>,
    text: Option<String>,
    active: Option<bool>,
) -> Result<(), CliError> {
    let client = get_client()?;
    let mut filter = Filter::new();
    if let Some(topic) = topic {
        filter = filter.push_id("topic", topic);
    }
    filter = filter.push_opt("text", text).push_opt("is_active", active);
    let questions: Vec<Question> = client.questions.filter(&filter).await?;
    println!("Questions:");
    for question in questions.iter() {
        println!(
            "#{}: {} [{} choices] ({})",
            question.id.unwrap_or_default(),
            question.text,
            question.choices.len(),
            active_mark(question.is_active)
        );
    }
    Ok(())
}

pub async fn groups(
    name: Option<String>,
    teacher_subject: Option<ResourceId>,
    teacher_topic: Option<ResourceId>,
) -> Result<(), CliError> {
    let client = get_client()?;
    let mut filter = Filter::new().push_opt("name", name);
    if let Some(subject) = teacher_subject {
        filter = filter.push_id("teacher_subject", subject);
    }
    if let Some(topic) = teacher_topic {
        filter = filter.push_id("teacher_topic", topic);
    }
    let groups: Vec<Group> = client.groups.filter(&filter).await?;
    println!("Groups:");
    for group in groups.iter() {
        let assignment = group
            .teacher_assignment
            .as_ref()
            .and_then(|a| a.subject_name.as_deref())
            .unwrap_or("-");
        println!(
            "#{}: {} teaching: {} ({})",
            group.id.unwrap_or_default(),
            group.name,
            assignment,
            active_mark(group.is_active)
        );
    }
    Ok(())
}

pub async fn group_detail(id: ResourceId) -> Result<(), CliError> {
    let client = get_client()?;
    let group = client.groups.get(id).await?;
    let pretty = serde_json::to_string_pretty(&group)
        .map_err(|e| CliError::UnexpectedError(e.to_string()))?;
    println!("{}", pretty);
    Ok(())
}
