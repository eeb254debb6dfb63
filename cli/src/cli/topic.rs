use studyhall_interfaces::{api::resource::interface::ResourceId, data::topic::Topic};

use crate::cli::client::get_client;

use super::error::CliError;

pub async fn create_topic(
    subject: ResourceId,
    title: &str,
    description: Option<String>,
) -> Result<(), CliError> {
    let client = get_client()?;
    let mut topic = Topic::new(subject, title);
    if let Some(description) = description {
        topic.description = description;
    }
    let saved = client.topics.save(&topic).await?;
    println!(
        "Created topic #{}: {}",
        saved.id.unwrap_or_default(),
        saved.title
    );
    Ok(())
}

pub async fn delete_topic(id: ResourceId) -> Result<(), CliError> {
    let client = get_client()?;
    let topic = client.topics.get(id).await?;
    client.topics.delete(&topic).await?;
    println!("Deleted topic #{}: {}", id, topic.title);
    Ok(())
}
