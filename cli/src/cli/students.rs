use studyhall_interfaces::api::{
    group::interface::GroupMembershipClientInterface as _, resource::interface::ResourceId,
};

use crate::cli::client::get_client;

use super::error::CliError;

pub async fn search_students(group: ResourceId, q: &str) -> Result<(), CliError> {
    let client = get_client()?;
    let results = client.group_membership.search_students(group, q).await?;
    println!("Students:");
    for result in results.iter() {
        let membership = if result.in_group { "in group" } else { "-" };
        println!(
            "user #{}: {} <{}> {}",
            result.user, result.username, result.email, membership
        );
    }
    Ok(())
}

pub async fn find_student(group: ResourceId, user: ResourceId) -> Result<(), CliError> {
    let client = get_client()?;
    let result = client.group_membership.find_student(group, user).await?;
    let membership = if result.in_group {
        "in group"
    } else {
        "not in group"
    };
    println!(
        "user #{}: {} <{}> {}",
        result.user, result.username, result.email, membership
    );
    Ok(())
}

pub async fn add_student(group: ResourceId, user: ResourceId) -> Result<(), CliError> {
    let client = get_client()?;
    let response = client.group_membership.add_student(group, user).await?;
    if response.added {
        println!("Added {} to group #{}", response.student.username, group);
    } else {
        println!("{} is already in group #{}", response.student.username, group);
    }
    Ok(())
}

pub async fn remove_student(group: ResourceId, user: ResourceId) -> Result<(), CliError> {
    let client = get_client()?;
    let response = client.group_membership.remove_student(group, user).await?;
    if response.removed {
        println!("Removed {} from group #{}", response.student.username, group);
    } else {
        println!("{} was not in group #{}", response.student.username, group);
    }
    Ok(())
}
