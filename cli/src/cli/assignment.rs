use studyhall_interfaces::api::{
    resource::interface::ResourceId,
    teacher_assignment::{
        interface::TeacherAssignmentClientInterface as _,
        types::{TeacherAssignment, TeacherAssignmentUpdate},
    },
};

use crate::cli::client::get_client;

use super::error::CliError;

fn print_assignment(assignment: &TeacherAssignment) {
    if !assignment.is_assigned() {
        println!("No assignment");
        return;
    }
    println!(
        "Assignment #{}: subject: {} topic: {}",
        assignment.id.unwrap_or_default(),
        assignment.subject_name.as_deref().unwrap_or("-"),
        assignment.topic_title.as_deref().unwrap_or("-"),
    );
}

pub async fn show_assignment(group: ResourceId) -> Result<(), CliError> {
    let client = get_client()?;
    let assignment = client.teacher_assignments.get(group).await?;
    print_assignment(&assignment);
    Ok(())
}

pub async fn assign(
    group: ResourceId,
    subject: Option<ResourceId>,
    topic: Option<ResourceId>,
) -> Result<(), CliError> {
    let client = get_client()?;
    let update = TeacherAssignmentUpdate { subject, topic };
    let assignment = client.teacher_assignments.save(group, &update).await?;
    print_assignment(&assignment);
    Ok(())
}

pub async fn clear_assignment(group: ResourceId) -> Result<(), CliError> {
    let client = get_client()?;
    client.teacher_assignments.clear(group).await?;
    println!("Cleared assignment for group #{}", group);
    Ok(())
}

pub async fn subject_groups(subject: ResourceId) -> Result<(), CliError> {
    let client = get_client()?;
    let assignments = client.teacher_assignments.list_for_subject(subject).await?;
    println!("Assigned groups:");
    for assignment in assignments.iter() {
        println!(
            "#{}: {} topic: {}",
            assignment.group.unwrap_or_default(),
            assignment.group_name.as_deref().unwrap_or("?"),
            assignment.topic_title.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}
