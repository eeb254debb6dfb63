use clap::{Parser, Subcommand};
use studyhall_interfaces::api::resource::interface::ResourceId;

#[derive(Parser)]
#[clap(name = "studyhall_cli")]
#[clap(about = "Teacher command line for the studyhall backend")]
pub struct Args {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List subjects, optionally narrowed by name fragment or active flag
    Subjects {
        #[clap(long)]
        name: Option<String>,
        #[clap(long)]
        active: Option<bool>,
    },
    /// List topics
    Topics {
        #[clap(long)]
        subject: Option<ResourceId>,
        #[clap(long)]
        title: Option<String>,
        #[clap(long)]
        active: Option<bool>,
    },
    /// List questions
    Questions {
        #[clap(long)]
        topic: Option<ResourceId>,
        #[clap(long)]
        text: Option<String>,
        #[clap(long)]
        active: Option<bool>,
    },
    /// List groups
    Groups {
        #[clap(long)]
        name: Option<String>,
        #[clap(long)]
        teacher_subject: Option<ResourceId>,
        #[clap(long)]
        teacher_topic: Option<ResourceId>,
    },
    /// Show one group with its students
    Group {
        #[clap(long)]
        id: ResourceId,
    },
    CreateTopic {
        #[clap(long)]
        subject: ResourceId,
        #[clap(long)]
        title: String,
        #[clap(long)]
        description: Option<String>,
    },
    DeleteTopic {
        #[clap(long)]
        id: ResourceId,
    },
    /// Show the teaching assignment for a group
    Assignment {
        #[clap(long)]
        group: ResourceId,
    },
    /// Set the subject/topic taught to a group
    Assign {
        #[clap(long)]
        group: ResourceId,
        #[clap(long)]
        subject: Option<ResourceId>,
        #[clap(long)]
        topic: Option<ResourceId>,
    },
    ClearAssignment {
        #[clap(long)]
        group: ResourceId,
    },
    /// List the groups assigned to the requesting teacher for a subject
    SubjectGroups {
        #[clap(long)]
        subject: ResourceId,
    },
    SearchStudents {
        #[clap(long)]
        group: ResourceId,
        #[clap(long)]
        q: String,
    },
    FindStudent {
        #[clap(long)]
        group: ResourceId,
        #[clap(long)]
        user: ResourceId,
    },
    AddStudent {
        #[clap(long)]
        group: ResourceId,
        #[clap(long)]
        user: ResourceId,
    },
    RemoveStudent {
        #[clap(long)]
        group: ResourceId,
        #[clap(long)]
        user: ResourceId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_topics_listing() {
        let args = Args::try_parse_from([
            "studyhall_cli",
            "topics",
            "--subject",
            "3",
            "--active",
            "true",
        ])
        .unwrap();
        match args.command {
            Commands::Topics {
                subject,
                title,
                active,
            } => {
                assert_eq!(subject, Some(3));
                assert_eq!(title, None);
                assert_eq!(active, Some(true));
            }
            _ => panic!("Expected Commands::Topics"),
        }
    }

    #[test]
    fn test_parse_assign_without_subject_or_topic() {
        let args = Args::try_parse_from(["studyhall_cli", "assign", "--group", "5"]).unwrap();
        match args.command {
            Commands::Assign {
                group,
                subject,
                topic,
            } => {
                assert_eq!(group, 5);
                assert_eq!(subject, None);
                assert_eq!(topic, None);
            }
            _ => panic!("Expected Commands::Assign"),
        }
    }
}
