use clap::Parser;
use colored::Colorize as _;
use studyhall_cli::{
    args::{Args, Commands},
    cli::{
        assignment::{assign, clear_assignment, show_assignment, subject_groups},
        error::CliError,
        get::{group_detail, groups, questions, subjects, topics},
        students::{add_student, find_student, remove_student, search_students},
        topic::{create_topic, delete_topic},
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    let args = Args::parse();

    dotenvy::dotenv().ok();

    match main_process(args.command).await {
        Ok(_) => {}
        Err(e) => {
            println!("{}", e.to_string().red());
            std::process::exit(1);
        }
    }
    Ok(())
}

async fn main_process(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Subjects { name, active } => {
            subjects(name, active).await?;
        }
        Commands::Topics {
            subject,
            title,
            active,
        } => {
            topics(subject, title, active).await?;
        }
        Commands::Questions {
            topic,
            text,
            active,
        } => {
            questions(topic, text, active).await?;
        }
        Commands::Groups {
            name,
            teacher_subject,
            teacher_topic,
        } => {
            groups(name, teacher_subject, teacher_topic).await?;
        }
        Commands::Group { id } => {
            group_detail(id).await?;
        }
        Commands::CreateTopic {
            subject,
            title,
            description,
        } => {
            create_topic(subject, &title, description).await?;
        }
        Commands::DeleteTopic { id } => {
            delete_topic(id).await?;
        }
        Commands::Assignment { group } => {
            show_assignment(group).await?;
        }
        Commands::Assign {
            group,
            subject,
            topic,
        } => {
            assign(group, subject, topic).await?;
        }
        Commands::ClearAssignment { group } => {
            clear_assignment(group).await?;
        }
        Commands::SubjectGroups { subject } => {
            subject_groups(subject).await?;
        }
        Commands::SearchStudents { group, q } => {
            search_students(group, &q).await?;
        }
        Commands::FindStudent { group, user } => {
            find_student(group, user).await?;
        }
        Commands::AddStudent { group, user } => {
            add_student(group, user).await?;
        }
        Commands::RemoveStudent { group, user } => {
            remove_student(group, user).await?;
        }
    }
    Ok(())
}
