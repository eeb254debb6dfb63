pub mod error;
pub mod group;
pub mod resource;
pub mod teacher_assignment;
