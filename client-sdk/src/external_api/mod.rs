pub mod group;
pub mod resource;
pub mod teacher_assignment;
pub mod utils;
