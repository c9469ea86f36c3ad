pub mod delete_project;
pub mod projects;
