pub mod delete_project;
pub mod get_projects;
pub mod replace_projects;
