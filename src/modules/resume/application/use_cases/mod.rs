pub mod get_education;
pub mod get_experience;
pub mod get_profile;
pub mod get_resume;
pub mod get_skills;
pub mod replace_education;
pub mod replace_experience;
pub mod replace_skills;
pub mod update_profile;
