pub mod education_entries;
pub mod resume_profiles;
pub mod skills;
pub mod work_experiences;
