pub mod education_repository;
pub mod experience_repository;
pub mod profile_repository;
pub mod skill_repository;

pub use education_repository::EducationRepository;
pub use experience_repository::ExperienceRepository;
pub use profile_repository::ProfileRepository;
pub use skill_repository::SkillRepository;

use thiserror::Error;

/// Shared failure type for the resume persistence ports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResumeRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}
