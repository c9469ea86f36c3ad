pub mod education_repository_postgres;
pub mod experience_repository_postgres;
pub mod profile_repository_postgres;
pub mod sea_orm_entity;
pub mod skill_repository_postgres;
