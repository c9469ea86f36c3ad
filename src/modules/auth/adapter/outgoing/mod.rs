pub mod github_oauth;
pub mod sea_orm_entity;
pub mod session_repository_postgres;
