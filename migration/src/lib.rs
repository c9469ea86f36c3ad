pub use sea_orm_migration::prelude::*;

mod m20260315_000001_create_admin_sessions_table;
mod m20260315_000002_create_resume_profiles_table;
mod m20260315_000003_create_skills_table;
mod m20260315_000004_create_work_experiences_table;
mod m20260315_000005_create_education_entries_table;
mod m20260315_000006_create_portfolio_projects_table;
mod m20260315_000007_create_blog_posts_table;
mod m20260315_000008_create_banners_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260315_000001_create_admin_sessions_table::Migration),
            Box::new(m20260315_000002_create_resume_profiles_table::Migration),
            Box::new(m20260315_000003_create_skills_table::Migration),
            Box::new(m20260315_000004_create_work_experiences_table::Migration),
            Box::new(m20260315_000005_create_education_entries_table::Migration),
            Box::new(m20260315_000006_create_portfolio_projects_table::Migration),
            Box::new(m20260315_000007_create_blog_posts_table::Migration),
            Box::new(m20260315_000008_create_banners_table::Migration),
        ]
    }
}
