pub mod auth;
pub mod banner;
pub mod blog;
pub mod markdown;
pub mod portfolio;
pub mod resume;
