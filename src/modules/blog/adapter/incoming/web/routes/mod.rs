pub mod manage_post;
pub mod post_by_slug;
pub mod posts;
