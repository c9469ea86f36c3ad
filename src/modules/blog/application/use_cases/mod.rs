pub mod create_post;
pub mod delete_post;
pub mod get_post_by_slug;
pub mod list_posts;
pub mod update_post;
