pub mod create_banner;
pub mod delete_banner;
pub mod list_all_banners;
pub mod list_public_banners;
pub mod patch_banner;
