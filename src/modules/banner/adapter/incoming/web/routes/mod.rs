pub mod admin_banners;
pub mod manage_banner;
pub mod public_banners;
