pub mod banners;
