pub mod api;
pub mod persistence;
