pub mod banner_repository;

pub use banner_repository::{BannerRepository, BannerRepositoryError};
