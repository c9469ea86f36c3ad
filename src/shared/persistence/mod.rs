pub mod replace;

pub use replace::replace_collection;
