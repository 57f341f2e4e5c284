pub mod config;
pub mod dimension;
pub mod rating;

pub use dimension::Dimension;
pub use rating::Rating;
