pub mod converter;
pub mod error;
pub mod geometry;
pub mod source;
