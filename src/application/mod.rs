pub mod batch;
pub mod converter;
