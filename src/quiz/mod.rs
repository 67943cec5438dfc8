pub mod composer;
pub mod options;

pub use composer::{compose, compose_with};
