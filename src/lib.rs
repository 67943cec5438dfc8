pub mod config;
pub mod domain;
pub mod error;
pub mod quiz;
pub mod session;
pub mod srs;
pub mod store;
