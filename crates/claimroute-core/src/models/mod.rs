//! Data models and configuration.

pub mod claim;
pub mod config;
