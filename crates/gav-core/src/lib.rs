//! Core types and configuration for GAV.
//!
//! This crate provides the building blocks shared by the GAV signing and
//! verification crates: environment-driven configuration, the core error
//! type, and the validated principal identifier carried in credential tokens.

mod config;
mod error;
mod types;

pub use config::GavConfig;
pub use error::{GavError, GavResult};
pub use types::PrincipalId;
