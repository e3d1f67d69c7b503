//! # notehub-core
//!
//! Core crate for NoteHub. Contains configuration schemas, the deployment
//! classification used to gate extension contributions, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other NoteHub crates.

pub mod config;
pub mod deployment;
pub mod error;
pub mod result;

pub use deployment::{Deployment, DeploymentContext, StaticDeployment};
pub use error::AppError;
pub use result::AppResult;
