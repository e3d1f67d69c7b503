//! Deployment classification for the running NoteHub process.
//!
//! A process runs as exactly one deployment target. Extension contributions
//! may restrict themselves to a subset of targets; the registry consults
//! [`DeploymentContext`] when deciding whether a contribution is active.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The deployment targets a NoteHub process can run as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Deployment {
    /// The cloud-hosted multi-tenant service.
    Cloud,
    /// A self-hosted community edition install.
    Community,
    /// A self-hosted enterprise install.
    Enterprise,
}

impl Deployment {
    /// Returns the string name of this deployment target.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cloud => "cloud",
            Self::Community => "community",
            Self::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Deployment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cloud" => Ok(Self::Cloud),
            "community" => Ok(Self::Community),
            "enterprise" => Ok(Self::Enterprise),
            other => Err(AppError::configuration(format!(
                "Unknown deployment target '{other}'"
            ))),
        }
    }
}

/// The deployment signal consulted during contribution gating.
///
/// Exactly one question is asked: is this process the cloud-hosted service?
/// Everything self-hosted answers false.
pub trait DeploymentContext: Send + Sync {
    /// Whether the process runs as the cloud-hosted deployment.
    fn is_cloud_hosted(&self) -> bool;
}

/// A fixed deployment context, resolved once from configuration at startup.
#[derive(Debug, Clone, Copy)]
pub struct StaticDeployment(pub Deployment);

impl DeploymentContext for StaticDeployment {
    fn is_cloud_hosted(&self) -> bool {
        matches!(self.0, Deployment::Cloud)
    }
}
