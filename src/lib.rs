//! Azure Provision: Configuration Resolution for VM Provisioning
//!
//! A two-stage configuration core consumed by an external provisioning
//! engine: callers set any subset of fields on [`AzureConfig`], `finalize`
//! fills the rest from the environment or static defaults, and validation
//! runs only over the resulting [`ResolvedConfig`].

pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod names;
pub mod validation;

pub use config::{AzureConfig, ResolvedConfig};
pub use env::{EnvSource, ProcessEnv};
pub use error::ConfigError;
pub use validation::{ValidationError, ValidationReport, PROVIDER_DISPLAY_NAME};
