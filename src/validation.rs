//! Presence validation over the resolved configuration.
//!
//! Validation never fails as an operation: every applicable rule is checked
//! independently and all violations come back together. The caller decides
//! whether to abort, typically when any group in the report is non-empty.

use crate::config::ResolvedConfig;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Display name under which validation messages are grouped when surfaced to
/// the end user.
pub const PROVIDER_DISPLAY_NAME: &str = "Microsoft Azure Provider";

/// A missing required configuration value. The only error taxonomy this
/// component produces; nothing here is transient or retriable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("An Azure subscription_id is required; set subscription_id or AZURE_SUBSCRIPTION_ID")]
    SubscriptionIdRequired,

    #[error("An Azure management endpoint is required; set endpoint or AZURE_MANAGEMENT_ENDPOINT")]
    EndpointRequired,

    #[error(
        "Azure credentials are required: tenant_id, client_id and client_secret must all be set \
         (AZURE_TENANT_ID, AZURE_CLIENT_ID, AZURE_CLIENT_SECRET)"
    )]
    AuthRequired,
}

impl ResolvedConfig {
    /// Check the resolved configuration for missing required values.
    ///
    /// Rules are evaluated independently, not short-circuited, so multiple
    /// violations are all reported. The three credential fields produce a
    /// single combined error when any of them is missing.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if is_blank(&self.subscription_id) {
            errors.push(ValidationError::SubscriptionIdRequired);
        }
        if self.endpoint.is_empty() {
            errors.push(ValidationError::EndpointRequired);
        }
        if is_blank(&self.tenant_id) || is_blank(&self.client_id) || is_blank(&self.client_secret)
        {
            errors.push(ValidationError::AuthRequired);
        }

        errors
    }

    /// Validate and package the outcome as a named error group for whatever
    /// surfaces failures to the end user.
    pub fn validation_report(&self) -> ValidationReport {
        ValidationReport::from_errors(self.validate())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Named error-group structure,
/// `{ "Microsoft Azure Provider" => [message, ...] }`. The group key is
/// always present; an empty message list means the configuration passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    #[serde(flatten)]
    groups: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        let messages = errors.iter().map(ToString::to_string).collect();
        let mut groups = BTreeMap::new();
        groups.insert(PROVIDER_DISPLAY_NAME.to_string(), messages);
        Self { groups }
    }

    /// True when no group carries any message.
    pub fn is_ok(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }

    /// Messages recorded for the provider group.
    pub fn messages(&self) -> &[String] {
        self.groups
            .get(PROVIDER_DISPLAY_NAME)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// JSON rendering of the group map for machine consumers.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self.groups)
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (group, messages) in &self.groups {
            writeln!(f, "{}:", group)?;
            for message in messages {
                writeln!(f, "* {}", message)?;
            }
        }
        Ok(())
    }
}
