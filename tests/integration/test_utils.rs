//! Shared test utilities for integration tests
//!
//! Centralized setup/teardown for the AZURE_* environment variables so tests
//! that exercise the real process environment stay isolated from each other
//! and from the developer's shell.

use std::sync::{Mutex, MutexGuard};

/// Serializes process-environment access across all tests in this binary to
/// prevent race conditions when tests run in parallel.
static AZURE_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Every environment variable consulted during finalize.
pub const AZURE_VARS: &[&str] = &[
    "AZURE_MANAGEMENT_ENDPOINT",
    "AZURE_SUBSCRIPTION_ID",
    "AZURE_TENANT_ID",
    "AZURE_CLIENT_ID",
    "AZURE_CLIENT_SECRET",
    "AZURE_VM_ADMIN_USERNAME",
    "AZURE_VM_ADMIN_PASSWORD",
];

/// Holds the lock, scrubs the AZURE_* variables on creation and restores
/// their original values on drop.
pub struct AzureEnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

/// Set up a scrubbed process environment for a test with automatic cleanup.
pub fn scrubbed_azure_env() -> AzureEnvGuard {
    let lock = AZURE_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let saved = AZURE_VARS
        .iter()
        .map(|key| (*key, std::env::var(key).ok()))
        .collect();
    for key in AZURE_VARS {
        std::env::remove_var(key);
    }
    AzureEnvGuard { saved, _lock: lock }
}

impl AzureEnvGuard {
    pub fn set(&self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }
}

impl Drop for AzureEnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}
