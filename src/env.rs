//! Environment lookup injected into configuration resolution.
//!
//! Finalize never touches the process environment directly; it reads through
//! an [`EnvSource`] so tests can resolve against a fixed map instead.

use std::collections::HashMap;

/// Read-only environment variable lookup.
pub trait EnvSource {
    /// Value of `key`, or `None` when the variable is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
