//! Smoke test for logging initialization.
//!
//! `init_logging` installs a global subscriber, so this file keeps a single
//! test that initializes once and emits through it.

use azure_provision::logging::{init_logging, LoggingConfig};
use azure_provision::AzureConfig;
use std::collections::HashMap;

#[test]
fn test_init_logging_and_emit() {
    let config = LoggingConfig {
        level: "debug".to_string(),
        format: "text".to_string(),
        color: false,
    };
    init_logging(Some(&config)).expect("logging init should succeed");

    // Exercise the finalize path that logs generated names under the
    // installed subscriber.
    let resolved = AzureConfig::new().finalize(&HashMap::new());
    assert!(!resolved.vm_name.is_empty());

    tracing::info!(vm_name = %resolved.vm_name, "resolved configuration");
}
