//! End-to-end resolution scenarios against an injected environment.

use azure_provision::config::defaults;
use azure_provision::AzureConfig;
use std::collections::HashMap;

fn empty_env() -> HashMap<String, String> {
    HashMap::new()
}

#[test]
fn test_empty_config_empty_env_applies_all_defaults() {
    let resolved = AzureConfig::new().finalize(&empty_env());

    assert_eq!(resolved.endpoint, "https://management.azure.com");
    assert_eq!(resolved.location, "westus");
    assert_eq!(resolved.vm_size, "Standard_DS2_v2");
    assert_eq!(resolved.admin_username, "vagrant");
    assert_eq!(resolved.instance_ready_timeout, 120);
    assert_eq!(resolved.instance_check_interval, 2);

    // Only the subscription and combined credential rules fire; the endpoint
    // rule passes because the default was applied during finalize.
    let errors = resolved.validate();
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_env_provided_credentials_validate_clean() {
    let mut env = HashMap::new();
    env.insert("AZURE_SUBSCRIPTION_ID".to_string(), "sub1".to_string());
    env.insert("AZURE_TENANT_ID".to_string(), "t1".to_string());
    env.insert("AZURE_CLIENT_ID".to_string(), "c1".to_string());
    env.insert("AZURE_CLIENT_SECRET".to_string(), "s1".to_string());

    let resolved = AzureConfig::new().finalize(&env);

    assert!(resolved.validate().is_empty());
    assert_eq!(resolved.subscription_id.as_deref(), Some("sub1"));
}

#[test]
fn test_explicit_vm_name_is_kept() {
    let config = AzureConfig {
        vm_name: Some("myvm".to_string()),
        ..AzureConfig::new()
    };
    let resolved = config.finalize(&empty_env());

    assert_eq!(resolved.vm_name, "myvm");
}

#[test]
fn test_two_fresh_configs_get_independent_generated_names() {
    let first = AzureConfig::new().finalize(&empty_env());
    let second = AzureConfig::new().finalize(&empty_env());

    for name in [&first.vm_name, &second.vm_name] {
        assert!(!name.is_empty());
        assert!(
            name.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "name must be resource-safe: {}",
            name
        );
    }
    // The two generations are allowed to differ (and usually do); the only
    // requirement is that both are well-formed, so no equality assertion.
}

#[test]
fn test_finalize_twice_is_a_noop() {
    let mut env = HashMap::new();
    env.insert("AZURE_SUBSCRIPTION_ID".to_string(), "sub1".to_string());

    let first = AzureConfig::new().finalize(&env);
    let second = AzureConfig::from(first.clone()).finalize(&empty_env());

    assert_eq!(first, second);
}

#[test]
fn test_defaults_module_matches_resolved_output() {
    let resolved = AzureConfig::new().finalize(&empty_env());

    assert_eq!(resolved.endpoint, defaults::DEFAULT_ENDPOINT);
    assert_eq!(resolved.vm_image_urn, defaults::DEFAULT_VM_IMAGE_URN);
    assert_eq!(resolved.admin_password, defaults::DEFAULT_ADMIN_PASSWORD);
    assert_eq!(
        resolved.winrm_install_self_signed_cert,
        defaults::DEFAULT_WINRM_INSTALL_SELF_SIGNED_CERT
    );
    assert_eq!(resolved.wait_for_destroy, defaults::DEFAULT_WAIT_FOR_DESTROY);
}
