//! TOML file source for configuration overrides.
//!
//! Any subset of fields may appear in the file; absent fields stay unset so
//! later layers (programmatic overrides, environment, defaults) can fill
//! them. Precedence across layers: later source wins, applied via
//! [`AzureConfig::merge`].

use super::AzureConfig;
use crate::error::ConfigError;
use std::path::Path;
use tracing::debug;

impl AzureConfig {
    /// Load overrides from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AzureConfig =
            toml::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), "loaded config file overrides");
        Ok(config)
    }

    /// Overlay `overrides` on top of `self`. Fields explicitly set in
    /// `overrides` win; unset fields fall through to `self`.
    pub fn merge(self, overrides: AzureConfig) -> AzureConfig {
        AzureConfig {
            tenant_id: overrides.tenant_id.or(self.tenant_id),
            client_id: overrides.client_id.or(self.client_id),
            client_secret: overrides.client_secret.or(self.client_secret),
            subscription_id: overrides.subscription_id.or(self.subscription_id),
            endpoint: overrides.endpoint.or(self.endpoint),
            resource_group_name: overrides.resource_group_name.or(self.resource_group_name),
            location: overrides.location.or(self.location),
            vm_name: overrides.vm_name.or(self.vm_name),
            vm_password: overrides.vm_password.or(self.vm_password),
            vm_size: overrides.vm_size.or(self.vm_size),
            vm_image_urn: overrides.vm_image_urn.or(self.vm_image_urn),
            virtual_network_name: overrides
                .virtual_network_name
                .or(self.virtual_network_name),
            subnet_name: overrides.subnet_name.or(self.subnet_name),
            tcp_endpoints: overrides.tcp_endpoints.or(self.tcp_endpoints),
            availability_set_name: overrides
                .availability_set_name
                .or(self.availability_set_name),
            instance_ready_timeout: overrides
                .instance_ready_timeout
                .or(self.instance_ready_timeout),
            instance_check_interval: overrides
                .instance_check_interval
                .or(self.instance_check_interval),
            admin_username: overrides.admin_username.or(self.admin_username),
            admin_password: overrides.admin_password.or(self.admin_password),
            winrm_install_self_signed_cert: overrides
                .winrm_install_self_signed_cert
                .or(self.winrm_install_self_signed_cert),
            deployment_template: overrides.deployment_template.or(self.deployment_template),
            wait_for_destroy: overrides.wait_for_destroy.or(self.wait_for_destroy),
        }
    }
}
