//! Configuration System
//!
//! Two-stage configuration for Azure VM provisioning. [`AzureConfig`] is the
//! unresolved builder: every field is optional, `None` meaning the caller has
//! not touched it, while `Some(v)` is explicitly set even when `v` is empty.
//! [`AzureConfig::finalize`] consumes the builder and produces a
//! [`ResolvedConfig`], filling each unset field from the injected environment
//! or a static default. Validation accepts only the resolved type, so the
//! finalize-before-validate ordering is enforced by the compiler rather than
//! by convention.

use crate::env::EnvSource;
use crate::names;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod defaults;
mod file;

/// Unresolved provisioning configuration.
///
/// Resolution precedence per field: explicit caller value, then environment
/// variable (where one applies), then static default or generated name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AzureConfig {
    /// Azure Active Directory tenant ID -- `AZURE_TENANT_ID`
    pub tenant_id: Option<String>,

    /// Azure Active Directory application client ID -- `AZURE_CLIENT_ID`
    pub client_id: Option<String>,

    /// Azure Active Directory application client secret -- `AZURE_CLIENT_SECRET`
    pub client_secret: Option<String>,

    /// Azure subscription ID -- `AZURE_SUBSCRIPTION_ID`
    pub subscription_id: Option<String>,

    /// Management API endpoint -- `AZURE_MANAGEMENT_ENDPOINT`, else
    /// `https://management.azure.com`
    pub endpoint: Option<String>,

    /// Resource group to deploy into; generated when unset
    pub resource_group_name: Option<String>,

    /// Azure location for the VM; defaults to `westus`
    pub location: Option<String>,

    /// Virtual machine name; generated when unset
    pub vm_name: Option<String>,

    /// VM password. Not recommended for *nix deployments
    pub vm_password: Option<String>,

    /// VM size; defaults to `Standard_DS2_v2`
    pub vm_size: Option<String>,

    /// Image URN to deploy; defaults to an Ubuntu 16.04 LTS reference
    pub vm_image_urn: Option<String>,

    /// Virtual network resource name
    pub virtual_network_name: Option<String>,

    /// Subnet resource name
    pub subnet_name: Option<String>,

    /// TCP endpoints to open up for the VM
    pub tcp_endpoints: Option<String>,

    /// Availability set name
    pub availability_set_name: Option<String>,

    /// Seconds to wait for an instance to become ready; defaults to 120
    pub instance_ready_timeout: Option<u64>,

    /// Seconds between instance state checks; defaults to 2
    pub instance_check_interval: Option<u64>,

    /// Admin username for Windows templates -- `AZURE_VM_ADMIN_USERNAME`,
    /// else `vagrant`
    pub admin_username: Option<String>,

    /// Admin password for Windows templates -- `AZURE_VM_ADMIN_PASSWORD`
    pub admin_password: Option<String>,

    /// Install a self-signed cert and open the firewall port for WinRM over
    /// https; defaults to true
    pub winrm_install_self_signed_cert: Option<bool>,

    /// Custom deployment template
    pub deployment_template: Option<String>,

    /// Wait for all resources to be deleted before completing a destroy;
    /// defaults to false
    pub wait_for_destroy: Option<bool>,
}

/// Fully resolved provisioning configuration, produced by
/// [`AzureConfig::finalize`]. Credential and purely optional fields stay
/// `Option<String>` because resolution may legitimately leave them absent;
/// everything else is concrete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub tenant_id: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub subscription_id: Option<String>,
    pub endpoint: String,
    pub resource_group_name: String,
    pub location: String,
    pub vm_name: String,
    pub vm_password: Option<String>,
    pub vm_size: String,
    pub vm_image_urn: String,
    pub virtual_network_name: Option<String>,
    pub subnet_name: Option<String>,
    pub tcp_endpoints: Option<String>,
    pub availability_set_name: Option<String>,
    pub instance_ready_timeout: u64,
    pub instance_check_interval: u64,
    pub admin_username: String,
    pub admin_password: String,
    pub winrm_install_self_signed_cert: bool,
    pub deployment_template: Option<String>,
    pub wait_for_destroy: bool,
}

impl AzureConfig {
    /// Create a configuration with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every unset field, consuming the builder.
    ///
    /// Total: there is no failure path. Explicitly set fields are never
    /// overwritten, including fields the caller set to an empty value. The
    /// environment is only read through `env`, never written.
    pub fn finalize(self, env: &dyn EnvSource) -> ResolvedConfig {
        let endpoint = self
            .endpoint
            .or_else(|| env.var(defaults::ENV_MANAGEMENT_ENDPOINT))
            .unwrap_or_else(|| defaults::DEFAULT_ENDPOINT.to_string());

        let vm_name = self.vm_name.unwrap_or_else(|| {
            let name = names::generate();
            debug!(vm_name = %name, "generated vm name");
            name
        });
        let resource_group_name = self.resource_group_name.unwrap_or_else(|| {
            let name = names::generate();
            debug!(resource_group_name = %name, "generated resource group name");
            name
        });

        ResolvedConfig {
            tenant_id: self
                .tenant_id
                .or_else(|| env.var(defaults::ENV_TENANT_ID)),
            client_id: self
                .client_id
                .or_else(|| env.var(defaults::ENV_CLIENT_ID)),
            client_secret: self
                .client_secret
                .or_else(|| env.var(defaults::ENV_CLIENT_SECRET)),
            subscription_id: self
                .subscription_id
                .or_else(|| env.var(defaults::ENV_SUBSCRIPTION_ID)),
            endpoint,
            resource_group_name,
            location: self
                .location
                .unwrap_or_else(|| defaults::DEFAULT_LOCATION.to_string()),
            vm_name,
            vm_password: self.vm_password,
            vm_size: self
                .vm_size
                .unwrap_or_else(|| defaults::DEFAULT_VM_SIZE.to_string()),
            vm_image_urn: self
                .vm_image_urn
                .unwrap_or_else(|| defaults::DEFAULT_VM_IMAGE_URN.to_string()),
            virtual_network_name: self.virtual_network_name,
            subnet_name: self.subnet_name,
            tcp_endpoints: self.tcp_endpoints,
            availability_set_name: self.availability_set_name,
            instance_ready_timeout: self
                .instance_ready_timeout
                .unwrap_or(defaults::DEFAULT_INSTANCE_READY_TIMEOUT),
            instance_check_interval: self
                .instance_check_interval
                .unwrap_or(defaults::DEFAULT_INSTANCE_CHECK_INTERVAL),
            admin_username: self
                .admin_username
                .or_else(|| env.var(defaults::ENV_ADMIN_USERNAME))
                .unwrap_or_else(|| defaults::DEFAULT_ADMIN_USERNAME.to_string()),
            admin_password: self
                .admin_password
                .or_else(|| env.var(defaults::ENV_ADMIN_PASSWORD))
                .unwrap_or_else(|| defaults::DEFAULT_ADMIN_PASSWORD.to_string()),
            winrm_install_self_signed_cert: self
                .winrm_install_self_signed_cert
                .unwrap_or(defaults::DEFAULT_WINRM_INSTALL_SELF_SIGNED_CERT),
            deployment_template: self.deployment_template,
            wait_for_destroy: self
                .wait_for_destroy
                .unwrap_or(defaults::DEFAULT_WAIT_FOR_DESTROY),
        }
    }
}

/// Re-wrap every resolved field as explicitly set. Finalizing the result
/// changes nothing, which is how resolution idempotence is expressed across
/// the two-stage types.
impl From<ResolvedConfig> for AzureConfig {
    fn from(resolved: ResolvedConfig) -> Self {
        AzureConfig {
            tenant_id: resolved.tenant_id,
            client_id: resolved.client_id,
            client_secret: resolved.client_secret,
            subscription_id: resolved.subscription_id,
            endpoint: Some(resolved.endpoint),
            resource_group_name: Some(resolved.resource_group_name),
            location: Some(resolved.location),
            vm_name: Some(resolved.vm_name),
            vm_password: resolved.vm_password,
            vm_size: Some(resolved.vm_size),
            vm_image_urn: Some(resolved.vm_image_urn),
            virtual_network_name: resolved.virtual_network_name,
            subnet_name: resolved.subnet_name,
            tcp_endpoints: resolved.tcp_endpoints,
            availability_set_name: resolved.availability_set_name,
            instance_ready_timeout: Some(resolved.instance_ready_timeout),
            instance_check_interval: Some(resolved.instance_check_interval),
            admin_username: Some(resolved.admin_username),
            admin_password: Some(resolved.admin_password),
            winrm_install_self_signed_cert: Some(resolved.winrm_install_self_signed_cert),
            deployment_template: resolved.deployment_template,
            wait_for_destroy: Some(resolved.wait_for_destroy),
        }
    }
}
