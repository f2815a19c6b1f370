//! Default constants and environment variable names used by finalize.

/// Environment variables consulted when a field is unset.
pub const ENV_MANAGEMENT_ENDPOINT: &str = "AZURE_MANAGEMENT_ENDPOINT";
pub const ENV_SUBSCRIPTION_ID: &str = "AZURE_SUBSCRIPTION_ID";
pub const ENV_TENANT_ID: &str = "AZURE_TENANT_ID";
pub const ENV_CLIENT_ID: &str = "AZURE_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "AZURE_CLIENT_SECRET";
pub const ENV_ADMIN_USERNAME: &str = "AZURE_VM_ADMIN_USERNAME";
pub const ENV_ADMIN_PASSWORD: &str = "AZURE_VM_ADMIN_PASSWORD";

/// Static defaults applied when neither the caller nor the environment
/// provides a value.
pub const DEFAULT_ENDPOINT: &str = "https://management.azure.com";
pub const DEFAULT_LOCATION: &str = "westus";
pub const DEFAULT_VM_SIZE: &str = "Standard_DS2_v2";
pub const DEFAULT_VM_IMAGE_URN: &str = "canonical:ubuntuserver:16.04.0-LTS:latest";
pub const DEFAULT_INSTANCE_READY_TIMEOUT: u64 = 120;
pub const DEFAULT_INSTANCE_CHECK_INTERVAL: u64 = 2;
pub const DEFAULT_ADMIN_USERNAME: &str = "vagrant";
pub const DEFAULT_ADMIN_PASSWORD: &str = "$Vagrant(0)";
pub const DEFAULT_WINRM_INSTALL_SELF_SIGNED_CERT: bool = true;
pub const DEFAULT_WAIT_FOR_DESTROY: bool = false;
