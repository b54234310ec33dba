//! Aggregate service façade for the vmrest crate.
//!
//! `VmrestService` owns the `VmrestClient` and exposes every domain
//! operation. Shared handles hold `VmrestServiceState = Arc<Mutex<VmrestService>>`.

use crate::client::VmrestClient;
use crate::error::{VmrestError, VmrestResult};
use crate::nic::NicManager;
use crate::power::PowerManager;
use crate::response::ApiResponse;
use crate::shared_folder::SharedFolderManager;
use crate::types::*;
use crate::vm::VmManager;
use crate::vmnet::HostNetworkManager;

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Thread-safe handle to a shared service.
pub type VmrestServiceState = Arc<Mutex<VmrestService>>;

/// Top-level service that aggregates all vmrest subsystems.
#[derive(Default)]
pub struct VmrestService {
    client: Option<VmrestClient>,
    config: Option<VmrestConfig>,
}

impl VmrestService {
    /// Create a new (disconnected) service.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_state() -> VmrestServiceState {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    fn require_client(&self) -> VmrestResult<&VmrestClient> {
        self.client.as_ref().ok_or_else(VmrestError::not_connected)
    }

    /// Borrow the connected client for calls not covered by the façade.
    pub fn client(&self) -> VmrestResult<&VmrestClient> {
        self.require_client()
    }

    // ── Connection ──────────────────────────────────────────────────

    /// Build a client and authenticate with the config's credentials.
    /// The client is only kept when the probe answers 200.
    pub async fn connect(&mut self, config: VmrestConfig) -> VmrestResult<u16> {
        let mut client = VmrestClient::new(&config)?;
        let status = client.authenticate_with_config().await?;
        match status {
            200 => {
                log::info!("Connected to vmrest at {}", client.base_url());
                self.config = Some(config);
                self.client = Some(client);
                Ok(status)
            }
            401 => Err(VmrestError::auth(format!(
                "vmrest rejected credentials for '{}'",
                config.username
            ))),
            other => Err(VmrestError::api(
                other,
                format!("Unexpected status {other} from vmrest authentication probe"),
            )),
        }
    }

    pub fn disconnect(&mut self) {
        if self.client.take().is_some() {
            log::info!("Disconnected from vmrest");
        }
        self.config = None;
    }

    /// Get current config (without password).
    pub fn get_config(&self) -> Option<VmrestConfigSafe> {
        self.config.as_ref().map(|c| VmrestConfigSafe {
            host: c.host.clone(),
            port: c.port,
            username: c.username.clone(),
            base_url: c.base_url(),
        })
    }

    // ── Host networks ───────────────────────────────────────────────

    pub async fn list_vmnets(&self) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        HostNetworkManager::new(c).list_vmnets().await
    }

    pub async fn create_vmnet(&self, spec: &VmnetCreateSpec) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        HostNetworkManager::new(c).create_vmnet(spec).await
    }

    pub async fn get_mac_to_ip(&self, vmnet: &str) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        HostNetworkManager::new(c).get_mac_to_ip(vmnet).await
    }

    pub async fn update_mac_to_ip(
        &self,
        vmnet: &str,
        mac: &str,
        binding: &MacToIpBinding,
    ) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        HostNetworkManager::new(c).update_mac_to_ip(vmnet, mac, binding).await
    }

    pub async fn get_port_forwards(&self, vmnet: &str) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        HostNetworkManager::new(c).get_port_forwards(vmnet).await
    }

    pub async fn update_port_forward(
        &self,
        vmnet: &str,
        protocol: &str,
        port: u16,
        rule: &PortForwardRule,
    ) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        HostNetworkManager::new(c)
            .update_port_forward(vmnet, protocol, port, rule)
            .await
    }

    pub async fn delete_port_forward(
        &self,
        vmnet: &str,
        protocol: &str,
        port: u16,
    ) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        HostNetworkManager::new(c)
            .delete_port_forward(vmnet, protocol, port)
            .await
    }

    // ── VM operations ───────────────────────────────────────────────

    pub async fn list_vms(&self) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        VmManager::new(c).list_vms().await
    }

    pub async fn list_vm_summaries(&self) -> VmrestResult<Vec<VmSummary>> {
        let c = self.require_client()?;
        VmManager::new(c).list_vm_summaries().await
    }

    pub async fn get_vm(&self, vm_id: &str) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        VmManager::new(c).get_vm(vm_id).await
    }

    pub async fn get_vm_param(&self, vm_id: &str, name: &str) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        VmManager::new(c).get_vm_param(vm_id, name).await
    }

    pub async fn get_vm_restrictions(&self, vm_id: &str) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        VmManager::new(c).get_vm_restrictions(vm_id).await
    }

    pub async fn update_vm(&self, vm_id: &str, settings: &VmSettingsUpdate) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        VmManager::new(c).update_vm(vm_id, settings).await
    }

    pub async fn update_vm_config(&self, vm_id: &str, param: &ConfigParam) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        VmManager::new(c).update_vm_config(vm_id, param).await
    }

    pub async fn copy_vm(&self, spec: &VmCloneSpec) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        VmManager::new(c).copy_vm(spec).await
    }

    pub async fn register_vm(&self, spec: &VmRegisterSpec) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        VmManager::new(c).register_vm(spec).await
    }

    pub async fn delete_vm(&self, vm_id: &str) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        VmManager::new(c).delete_vm(vm_id).await
    }

    // ── NICs ────────────────────────────────────────────────────────

    pub async fn get_vm_ip(&self, vm_id: &str) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        NicManager::new(c).get_ip(vm_id).await
    }

    pub async fn list_nics(&self, vm_id: &str) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        NicManager::new(c).list_nics(vm_id).await
    }

    pub async fn create_nic(&self, vm_id: &str, spec: &NicSpec) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        NicManager::new(c).create_nic(vm_id, spec).await
    }

    pub async fn update_nic(&self, vm_id: &str, index: u32, spec: &NicSpec) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        NicManager::new(c).update_nic(vm_id, index, spec).await
    }

    pub async fn delete_nic(&self, vm_id: &str, index: u32) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        NicManager::new(c).delete_nic(vm_id, index).await
    }

    // ── Power ───────────────────────────────────────────────────────

    pub async fn get_power(&self, vm_id: &str) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        PowerManager::new(c).get_power(vm_id).await
    }

    pub async fn get_power_state(&self, vm_id: &str) -> VmrestResult<VmPowerState> {
        let c = self.require_client()?;
        PowerManager::new(c).get_power_state(vm_id).await
    }

    pub async fn set_power(&self, vm_id: &str, op: PowerOperation) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        PowerManager::new(c).set_power(vm_id, op).await
    }

    // ── Shared folders ──────────────────────────────────────────────

    pub async fn list_shared_folders(&self, vm_id: &str) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        SharedFolderManager::new(c).list_shared_folders(vm_id).await
    }

    pub async fn create_shared_folder(&self, vm_id: &str, spec: &SharedFolderSpec) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        SharedFolderManager::new(c).create_shared_folder(vm_id, spec).await
    }

    pub async fn update_shared_folder(
        &self,
        vm_id: &str,
        folder_id: &str,
        spec: &SharedFolderSpec,
    ) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        SharedFolderManager::new(c)
            .update_shared_folder(vm_id, folder_id, spec)
            .await
    }

    pub async fn delete_shared_folder(&self, vm_id: &str, folder_id: &str) -> VmrestResult<ApiResponse> {
        let c = self.require_client()?;
        SharedFolderManager::new(c)
            .delete_shared_folder(vm_id, folder_id)
            .await
    }
}

/// Config without the password, safe to hand to callers / UIs.
#[derive(Debug, Clone, Serialize, serde::Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VmrestConfigSafe {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub base_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VmrestErrorKind;

    #[tokio::test]
    async fn operations_require_connection() {
        let svc = VmrestService::new();
        assert!(!svc.is_connected());
        assert!(svc.get_config().is_none());

        let err = svc.list_vms().await.unwrap_err();
        assert_eq!(err.kind, VmrestErrorKind::NotConnected);
        let err = svc.set_power("vm1", PowerOperation::On).await.unwrap_err();
        assert_eq!(err.kind, VmrestErrorKind::NotConnected);
    }

    #[test]
    fn disconnect_when_idle_is_noop() {
        let mut svc = VmrestService::new();
        svc.disconnect();
        assert!(!svc.is_connected());
    }
}
