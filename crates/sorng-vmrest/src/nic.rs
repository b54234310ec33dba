//! VM network adapter operations.

use crate::client::VmrestClient;
use crate::error::VmrestResult;
use crate::response::ApiResponse;

use serde::Serialize;

/// NIC operations for a VM. Adapters are addressed by 1-based index.
pub struct NicManager<'a> {
    client: &'a VmrestClient,
}

impl<'a> NicManager<'a> {
    pub fn new(client: &'a VmrestClient) -> Self {
        Self { client }
    }

    /// Guest IP address (requires VMware Tools in the guest).
    pub async fn get_ip(&self, vm_id: &str) -> VmrestResult<ApiResponse> {
        let path = format!("/vms/{vm_id}/ip");
        self.client.get(&path).await
    }

    pub async fn list_nics(&self, vm_id: &str) -> VmrestResult<ApiResponse> {
        let path = format!("/vms/{vm_id}/nic");
        self.client.get(&path).await
    }

    pub async fn create_nic<B: Serialize + ?Sized>(&self, vm_id: &str, spec: &B) -> VmrestResult<ApiResponse> {
        let path = format!("/vms/{vm_id}/nic");
        self.client.post(&path, spec).await
    }

    pub async fn update_nic<B: Serialize + ?Sized>(
        &self,
        vm_id: &str,
        index: u32,
        spec: &B,
    ) -> VmrestResult<ApiResponse> {
        let path = format!("/vms/{vm_id}/nic/{index}");
        self.client.put(&path, spec).await
    }

    pub async fn delete_nic(&self, vm_id: &str, index: u32) -> VmrestResult<ApiResponse> {
        let path = format!("/vms/{vm_id}/nic/{index}");
        self.client.delete(&path).await
    }
}
