//! VM lifecycle: inventory, settings, config params, copy, registration
//! and deletion.

use crate::client::VmrestClient;
use crate::error::VmrestResult;
use crate::response::ApiResponse;
use crate::types::VmSummary;

use serde::Serialize;

/// VM lifecycle operations.
pub struct VmManager<'a> {
    client: &'a VmrestClient,
}

impl<'a> VmManager<'a> {
    pub fn new(client: &'a VmrestClient) -> Self {
        Self { client }
    }

    // ── List / Get ──────────────────────────────────────────────────

    /// IDs and `.vmx` paths of every VM in the library.
    pub async fn list_vms(&self) -> VmrestResult<ApiResponse> {
        self.client.get("/vms").await
    }

    /// `list_vms` decoded into summaries.
    pub async fn list_vm_summaries(&self) -> VmrestResult<Vec<VmSummary>> {
        self.list_vms().await?.json()
    }

    /// CPU / memory settings of a VM.
    pub async fn get_vm(&self, vm_id: &str) -> VmrestResult<ApiResponse> {
        let path = format!("/vms/{vm_id}");
        self.client.get(&path).await
    }

    /// A single VMX config parameter.
    pub async fn get_vm_param(&self, vm_id: &str, name: &str) -> VmrestResult<ApiResponse> {
        let path = format!("/vms/{vm_id}/params/{name}");
        self.client.get(&path).await
    }

    /// Restrictions information of a VM.
    pub async fn get_vm_restrictions(&self, vm_id: &str) -> VmrestResult<ApiResponse> {
        let path = format!("/vms/{vm_id}/restrictions");
        self.client.get(&path).await
    }

    // ── Update ──────────────────────────────────────────────────────

    pub async fn update_vm<B: Serialize + ?Sized>(&self, vm_id: &str, settings: &B) -> VmrestResult<ApiResponse> {
        let path = format!("/vms/{vm_id}");
        self.client.put(&path, settings).await
    }

    pub async fn update_vm_config<B: Serialize + ?Sized>(&self, vm_id: &str, param: &B) -> VmrestResult<ApiResponse> {
        let path = format!("/vms/{vm_id}/configparams");
        self.client.put(&path, param).await
    }

    // ── Copy / Register / Delete ────────────────────────────────────

    /// Clone the VM named by `parentId` in the body.
    pub async fn copy_vm<B: Serialize + ?Sized>(&self, spec: &B) -> VmrestResult<ApiResponse> {
        self.client.post("/vms", spec).await
    }

    /// Add an existing `.vmx` to the VM library.
    pub async fn register_vm<B: Serialize + ?Sized>(&self, spec: &B) -> VmrestResult<ApiResponse> {
        self.client.post("/vms/registration", spec).await
    }

    pub async fn delete_vm(&self, vm_id: &str) -> VmrestResult<ApiResponse> {
        let path = format!("/vms/{vm_id}");
        self.client.delete(&path).await
    }
}
