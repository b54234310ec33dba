//! VM shared folders.

use crate::client::VmrestClient;
use crate::error::VmrestResult;
use crate::response::ApiResponse;

use serde::Serialize;

pub struct SharedFolderManager<'a> {
    client: &'a VmrestClient,
}

impl<'a> SharedFolderManager<'a> {
    pub fn new(client: &'a VmrestClient) -> Self {
        Self { client }
    }

    pub async fn list_shared_folders(&self, vm_id: &str) -> VmrestResult<ApiResponse> {
        let path = format!("/vms/{vm_id}/sharedfolders");
        self.client.get(&path).await
    }

    pub async fn create_shared_folder<B: Serialize + ?Sized>(&self, vm_id: &str, spec: &B) -> VmrestResult<ApiResponse> {
        let path = format!("/vms/{vm_id}/sharedfolders");
        self.client.post(&path, spec).await
    }

    pub async fn update_shared_folder<B: Serialize + ?Sized>(
        &self,
        vm_id: &str,
        folder_id: &str,
        spec: &B,
    ) -> VmrestResult<ApiResponse> {
        let path = format!("/vms/{vm_id}/sharedfolders/{folder_id}");
        self.client.put(&path, spec).await
    }

    pub async fn delete_shared_folder(&self, vm_id: &str, folder_id: &str) -> VmrestResult<ApiResponse> {
        let path = format!("/vms/{vm_id}/sharedfolders/{folder_id}");
        self.client.delete(&path).await
    }
}
