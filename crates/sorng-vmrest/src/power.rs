//! VM power state.

use crate::client::VmrestClient;
use crate::error::VmrestResult;
use crate::response::ApiResponse;
use crate::types::{PowerOperation, VmPowerState};

pub struct PowerManager<'a> {
    client: &'a VmrestClient,
}

impl<'a> PowerManager<'a> {
    pub fn new(client: &'a VmrestClient) -> Self {
        Self { client }
    }

    pub async fn get_power(&self, vm_id: &str) -> VmrestResult<ApiResponse> {
        let path = format!("/vms/{vm_id}/power");
        self.client.get(&path).await
    }

    /// `get_power` decoded.
    pub async fn get_power_state(&self, vm_id: &str) -> VmrestResult<VmPowerState> {
        self.get_power(vm_id).await?.json()
    }

    /// Change the power state. vmrest expects the bare operation word as
    /// the request body, not a JSON string.
    pub async fn set_power(&self, vm_id: &str, op: PowerOperation) -> VmrestResult<ApiResponse> {
        let path = format!("/vms/{vm_id}/power");
        log::info!("Power operation '{}' on VM {}", op, vm_id);
        self.client.put_raw(&path, op.as_str()).await
    }
}
