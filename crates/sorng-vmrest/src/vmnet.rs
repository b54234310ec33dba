//! Host virtual network management: vmnets, DHCP MAC-to-IP bindings and
//! NAT port forwarding.

use crate::client::VmrestClient;
use crate::error::VmrestResult;
use crate::response::ApiResponse;

use serde::Serialize;

/// Host network operations.
pub struct HostNetworkManager<'a> {
    client: &'a VmrestClient,
}

impl<'a> HostNetworkManager<'a> {
    pub fn new(client: &'a VmrestClient) -> Self {
        Self { client }
    }

    /// List all virtual networks.
    pub async fn list_vmnets(&self) -> VmrestResult<ApiResponse> {
        self.client.get("/vmnet").await
    }

    /// Create a virtual network.
    pub async fn create_vmnet<B: Serialize + ?Sized>(&self, spec: &B) -> VmrestResult<ApiResponse> {
        self.client.post("/vmnets", spec).await
    }

    // ── MAC-to-IP ───────────────────────────────────────────────────

    /// All DHCP MAC-to-IP bindings of `vmnet`.
    pub async fn get_mac_to_ip(&self, vmnet: &str) -> VmrestResult<ApiResponse> {
        let path = format!("/vmnet/{vmnet}/mactoip");
        self.client.get(&path).await
    }

    /// Create or replace the binding for `mac` on `vmnet`.
    pub async fn update_mac_to_ip<B: Serialize + ?Sized>(
        &self,
        vmnet: &str,
        mac: &str,
        binding: &B,
    ) -> VmrestResult<ApiResponse> {
        let path = format!("/vmnet/{vmnet}/mactoip/{mac}");
        self.client.put(&path, binding).await
    }

    // ── Port forwarding ─────────────────────────────────────────────

    /// All port forwarding rules of `vmnet`.
    pub async fn get_port_forwards(&self, vmnet: &str) -> VmrestResult<ApiResponse> {
        let path = format!("/vmnet/{vmnet}/portforward");
        self.client.get(&path).await
    }

    /// Create or replace the rule for `protocol`/`port` on `vmnet`.
    pub async fn update_port_forward<B: Serialize + ?Sized>(
        &self,
        vmnet: &str,
        protocol: &str,
        port: u16,
        rule: &B,
    ) -> VmrestResult<ApiResponse> {
        let path = format!("/vmnet/{vmnet}/portforward/{protocol}/{port}");
        self.client.put(&path, rule).await
    }

    /// Remove the rule for `protocol`/`port` on `vmnet`.
    pub async fn delete_port_forward(
        &self,
        vmnet: &str,
        protocol: &str,
        port: u16,
    ) -> VmrestResult<ApiResponse> {
        let path = format!("/vmnet/{vmnet}/portforward/{protocol}/{port}");
        self.client.delete(&path).await
    }
}
