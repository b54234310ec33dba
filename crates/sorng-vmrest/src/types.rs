//! Shared types for the vmrest client.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Vendor media type used for both `Content-Type` and `Accept`.
pub const VMREST_MEDIA_TYPE: &str = "application/vnd.vmware.vmw.rest-v1+json";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8697;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Connection / Config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Configuration for connecting to a local or remote `vmrest` instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmrestConfig {
    /// Hostname / IP that vmrest listens on
    #[serde(default = "default_host")]
    pub host: String,
    /// Port (default 8697)
    #[serde(default = "default_port")]
    pub port: u16,
    /// Username configured with `vmrest -C`
    #[serde(default)]
    pub username: String,
    /// Password
    #[serde(default)]
    pub password: String,
    /// Request timeout in seconds; 0 keeps the HTTP client default (none)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_host() -> String { DEFAULT_HOST.to_string() }
fn default_port() -> u16 { DEFAULT_PORT }
fn default_timeout() -> u64 { 0 }

impl Default for VmrestConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: DEFAULT_PORT,
            username: String::new(),
            password: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl VmrestConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Defaults overridden by `VMREST_HOST`, `VMREST_PORT`, `VMREST_USERNAME`,
    /// `VMREST_PASSWORD` and `VMREST_TIMEOUT_SECS`. Unparseable numbers are
    /// ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(host) = lookup("VMREST_HOST") {
            cfg.host = host;
        }
        if let Some(port) = lookup("VMREST_PORT") {
            match port.parse() {
                Ok(p) => cfg.port = p,
                Err(_) => log::warn!("Ignoring invalid VMREST_PORT value '{}'", port),
            }
        }
        if let Some(user) = lookup("VMREST_USERNAME") {
            cfg.username = user;
        }
        if let Some(pass) = lookup("VMREST_PASSWORD") {
            cfg.password = pass;
        }
        if let Some(t) = lookup("VMREST_TIMEOUT_SECS") {
            match t.parse() {
                Ok(secs) => cfg.timeout_secs = secs,
                Err(_) => log::warn!("Ignoring invalid VMREST_TIMEOUT_SECS value '{}'", t),
            }
        }
        cfg
    }

    /// Per-request timeout to apply, `None` when `timeout_secs` is 0.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// `http://{host}:{port}/api`
    pub fn base_url(&self) -> String {
        format!("http://{}:{}/api", self.host, self.port)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Host networks
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// DHCP reservation body for `PUT /vmnet/{net}/mactoip/{mac}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacToIpBinding {
    #[serde(rename = "IP")]
    pub ip: String,
}

/// Port forwarding target for `PUT /vmnet/{net}/portforward/{proto}/{port}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortForwardRule {
    pub guest_ip: String,
    pub guest_port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

/// Body for `POST /vmnets`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VmnetCreateSpec {
    pub name: String,
    /// "bridged", "nat" or "hostOnly"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub net_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  VM Types
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Entry of `GET /vms`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VmSummary {
    pub id: String,
    #[serde(default)]
    pub path: String,
}

/// Body for `PUT /vms/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VmSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processors: Option<u32>,
    /// MiB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<u64>,
}

/// Body for `PUT /vms/{id}/configparams`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigParam {
    pub name: String,
    pub value: String,
}

/// Body for `POST /vms` (copy of `parent_id`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VmCloneSpec {
    pub name: String,
    #[serde(rename = "parentId")]
    pub parent_id: String,
}

/// Body for `POST /vms/registration`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VmRegisterSpec {
    pub name: String,
    /// Full path to the `.vmx` file on the host
    pub path: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  NICs
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Body for NIC create / update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NicSpec {
    /// "bridged", "nat", "hostonly" or "custom"
    #[serde(rename = "type")]
    pub nic_type: String,
    /// Target vmnet, only meaningful for "custom"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vmnet: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Power
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Operation accepted by `PUT /vms/{id}/power`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PowerOperation {
    On,
    Off,
    Shutdown,
    Suspend,
    Pause,
    Unpause,
}

impl PowerOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Shutdown => "shutdown",
            Self::Suspend => "suspend",
            Self::Pause => "pause",
            Self::Unpause => "unpause",
        }
    }
}

impl fmt::Display for PowerOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "shutdown" => Ok(Self::Shutdown),
            "suspend" => Ok(Self::Suspend),
            "pause" => Ok(Self::Pause),
            "unpause" => Ok(Self::Unpause),
            other => Err(format!("Unknown power operation '{other}'")),
        }
    }
}

/// Body of `GET /vms/{id}/power`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VmPowerState {
    /// e.g. "poweredOn", "poweredOff", "suspended"
    pub power_state: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Shared folders
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Shared folder definition. `folder_id` is ignored by vmrest on update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SharedFolderSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    pub host_path: String,
    /// 0 = read-only, 4 = read-write
    #[serde(default)]
    pub flags: u32,
}
