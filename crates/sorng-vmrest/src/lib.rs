//! # SortOfRemote NG – VMware Workstation REST (vmrest)
//!
//! Client for the REST service shipped with VMware Workstation, Player and
//! Fusion (`vmrest`, default `http://127.0.0.1:8697/api`).
//!
//! ## Modules
//!
//! - **types** — Connection config, request bodies, power operations
//! - **error** — Crate-specific error types
//! - **response** — Tagged response produced by status normalization
//! - **client** — vmrest HTTP client with Basic-Auth header set
//! - **vmnet** — Host virtual networks, MAC-to-IP bindings, port forwarding
//! - **vm** — VM lifecycle (list, settings, config params, copy, register, delete)
//! - **nic** — VM network adapters
//! - **power** — VM power state
//! - **shared_folder** — VM shared folders
//! - **service** — Aggregate facade + shared state alias

pub mod types;
pub mod error;
pub mod response;
pub mod client;
pub mod vmnet;
pub mod vm;
pub mod nic;
pub mod power;
pub mod shared_folder;
pub mod service;

pub use client::VmrestClient;
pub use error::{VmrestError, VmrestErrorKind, VmrestResult};
pub use response::ApiResponse;
pub use service::{VmrestService, VmrestServiceState};
pub use types::*;
