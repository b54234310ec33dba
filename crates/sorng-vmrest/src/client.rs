//! vmrest HTTP client.
//!
//! Talks to `http://{host}:{port}/api/...` with a fixed header set:
//! Basic-Auth `Authorization` plus the vendor media type for
//! `Content-Type` and `Accept`. Every helper returns a normalized
//! [`ApiResponse`].

use crate::error::{VmrestError, VmrestResult};
use crate::response::ApiResponse;
use crate::types::{VmrestConfig, VMREST_MEDIA_TYPE};

use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::Serialize;

/// vmrest REST API client.
pub struct VmrestClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
    config: VmrestConfig,
}

impl VmrestClient {
    /// Build a new client from config. No request is made.
    ///
    /// When the config carries a username the Authorization header is
    /// seeded from it, so `authenticate` is optional for a known account.
    pub fn new(config: &VmrestConfig) -> VmrestResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| VmrestError::connection(format!("Failed to build HTTP client: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(VMREST_MEDIA_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(VMREST_MEDIA_TYPE));

        let mut this = Self {
            client,
            base_url: config.base_url(),
            headers,
            config: config.clone(),
        };
        if !config.username.is_empty() {
            this.store_credentials(&config.username, &config.password)?;
        }
        Ok(this)
    }

    /// Base URL for API calls (`http://{host}:{port}/api`).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current config.
    pub fn config(&self) -> &VmrestConfig {
        &self.config
    }

    /// Header set attached to every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Current `Authorization` value, if credentials were stored.
    pub fn authorization(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
    }

    // ── Connection config ───────────────────────────────────────────

    pub fn set_host(&mut self, host: impl Into<String>) {
        self.config.host = host.into();
        self.base_url = self.config.base_url();
    }

    pub fn set_port(&mut self, port: u16) {
        self.config.port = port;
        self.base_url = self.config.base_url();
    }

    // ── Authentication ──────────────────────────────────────────────

    /// Store Basic-Auth credentials and probe `GET /vms`.
    ///
    /// Returns the raw status code of the probe. The new header is kept
    /// even when the probe is rejected.
    pub async fn authenticate(&mut self, user: &str, password: &str) -> VmrestResult<u16> {
        self.store_credentials(user, password)?;
        self.config.username = user.to_string();
        self.config.password = password.to_string();

        let url = format!("{}/vms", self.base_url);
        log::debug!("Authenticating as '{}' against {}", user, url);
        let resp = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .send()
            .await?;

        let status = resp.status().as_u16();
        if let Err(e) = ApiResponse::from_response(resp).await {
            log::debug!("Ignoring unreadable authentication probe body: {}", e);
        }
        Ok(status)
    }

    /// `authenticate` with the credentials held in the config.
    pub async fn authenticate_with_config(&mut self) -> VmrestResult<u16> {
        let user = self.config.username.clone();
        let password = self.config.password.clone();
        self.authenticate(&user, &password).await
    }

    fn store_credentials(&mut self, user: &str, password: &str) -> VmrestResult<()> {
        let value = HeaderValue::from_str(&basic_auth_value(user, password))
            .map_err(|e| VmrestError::auth(format!("Invalid credentials header: {e}")))?;
        self.headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    // ── HTTP helpers ────────────────────────────────────────────────

    /// GET `path` (relative to the base URL).
    pub async fn get(&self, path: &str) -> VmrestResult<ApiResponse> {
        self.send(Method::GET, path, None).await
    }

    /// PUT with JSON body.
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> VmrestResult<ApiResponse> {
        let body = serde_json::to_vec(body)?;
        self.send(Method::PUT, path, Some(body)).await
    }

    /// PUT with a body sent as-is (no JSON encoding).
    pub async fn put_raw(&self, path: &str, body: impl Into<Vec<u8>>) -> VmrestResult<ApiResponse> {
        self.send(Method::PUT, path, Some(body.into())).await
    }

    /// POST with JSON body.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> VmrestResult<ApiResponse> {
        let body = serde_json::to_vec(body)?;
        self.send(Method::POST, path, Some(body)).await
    }

    /// DELETE.
    pub async fn delete(&self, path: &str) -> VmrestResult<ApiResponse> {
        self.send(Method::DELETE, path, None).await
    }

    // ── Internal helpers ────────────────────────────────────────────

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> VmrestResult<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);

        let mut req = self
            .client
            .request(method, &url)
            .headers(self.headers.clone());
        if let Some(body) = body {
            req = req.body(body);
        }
        let resp = req.send().await?;
        ApiResponse::from_response(resp).await
    }
}

/// `Basic base64(user:password)`.
pub fn basic_auth_value(user: &str, password: &str) -> String {
    let token = base64::engine::general_purpose::STANDARD.encode(format!("{user}:{password}"));
    format!("Basic {token}")
}
