//! Client configuration

/// Default QR rendering endpoint (external collaborator)
pub const DEFAULT_QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Default QR image size in pixels, `WxH`
pub const DEFAULT_QR_SIZE: &str = "200x200";

/// Client configuration for connecting to the record-storage backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// QR image provider endpoint
    pub qr_endpoint: String,

    /// QR image size parameter, `WxH`
    pub qr_size: String,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 10,
            qr_endpoint: DEFAULT_QR_ENDPOINT.to_string(),
            qr_size: DEFAULT_QR_SIZE.to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the QR image provider endpoint
    pub fn with_qr_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.qr_endpoint = endpoint.into();
        self
    }

    /// Set the QR image size (`WxH`)
    pub fn with_qr_size(mut self, size: impl Into<String>) -> Self {
        self.qr_size = size.into();
        self
    }

    /// Create a gateway from this configuration
    pub fn build_gateway(&self) -> super::DataGateway {
        super::DataGateway::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
