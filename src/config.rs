//! Backend Configuration
//!
//! The backend location is a compile-time literal; there is no runtime override.

use url::Url;

/// Base URL of the CRM backend service
pub const BACKEND_URL: &str = "http://localhost:6060";

#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub base_url: Url,
}

impl BackendConfig {
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
        })
    }

    /// Resolve an endpoint path (e.g. "leads") against the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(BACKEND_URL).expect("BACKEND_URL is a valid URL")
    }
}
