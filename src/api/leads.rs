//! Lead Endpoints

use reqwest::Request;

use super::{ApiError, BackendClient};

impl BackendClient {
    /// Build the `GET /leads` request
    pub fn leads_request(&self) -> Result<Request, ApiError> {
        let url = self.config.endpoint("leads")?;
        Ok(self.http.get(url).build()?)
    }
}
