//! Call Endpoints

use reqwest::Request;

use super::{ApiError, BackendClient};
use crate::models::CallRequest;

impl BackendClient {
    /// Build the `POST /make-call` request; parameters go in the query string
    pub fn make_call_request(&self, call: &CallRequest) -> Result<Request, ApiError> {
        let url = self.config.endpoint("make-call")?;
        Ok(self.http.post(url).query(call).build()?)
    }
}
