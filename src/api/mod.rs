//! Backend API Client
//!
//! HTTP bindings to the CRM backend, organized by domain.

mod calls;
mod leads;

use reqwest::{Client, Request, Response};
use thiserror::Error;

use crate::config::BackendConfig;
use crate::models::{CallRequest, Lead};

/// Failure talking to the backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("invalid backend url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

/// Operations the dashboard needs from the backend
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// `GET /leads`
    async fn list_leads(&self) -> Result<Vec<Lead>, ApiError>;
    /// `POST /make-call?to=..&lead_id=..`, response body ignored
    async fn initiate_call(&self, phone: &str, lead_id: i64) -> Result<(), ApiError>;
}

/// reqwest-backed client; on wasm32 requests go through the browser `fetch`
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    config: BackendConfig,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        log::debug!("[API] {} {}", request.method(), request.url());
        let response = self.http.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

impl Backend for BackendClient {
    async fn list_leads(&self) -> Result<Vec<Lead>, ApiError> {
        let response = self.send(self.leads_request()?).await?;
        Ok(response.json::<Vec<Lead>>().await?)
    }

    async fn initiate_call(&self, phone: &str, lead_id: i64) -> Result<(), ApiError> {
        let call = CallRequest {
            to: phone.to_string(),
            lead_id,
        };
        self.send(self.make_call_request(&call)?).await?;
        Ok(())
    }
}
