//! Reqwest-backed implementation of the employee gateway
//!
//! One pooled [`reqwest::Client`] is built at startup with the bearer token
//! installed as a default `Authorization` header, and reused by every call.
//! Responses are returned raw (status, reason phrase, body text) for the
//! service layer to interpret; only transport failures become errors.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use tracing::{debug, error};

use ems_core::domain::entities::Employee;
use ems_core::errors::DomainResult;
use ems_core::services::employee::{EmployeeGateway, UpstreamResponse};
use ems_shared::config::UpstreamConfig;

use crate::InfrastructureError;

/// Employee gateway talking to the remote REST API
pub struct HttpEmployeeGateway {
    client: Client,
    config: UpstreamConfig,
}

impl HttpEmployeeGateway {
    /// Create a gateway for the given upstream
    pub fn new(config: UpstreamConfig) -> Result<Self, InfrastructureError> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.api_token))
            .map_err(|e| InfrastructureError::Config(format!("Invalid API token: {}", e)))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        debug!(base_url = %config.base_url, "Upstream employee gateway initialized");

        Ok(Self { client, config })
    }

    async fn send(&self, operation: &str, request: RequestBuilder) -> DomainResult<UpstreamResponse> {
        let response = request.send().await.map_err(|e| {
            error!(operation, error = %e, "Upstream request failed");
            InfrastructureError::Http(e)
        })?;

        let status = response.status().as_u16();
        let reason = reason_phrase(&response);
        let body = response.text().await.map_err(|e| {
            error!(operation, status, error = %e, "Failed to read upstream body");
            InfrastructureError::Http(e)
        })?;

        debug!(operation, status, reason = %reason, "Upstream responded");

        Ok(UpstreamResponse {
            status,
            reason,
            body,
        })
    }
}

/// Reason phrase of a response: the one the server sent when it differs from
/// the canonical phrase, the canonical phrase otherwise
fn reason_phrase(response: &Response) -> String {
    response
        .extensions()
        .get::<hyper::ext::ReasonPhrase>()
        .and_then(|reason| std::str::from_utf8(reason.as_bytes()).ok())
        .or_else(|| response.status().canonical_reason())
        .unwrap_or_default()
        .to_string()
}

#[async_trait]
impl EmployeeGateway for HttpEmployeeGateway {
    async fn list(&self) -> DomainResult<UpstreamResponse> {
        self.send("list", self.client.get(self.config.users_url())).await
    }

    async fn get(&self, id: i64) -> DomainResult<UpstreamResponse> {
        self.send("get", self.client.get(self.config.user_url(id))).await
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<UpstreamResponse> {
        let request = self
            .client
            .get(self.config.users_url())
            .query(&[("name", name)]);
        self.send("find_by_name", request).await
    }

    async fn delete(&self, id: i64) -> DomainResult<UpstreamResponse> {
        self.send("delete", self.client.delete(self.config.user_url(id)))
            .await
    }

    async fn update(&self, id: i64, employee: &Employee) -> DomainResult<UpstreamResponse> {
        let request = self.client.put(self.config.user_url(id)).json(employee);
        self.send("update", request).await
    }

    async fn create(&self, employee: &Employee) -> DomainResult<UpstreamResponse> {
        let request = self.client.post(self.config.users_url()).json(employee);
        self.send("create", request).await
    }
}
