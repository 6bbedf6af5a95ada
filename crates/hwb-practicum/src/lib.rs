//! Practicum homework-review API adapter (reqwest).
//!
//! Implements the `hwb-core` StatusSource port over the homework-statuses
//! HTTP endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use hwb_core::{
    errors::{Error, ValidationError},
    ports::StatusSource,
    Result,
};

#[derive(Clone, Debug)]
pub struct PracticumClient {
    token: String,
    endpoint: String,
    http: reqwest::Client,
}

impl PracticumClient {
    pub fn new(token: impl Into<String>, endpoint: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build");
        Self {
            token: token.into(),
            endpoint: endpoint.into(),
            http,
        }
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        debug!("requesting homework statuses since {from_date}");

        let resp = self
            .http
            .get(&self.endpoint)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("OAuth {}", self.token),
            )
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| Error::Connectivity(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Endpoint {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| Error::Validation(ValidationError::InvalidJson(e.to_string())))?;

        debug!("homework statuses response received");
        Ok(body)
    }
}
