use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, instrument};

use crate::api::employee::{EmployeeListResponse, EmployeePayload, ErrorBody, StatusChange};
use crate::api::transport::{EmployeeTransport, TransportError};
use crate::model::{Employee, EmployeeId};

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            TransportError::Decode(e.to_string())
        } else {
            TransportError::Network(e.to_string())
        }
    }
}

/// JSON-over-HTTP client for the employee backend.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// `timeout` of `None` waits for the backend indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Turns non-2xx responses into `Rejected`, keeping the body's `message`.
    async fn check(response: Response) -> Result<Response, TransportError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message);
        debug!(status = status.as_u16(), body = %text, "Backend rejected request");

        Err(TransportError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn ack(response: Response) -> Result<(), TransportError> {
        let response = Self::check(response).await?;
        let body = response.text().await?;
        debug!(body = %body, "Backend acknowledged");
        Ok(())
    }
}

#[async_trait]
impl EmployeeTransport for HttpTransport {
    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Option<Vec<Employee>>, TransportError> {
        let response = self.client.get(self.url("employee/getAll")).send().await?;
        let list: EmployeeListResponse = Self::check(response).await?.json().await?;
        debug!(rows = list.data.as_ref().map(Vec::len), "Fetched employee list");
        Ok(list.data)
    }

    #[instrument(skip(self, payload), fields(employee_code = %payload.employee_code))]
    async fn create(&self, payload: &EmployeePayload) -> Result<(), TransportError> {
        let response = self
            .client
            .post(self.url("employee/create"))
            .json(payload)
            .send()
            .await?;
        Self::ack(response).await
    }

    #[instrument(skip(self, payload), fields(employee_id = %id))]
    async fn update(
        &self,
        id: EmployeeId,
        payload: &EmployeePayload,
    ) -> Result<(), TransportError> {
        let response = self
            .client
            .post(self.url(&format!("employee/update/{}", id)))
            .json(payload)
            .send()
            .await?;
        Self::ack(response).await
    }

    #[instrument(skip(self))]
    async fn set_active(&self, change: StatusChange) -> Result<(), TransportError> {
        let response = self
            .client
            .post(self.url("employee/activateOrDeactivate"))
            .json(&change)
            .send()
            .await?;
        Self::ack(response).await
    }

    #[instrument(skip(self), fields(employee_id = %id))]
    async fn delete(&self, id: EmployeeId) -> Result<(), TransportError> {
        let response = self
            .client
            .post(self.url(&format!("employee/delete/{}", id)))
            .send()
            .await?;
        Self::ack(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalised() {
        let transport = HttpTransport::new("http://localhost:5000/", None).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:5000");
        assert_eq!(
            transport.url("employee/getAll"),
            "http://localhost:5000/employee/getAll"
        );
    }
}
