use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::api::employee::{EmployeePayload, StatusChange};
use crate::model::{Employee, EmployeeId};

#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a response (connect, timeout, TLS...).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl TransportError {
    /// Message the backend put in its error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            TransportError::Rejected {
                message: Some(m), ..
            } if !m.trim().is_empty() => Some(m),
            _ => None,
        }
    }
}

/// The five record operations the screens need from the backend.
#[async_trait]
pub trait EmployeeTransport: Send + Sync {
    /// `Ok(None)` when the backend answered without a `data` object.
    async fn list_all(&self) -> Result<Option<Vec<Employee>>, TransportError>;

    async fn create(&self, payload: &EmployeePayload) -> Result<(), TransportError>;

    async fn update(&self, id: EmployeeId, payload: &EmployeePayload)
        -> Result<(), TransportError>;

    async fn set_active(&self, change: StatusChange) -> Result<(), TransportError>;

    async fn delete(&self, id: EmployeeId) -> Result<(), TransportError>;
}

pub type SharedTransport = Arc<dyn EmployeeTransport>;
