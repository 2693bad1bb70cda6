pub mod employee;
pub mod http;
pub mod transport;

#[cfg(test)]
pub(crate) mod fake;

pub use employee::{EmployeeListResponse, EmployeePayload, StatusChange};
pub use http::HttpTransport;
pub use transport::{EmployeeTransport, SharedTransport, TransportError};
