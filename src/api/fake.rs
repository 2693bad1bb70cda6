//! In-memory backend double for controller tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::employee::{EmployeePayload, StatusChange};
use crate::api::transport::{EmployeeTransport, TransportError};
use crate::model::{Employee, EmployeeId};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListAll,
    Create(EmployeePayload),
    Update(EmployeeId, EmployeePayload),
    SetActive(StatusChange),
    Delete(EmployeeId),
}

#[derive(Default)]
struct State {
    rows: Vec<Employee>,
    next_id: u64,
    calls: Vec<Call>,
    fail_next: Option<TransportError>,
    list_without_data: bool,
}

/// Behaves like a tiny backend and records every call it receives.
#[derive(Default)]
pub struct RecordingTransport {
    state: Mutex<State>,
}

impl RecordingTransport {
    pub fn with_rows(rows: Vec<Employee>) -> Self {
        let next_id = rows.iter().map(|e| e.id.0).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(State {
                rows,
                next_id,
                ..State::default()
            }),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn rows(&self) -> Vec<Employee> {
        self.state.lock().unwrap().rows.clone()
    }

    pub fn fail_next(&self, error: TransportError) {
        self.state.lock().unwrap().fail_next = Some(error);
    }

    pub fn answer_list_without_data(&self) {
        self.state.lock().unwrap().list_without_data = true;
    }

    fn record(&self, call: Call) -> Result<std::sync::MutexGuard<'_, State>, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        let failure = state.fail_next.take();
        match failure {
            Some(err) => Err(err),
            None => Ok(state),
        }
    }
}

fn employee_from_payload(id: EmployeeId, payload: &EmployeePayload, is_active: bool) -> Employee {
    Employee {
        employee_code: payload.employee_code.clone(),
        first_name: payload.first_name.clone(),
        last_name: payload.last_name.clone(),
        designation: payload.designation.clone(),
        gender: Some(payload.gender),
        marital_status: Some(payload.marital_status),
        email: payload.email.clone(),
        mobile_number: payload.mobile_number.clone(),
        dob: Some(payload.dob),
        current_state: Some(payload.current_state),
        pin_code: payload.pin_code.clone(),
        department: Some(payload.department),
        joining_date: Some(payload.joining_date),
        mothers_name: payload.mothers_name.clone(),
        is_active,
        education_list: payload.education_list.clone(),
        id_proof_list: payload.id_proof_list.clone(),
        ..Employee::new(id, "")
    }
}

#[async_trait]
impl EmployeeTransport for RecordingTransport {
    async fn list_all(&self) -> Result<Option<Vec<Employee>>, TransportError> {
        let state = self.record(Call::ListAll)?;
        if state.list_without_data {
            return Ok(None);
        }
        Ok(Some(state.rows.clone()))
    }

    async fn create(&self, payload: &EmployeePayload) -> Result<(), TransportError> {
        let mut state = self.record(Call::Create(payload.clone()))?;
        let id = EmployeeId(state.next_id);
        state.next_id += 1;
        state.rows.push(employee_from_payload(id, payload, true));
        Ok(())
    }

    async fn update(
        &self,
        id: EmployeeId,
        payload: &EmployeePayload,
    ) -> Result<(), TransportError> {
        let mut state = self.record(Call::Update(id, payload.clone()))?;
        match state.rows.iter_mut().find(|e| e.id == id) {
            Some(row) => {
                *row = employee_from_payload(id, payload, row.is_active);
                Ok(())
            }
            None => Err(TransportError::Rejected {
                status: 404,
                message: Some("Employee not found".into()),
            }),
        }
    }

    async fn set_active(&self, change: StatusChange) -> Result<(), TransportError> {
        let mut state = self.record(Call::SetActive(change))?;
        if let Some(row) = state.rows.iter_mut().find(|e| e.id == change.id) {
            row.is_active = change.is_active;
        }
        Ok(())
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), TransportError> {
        let mut state = self.record(Call::Delete(id))?;
        state.rows.retain(|e| e.id != id);
        Ok(())
    }
}
