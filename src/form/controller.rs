use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::api::{EmployeePayload, SharedTransport, TransportError};
use crate::form::fields::{Field, FieldError, FormFields};
use crate::form::step::Step;
use crate::form::validate::{ValidationErrors, required_message, validate_field, validate_fields};
use crate::model::{Employee, EmployeeId, IdProof};
use crate::notice::Notice;
use crate::route::Route;

pub const REGISTERED_MESSAGE: &str = "Employee Registered Successfully!";
pub const UPDATED_MESSAGE: &str = "Employee Updated Successfully!";
pub const SUBMISSION_FAILED_MESSAGE: &str = "Submission failed!";
pub const VALIDATION_FAILED_MESSAGE: &str = "Form validation failed!";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission is only available on the last step")]
    NotFinalStep,
    #[error("a submission is already in flight")]
    Busy,
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// One registration/edit session of the employee wizard.
pub struct FormController {
    transport: SharedTransport,
    step: Step,
    fields: FormFields,
    id_proofs: Vec<IdProof>,
    editing: Option<EmployeeId>,
    errors: ValidationErrors,
    loading: bool,
    notices: Vec<Notice>,
}

impl FormController {
    /// Passing a record opens the wizard in update mode, pre-filled.
    pub fn new(transport: SharedTransport, employee: Option<Employee>) -> Self {
        let (fields, id_proofs, editing) = match employee {
            Some(employee) => {
                debug!(employee_id = %employee.id, "Opening form for update");
                (
                    FormFields::from_employee(&employee),
                    employee.id_proof_list.clone(),
                    Some(employee.id),
                )
            }
            None => (FormFields::default(), Vec::new(), None),
        };

        Self {
            transport,
            step: Step::FIRST,
            fields,
            id_proofs,
            editing,
            errors: ValidationErrors::default(),
            loading: false,
            notices: Vec::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_update(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing_id(&self) -> Option<EmployeeId> {
        self.editing
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn id_proofs(&self) -> &[IdProof] {
        &self.id_proofs
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Page to draw; `None` while a submission is in flight and a
    /// placeholder is shown instead.
    pub fn active_content(&self) -> Option<Step> {
        if self.loading { None } else { Some(self.step) }
    }

    pub fn can_submit(&self) -> bool {
        self.step.is_last() && !self.loading
    }

    /// Whether `submit` would pass validation and send a request.
    pub fn will_send(&self) -> bool {
        self.can_submit() && validate_fields(&self.fields, Field::record_fields()).is_ok()
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Store a new value and re-check that field right away.
    pub fn set_field(&mut self, field: Field, raw: &str) -> Result<(), FieldError> {
        if let Err(err) = self.fields.set(field, raw) {
            self.errors.insert(field, err.message.clone());
            return Err(err);
        }
        self.recheck(field);
        Ok(())
    }

    fn recheck(&mut self, field: Field) {
        match validate_field(&self.fields, field) {
            Ok(()) => self.errors.remove(field),
            Err(message) => self.errors.insert(field, message),
        }
    }

    /// Validate `which`, refresh their inline errors and report failures.
    fn check<I>(&mut self, which: I) -> Result<(), ValidationErrors>
    where
        I: IntoIterator<Item = Field> + Clone,
    {
        for field in which.clone() {
            self.errors.remove(field);
        }
        validate_fields(&self.fields, which).inspect_err(|errors| {
            for (field, message) in errors.iter() {
                self.errors.insert(field, message);
            }
        })
    }

    /// Advance one page if the current page's inputs are valid. A no-op on
    /// the last page.
    pub fn next(&mut self) -> Result<Step, ValidationErrors> {
        let Some(next) = self.step.next() else {
            return Ok(self.step);
        };

        if let Err(errors) = self.check(self.step.fields().iter().copied()) {
            debug!(step = %self.step, failing = errors.len(), "Step validation failed");
            return Err(errors);
        }

        self.step = next;
        Ok(next)
    }

    /// Go back one page. Never validates.
    pub fn prev(&mut self) -> Step {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Append the staged ID proof to the list and clear its inputs.
    pub fn add_id_proof(&mut self) -> Result<&[IdProof], ValidationErrors> {
        self.check([Field::IdType, Field::IdNumber])?;

        let entry = self.fields.id_proof_entry().ok_or_else(|| {
            ValidationErrors::single(Field::IdType, required_message(Field::IdType))
        })?;
        debug!(id_type = %entry.id_type, "Adding ID proof");
        self.id_proofs.push(entry);

        self.fields.clear(Field::IdType);
        self.fields.clear(Field::IdNumber);
        self.errors.remove(Field::IdType);
        self.errors.remove(Field::IdNumber);
        Ok(&self.id_proofs)
    }

    /// Validate every record input and build the request body.
    pub fn assemble_payload(&mut self) -> Result<EmployeePayload, ValidationErrors> {
        self.check(Field::record_fields().collect::<Vec<_>>())?;

        let missing = |field: Field| ValidationErrors::single(field, required_message(field));
        let f = &self.fields;
        Ok(EmployeePayload {
            employee_code: f.personal.employee_code.clone(),
            first_name: f.personal.first_name.clone(),
            last_name: f.personal.last_name.clone(),
            designation: f.personal.designation.clone(),
            gender: f.personal.gender.ok_or_else(|| missing(Field::Gender))?,
            marital_status: f
                .personal
                .marital_status
                .ok_or_else(|| missing(Field::MaritalStatus))?,
            email: f.personal.email.clone(),
            mobile_number: f.personal.mobile_number.clone(),
            dob: f.personal.dob.ok_or_else(|| missing(Field::Dob))?,
            current_state: f
                .personal
                .current_state
                .ok_or_else(|| missing(Field::CurrentState))?,
            pin_code: f.personal.pin_code.clone(),
            department: f.job.department.ok_or_else(|| missing(Field::Department))?,
            joining_date: f.job.joining_date.ok_or_else(|| missing(Field::JoiningDate))?,
            mothers_name: f.family.mothers_name.clone(),
            education_list: vec![f.education_entry()],
            id_proof_list: self.id_proofs.clone(),
        })
    }

    /// Create or update the record. On success the session is reset and the
    /// route back to the table is returned; on failure nothing is lost.
    pub async fn submit(&mut self) -> Result<Route, SubmitError> {
        if !self.step.is_last() {
            return Err(SubmitError::NotFinalStep);
        }
        if self.loading {
            return Err(SubmitError::Busy);
        }

        let payload = match self.assemble_payload() {
            Ok(payload) => payload,
            Err(errors) => {
                warn!(failing = errors.len(), "Submission blocked by validation");
                self.notices.push(Notice::error(VALIDATION_FAILED_MESSAGE));
                return Err(errors.into());
            }
        };

        self.loading = true;
        let result = match self.editing {
            Some(id) => self.transport.update(id, &payload).await,
            None => self.transport.create(&payload).await,
        };
        self.loading = false;

        match result {
            Ok(()) => {
                let message = if self.editing.is_some() {
                    UPDATED_MESSAGE
                } else {
                    REGISTERED_MESSAGE
                };
                info!(
                    employee_code = %payload.employee_code,
                    update = self.editing.is_some(),
                    "Employee saved"
                );
                self.reset();
                self.notices.push(Notice::success(message));
                Ok(Route::EmployeeTable)
            }
            Err(e) => {
                error!(error = %e, employee_id = ?self.editing, "Failed to save employee");
                let message = e.server_message().unwrap_or(SUBMISSION_FAILED_MESSAGE);
                self.notices.push(Notice::error(message));
                Err(e.into())
            }
        }
    }

    /// Back to a blank first page.
    pub fn reset(&mut self) {
        self.step = Step::FIRST;
        self.fields = FormFields::default();
        self.id_proofs.clear();
        self.editing = None;
        self.errors.clear();
        self.loading = false;
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
