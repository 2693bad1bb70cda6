use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};
use thiserror::Error;

use crate::form::step::Step;
use crate::model::{
    AddressState, Department, Education, Employee, Gender, IdProof, IdType, MaritalStatus,
};
use crate::utils::wire_format::{format_wire_year, parse_wire_date, parse_wire_year, DATE_FORMAT};

/// Every input of the wizard. The string form is the key used by
/// `set <field> <value>` on the console.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, AsRefStr,
)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum Field {
    EmployeeCode,
    FirstName,
    LastName,
    Designation,
    Gender,
    MaritalStatus,
    MobileNumber,
    Email,
    Dob,
    CurrentState,
    PinCode,
    Department,
    JoiningDate,
    MothersName,
    Qualification,
    Specialization,
    YearOfPassout,
    Percentage,
    IdType,
    IdNumber,
}

/// How an input is entered, which drives parsing and the required message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Choice,
    Date,
    Year,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::EmployeeCode => "Employee Code",
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Designation => "Designation",
            Field::Gender => "Gender",
            Field::MaritalStatus => "Marital Status",
            Field::MobileNumber => "Mobile Number",
            Field::Email => "Email",
            Field::Dob => "Date of Birth",
            Field::CurrentState => "State",
            Field::PinCode => "Pin Code",
            Field::Department => "Department",
            Field::JoiningDate => "Joining Date",
            Field::MothersName => "Mother's Name",
            Field::Qualification => "Qualification",
            Field::Specialization => "Specialization",
            Field::YearOfPassout => "Year of Passout",
            Field::Percentage => "Percentage",
            Field::IdType => "ID Type",
            Field::IdNumber => "ID Number",
        }
    }

    pub fn step(self) -> Step {
        Step::iter()
            .find(|step| step.fields().contains(&self))
            .unwrap_or(Step::LAST)
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            Field::Gender
            | Field::MaritalStatus
            | Field::CurrentState
            | Field::Department
            | Field::IdType => InputKind::Choice,
            Field::Dob | Field::JoiningDate => InputKind::Date,
            Field::YearOfPassout => InputKind::Year,
            _ => InputKind::Text,
        }
    }

    pub fn is_required(self) -> bool {
        self != Field::YearOfPassout
    }

    /// Fields that make up the submitted record. The ID proof inputs are a
    /// staging area for `add_id_proof` and are not part of it.
    pub fn record_fields() -> impl Iterator<Item = Field> {
        Field::iter().filter(|f| f.step() != Step::IdProof)
    }

    /// Accepted values for choice inputs, as shown to the user.
    pub fn options(self) -> Vec<String> {
        match self {
            Field::Gender => Gender::iter().map(|v| v.to_string()).collect(),
            Field::MaritalStatus => MaritalStatus::iter().map(|v| v.to_string()).collect(),
            Field::CurrentState => AddressState::iter().map(|v| v.to_string()).collect(),
            Field::Department => Department::iter().map(|v| v.to_string()).collect(),
            Field::IdType => IdType::iter().map(|v| v.to_string()).collect(),
            _ => Vec::new(),
        }
    }
}

/// Raw input that could not be turned into the field's type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalDetails {
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub designation: String,
    pub gender: Option<Gender>,
    pub marital_status: Option<MaritalStatus>,
    pub mobile_number: String,
    pub email: String,
    pub dob: Option<NaiveDate>,
    pub current_state: Option<AddressState>,
    pub pin_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDetails {
    pub department: Option<Department>,
    pub joining_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyDetails {
    pub mothers_name: String,
}

/// The single education entry captured per submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationDetails {
    pub qualification: String,
    pub specialization: String,
    pub year_of_passout: Option<i32>,
    pub percentage: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdProofDraft {
    pub id_type: Option<IdType>,
    pub id_number: String,
}

/// Values of every wizard input, grouped by page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub personal: PersonalDetails,
    pub job: JobDetails,
    pub family: FamilyDetails,
    pub education: EducationDetails,
    pub id_proof: IdProofDraft,
}

fn parse_choice<T>(field: Field, raw: &str) -> Result<T, FieldError>
where
    T: FromStr,
{
    raw.parse::<T>().map_err(|_| {
        FieldError::new(
            field,
            format!("{} must be one of: {}", field.label(), field.options().join(", ")),
        )
    })
}

fn show<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

impl FormFields {
    /// Pre-fill from an existing record for editing. Education comes from the
    /// record's first entry.
    pub fn from_employee(employee: &Employee) -> Self {
        let education = employee
            .education_list
            .first()
            .map(|e| EducationDetails {
                qualification: e.qualification.clone(),
                specialization: e.specialization.clone(),
                year_of_passout: e.year_of_passout,
                percentage: e.percentage.clone(),
            })
            .unwrap_or_default();

        Self {
            personal: PersonalDetails {
                employee_code: employee.employee_code.clone(),
                first_name: employee.first_name.clone(),
                last_name: employee.last_name.clone(),
                designation: employee.designation.clone(),
                gender: employee.gender,
                marital_status: employee.marital_status,
                mobile_number: employee.mobile_number.clone(),
                email: employee.email.clone(),
                dob: employee.dob,
                current_state: employee.current_state,
                pin_code: employee.pin_code.clone(),
            },
            job: JobDetails {
                department: employee.department,
                joining_date: employee.joining_date,
            },
            family: FamilyDetails {
                mothers_name: employee.mothers_name.clone(),
            },
            education,
            id_proof: IdProofDraft::default(),
        }
    }

    /// Parse `raw` into the slot for `field`. Blank input clears the slot.
    pub fn set(&mut self, field: Field, raw: &str) -> Result<(), FieldError> {
        let raw = raw.trim();
        if raw.is_empty() {
            self.clear(field);
            return Ok(());
        }

        match field {
            Field::EmployeeCode => self.personal.employee_code = raw.to_string(),
            Field::FirstName => self.personal.first_name = raw.to_string(),
            Field::LastName => self.personal.last_name = raw.to_string(),
            Field::Designation => self.personal.designation = raw.to_string(),
            Field::Gender => self.personal.gender = Some(parse_choice(field, raw)?),
            Field::MaritalStatus => self.personal.marital_status = Some(parse_choice(field, raw)?),
            Field::MobileNumber => self.personal.mobile_number = raw.to_string(),
            Field::Email => self.personal.email = raw.to_string(),
            Field::Dob => self.personal.dob = Some(parse_date(field, raw)?),
            Field::CurrentState => self.personal.current_state = Some(parse_choice(field, raw)?),
            Field::PinCode => self.personal.pin_code = raw.to_string(),
            Field::Department => self.job.department = Some(parse_choice(field, raw)?),
            Field::JoiningDate => self.job.joining_date = Some(parse_date(field, raw)?),
            Field::MothersName => self.family.mothers_name = raw.to_string(),
            Field::Qualification => self.education.qualification = raw.to_string(),
            Field::Specialization => self.education.specialization = raw.to_string(),
            Field::YearOfPassout => {
                let year = parse_wire_year(raw).filter(|_| raw.len() == 4).ok_or_else(|| {
                    FieldError::new(field, format!("{} must be a year like 2015", field.label()))
                })?;
                self.education.year_of_passout = Some(year);
            }
            Field::Percentage => self.education.percentage = raw.to_string(),
            Field::IdType => self.id_proof.id_type = Some(parse_choice(field, raw)?),
            Field::IdNumber => self.id_proof.id_number = raw.to_string(),
        }
        Ok(())
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::EmployeeCode => self.personal.employee_code.clear(),
            Field::FirstName => self.personal.first_name.clear(),
            Field::LastName => self.personal.last_name.clear(),
            Field::Designation => self.personal.designation.clear(),
            Field::Gender => self.personal.gender = None,
            Field::MaritalStatus => self.personal.marital_status = None,
            Field::MobileNumber => self.personal.mobile_number.clear(),
            Field::Email => self.personal.email.clear(),
            Field::Dob => self.personal.dob = None,
            Field::CurrentState => self.personal.current_state = None,
            Field::PinCode => self.personal.pin_code.clear(),
            Field::Department => self.job.department = None,
            Field::JoiningDate => self.job.joining_date = None,
            Field::MothersName => self.family.mothers_name.clear(),
            Field::Qualification => self.education.qualification.clear(),
            Field::Specialization => self.education.specialization.clear(),
            Field::YearOfPassout => self.education.year_of_passout = None,
            Field::Percentage => self.education.percentage.clear(),
            Field::IdType => self.id_proof.id_type = None,
            Field::IdNumber => self.id_proof.id_number.clear(),
        }
    }

    /// Current value as text; empty when unset.
    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::EmployeeCode => self.personal.employee_code.clone(),
            Field::FirstName => self.personal.first_name.clone(),
            Field::LastName => self.personal.last_name.clone(),
            Field::Designation => self.personal.designation.clone(),
            Field::Gender => show(&self.personal.gender),
            Field::MaritalStatus => show(&self.personal.marital_status),
            Field::MobileNumber => self.personal.mobile_number.clone(),
            Field::Email => self.personal.email.clone(),
            Field::Dob => self
                .personal
                .dob
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            Field::CurrentState => show(&self.personal.current_state),
            Field::PinCode => self.personal.pin_code.clone(),
            Field::Department => show(&self.job.department),
            Field::JoiningDate => self
                .job
                .joining_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            Field::MothersName => self.family.mothers_name.clone(),
            Field::Qualification => self.education.qualification.clone(),
            Field::Specialization => self.education.specialization.clone(),
            Field::YearOfPassout => self
                .education
                .year_of_passout
                .map(format_wire_year)
                .unwrap_or_default(),
            Field::Percentage => self.education.percentage.clone(),
            Field::IdType => show(&self.id_proof.id_type),
            Field::IdNumber => self.id_proof.id_number.clone(),
        }
    }

    pub fn is_blank(&self, field: Field) -> bool {
        self.display_value(field).trim().is_empty()
    }

    pub fn education_entry(&self) -> Education {
        Education {
            qualification: self.education.qualification.clone(),
            specialization: self.education.specialization.clone(),
            year_of_passout: self.education.year_of_passout,
            percentage: self.education.percentage.clone(),
        }
    }

    /// The staged ID proof, when both inputs are set.
    pub fn id_proof_entry(&self) -> Option<IdProof> {
        let id_type = self.id_proof.id_type?;
        if self.id_proof.id_number.trim().is_empty() {
            return None;
        }
        Some(IdProof {
            id_type,
            id_number: self.id_proof.id_number.clone(),
        })
    }
}

fn parse_date(field: Field, raw: &str) -> Result<NaiveDate, FieldError> {
    parse_wire_date(raw).ok_or_else(|| {
        FieldError::new(
            field,
            format!("{} must be a date in YYYY-MM-DD format", field.label()),
        )
    })
}
