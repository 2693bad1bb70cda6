use chrono::NaiveDate;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumMessage, EnumString};

use crate::model::{department::Department, education::Education, id_proof::IdProof};
use crate::utils::wire_format::{
    active_flag, lenient_enum, lenient_list, null_as_default, optional_date,
};

/// Backend-assigned employee id. Never changes once a record exists.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    From,
)]
#[serde(transparent)]
pub struct EmployeeId(pub u64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum MaritalStatus {
    Single,
    Married,
}

/// States offered for the current address.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    EnumString,
    EnumIter,
    EnumMessage,
)]
#[strum(ascii_case_insensitive)]
pub enum AddressState {
    Telangana,
    #[serde(rename = "AP")]
    #[strum(to_string = "AP", serialize = "Andhra Pradesh", message = "Andhra Pradesh")]
    AndhraPradesh,
    #[serde(rename = "Tamil Nadu")]
    #[strum(to_string = "Tamil Nadu", serialize = "TamilNadu")]
    TamilNadu,
    Karnataka,
    Kerala,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum_macros::Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

/// Employee record as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub employee_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub designation: String,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub gender: Option<Gender>,
    // the backend stores this key misspelled
    #[serde(
        rename = "martialStatus",
        alias = "maritalStatus",
        default,
        deserialize_with = "lenient_enum"
    )]
    pub marital_status: Option<MaritalStatus>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mobile_number: String,
    #[serde(default, with = "optional_date")]
    pub dob: Option<NaiveDate>,
    #[serde(alias = "state", default, deserialize_with = "lenient_enum")]
    pub current_state: Option<AddressState>,
    #[serde(alias = "currentPin", default, deserialize_with = "null_as_default")]
    pub pin_code: String,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub department: Option<Department>,
    #[serde(default, with = "optional_date")]
    pub joining_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mothers_name: String,
    #[serde(default = "default_active", deserialize_with = "active_flag")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient_list")]
    pub education_list: Vec<Education>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub id_proof_list: Vec<IdProof>,
}

fn default_active() -> bool {
    true
}

impl Employee {
    /// A blank active record; mainly useful as a base for struct update syntax.
    pub fn new(id: impl Into<EmployeeId>, employee_code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            employee_code: employee_code.into(),
            first_name: String::new(),
            last_name: String::new(),
            designation: String::new(),
            gender: None,
            marital_status: None,
            email: String::new(),
            mobile_number: String::new(),
            dob: None,
            current_state: None,
            pin_code: String::new(),
            department: None,
            joining_date: None,
            mothers_name: String::new(),
            is_active: true,
            education_list: Vec::new(),
            id_proof_list: Vec::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn status(&self) -> EmployeeStatus {
        if self.is_active {
            EmployeeStatus::Active
        } else {
            EmployeeStatus::Inactive
        }
    }

    /// Inactive employees are read-only until reactivated.
    pub fn is_editable(&self) -> bool {
        self.is_active
    }
}
