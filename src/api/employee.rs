use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{
    AddressState, Department, Education, Employee, EmployeeId, Gender, IdProof, MaritalStatus,
};
use crate::utils::wire_format::{date, lenient_optional_list};

/// Body of `POST /employee/create` and `POST /employee/update/:id`.
///
/// Carries neither `id` nor `isActive`: the id is part of the update path
/// and the flag only changes through activate/deactivate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub designation: String,
    pub gender: Gender,
    #[serde(rename = "martialStatus")]
    pub marital_status: MaritalStatus,
    pub email: String,
    pub mobile_number: String,
    #[serde(with = "date")]
    pub dob: NaiveDate,
    pub current_state: AddressState,
    pub pin_code: String,
    pub department: Department,
    #[serde(with = "date")]
    pub joining_date: NaiveDate,
    pub mothers_name: String,
    pub education_list: Vec<Education>,
    pub id_proof_list: Vec<IdProof>,
}

/// `GET /employee/getAll`. A missing `data` object is reported, not
/// treated as an empty table. Rows that fail to decode are dropped.
#[derive(Debug, Deserialize)]
pub struct EmployeeListResponse {
    #[serde(default, deserialize_with = "lenient_optional_list")]
    pub data: Option<Vec<Employee>>,
}

/// Body of `POST /employee/activateOrDeactivate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub id: EmployeeId,
    pub is_active: bool,
}

/// Error body the backend sends with non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
