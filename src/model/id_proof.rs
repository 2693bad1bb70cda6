use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumMessage,
)]
#[strum(ascii_case_insensitive)]
pub enum IdType {
    #[strum(message = "Aadhar Card")]
    Aadhar,
    #[serde(rename = "PAN")]
    #[strum(serialize = "PAN", message = "PAN Card")]
    Pan,
    #[strum(message = "Driving License")]
    DrivingLicense,
}

/// One identity document attached to an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdProof {
    pub id_type: IdType,
    pub id_number: String,
}
