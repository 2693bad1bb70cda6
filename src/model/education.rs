use serde::{Deserialize, Serialize};

use crate::utils::wire_format::{null_as_default, optional_year};

/// One education entry as exchanged with the backend.
///
/// `percentage` stays a string: the wire carries it verbatim as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default, deserialize_with = "null_as_default")]
    pub qualification: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specialization: String,
    #[serde(default, with = "optional_year")]
    pub year_of_passout: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub percentage: String,
}
