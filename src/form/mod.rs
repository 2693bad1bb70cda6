//! Multi-step employee registration / edit wizard.

pub mod controller;
pub mod fields;
pub mod step;
pub mod validate;

pub use controller::{FormController, SubmitError};
pub use fields::{Field, FieldError, FormFields};
pub use step::Step;
pub use validate::ValidationErrors;
