use std::collections::BTreeMap;

use thiserror::Error;

use crate::form::fields::{Field, FormFields, InputKind};
use crate::utils::patterns::{EMAIL, MOBILE_NUMBER, PERCENTAGE, PIN_CODE};

/// Inline messages keyed by the field they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn single(field: Field, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.insert(field, message);
        errors
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

pub fn required_message(field: Field) -> String {
    match field.input_kind() {
        InputKind::Text => format!("Please enter {}", field.label()),
        InputKind::Choice | InputKind::Date | InputKind::Year => {
            format!("Please select {}", field.label())
        }
    }
}

/// Run the declared rules of one field against the current values.
pub fn validate_field(fields: &FormFields, field: Field) -> Result<(), String> {
    if fields.is_blank(field) {
        return if field.is_required() {
            Err(required_message(field))
        } else {
            Ok(())
        };
    }

    let value = fields.display_value(field);
    let value = value.trim();
    match field {
        Field::MobileNumber if !MOBILE_NUMBER.is_match(value) => {
            Err("Enter valid mobile number".to_string())
        }
        Field::Email if !EMAIL.is_match(value) => {
            Err(format!("{} is not a valid email", field.label()))
        }
        Field::PinCode if !PIN_CODE.is_match(value) => Err("Must be 6 digits".to_string()),
        Field::Percentage if !PERCENTAGE.is_match(value) => {
            Err("Enter valid percentage".to_string())
        }
        _ => Ok(()),
    }
}

/// Validate a set of fields, collecting one message per failing field.
pub fn validate_fields<I>(fields: &FormFields, which: I) -> Result<(), ValidationErrors>
where
    I: IntoIterator<Item = Field>,
{
    let mut errors = ValidationErrors::default();
    for field in which {
        if let Err(message) = validate_field(fields, field) {
            errors.insert(field, message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
