use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::form::fields::Field;

/// Wizard pages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum Step {
    #[strum(to_string = "Personal Details")]
    Personal,
    #[strum(to_string = "Job Details")]
    Job,
    #[strum(to_string = "Family Details")]
    Family,
    #[strum(to_string = "Education Details")]
    Education,
    #[strum(to_string = "ID Proof")]
    IdProof,
}

impl Step {
    pub const FIRST: Step = Step::Personal;
    pub const LAST: Step = Step::IdProof;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Step::iter().nth(index)
    }

    pub fn count() -> usize {
        Step::iter().count()
    }

    pub fn next(self) -> Option<Step> {
        Step::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Option<Step> {
        self.index().checked_sub(1).and_then(Step::from_index)
    }

    pub fn is_last(self) -> bool {
        self == Step::LAST
    }

    /// Inputs shown on this page.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Step::Personal => &[
                Field::EmployeeCode,
                Field::FirstName,
                Field::LastName,
                Field::Designation,
                Field::Gender,
                Field::MaritalStatus,
                Field::MobileNumber,
                Field::Email,
                Field::Dob,
                Field::CurrentState,
                Field::PinCode,
            ],
            Step::Job => &[Field::Department, Field::JoiningDate],
            Step::Family => &[Field::MothersName],
            Step::Education => &[
                Field::Qualification,
                Field::Specialization,
                Field::YearOfPassout,
                Field::Percentage,
            ],
            Step::IdProof => &[Field::IdType, Field::IdNumber],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_walk_in_order() {
        assert_eq!(Step::count(), 5);
        assert_eq!(Step::Personal.next(), Some(Step::Job));
        assert_eq!(Step::Education.next(), Some(Step::IdProof));
        assert_eq!(Step::IdProof.next(), None);
        assert_eq!(Step::Personal.prev(), None);
        assert_eq!(Step::Job.prev(), Some(Step::Personal));
        assert_eq!(Step::from_index(3), Some(Step::Education));
        assert_eq!(Step::from_index(5), None);
    }

    #[test]
    fn every_field_belongs_to_exactly_one_step() {
        for field in Field::iter() {
            let owners = Step::iter().filter(|s| s.fields().contains(&field)).count();
            assert_eq!(owners, 1, "{:?}", field);
            assert!(field.step().fields().contains(&field));
        }
    }
}
