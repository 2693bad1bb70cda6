use std::cmp::Ordering;

use strum_macros::{Display, EnumString};

use crate::model::Employee;

/// Sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SortColumn {
    #[strum(serialize = "id", serialize = "sno")]
    Id,
    #[strum(serialize = "code", serialize = "employeeCode")]
    EmployeeCode,
    #[strum(serialize = "first", serialize = "firstName")]
    FirstName,
    #[strum(serialize = "last", serialize = "lastName")]
    LastName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortColumn {
    pub fn compare(self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            SortColumn::Id => a.id.cmp(&b.id),
            SortColumn::EmployeeCode => a.employee_code.cmp(&b.employee_code),
            SortColumn::FirstName => a.first_name.cmp(&b.first_name),
            SortColumn::LastName => a.last_name.cmp(&b.last_name),
        }
    }
}

impl SortOrder {
    pub fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        let ordering = self.column.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Header-click cycle: ascending, descending, unsorted. Clicking another
/// column starts it at ascending.
pub fn cycle(current: Option<SortOrder>, column: SortColumn) -> Option<SortOrder> {
    match current {
        Some(SortOrder {
            column: c,
            direction: SortDirection::Ascending,
        }) if c == column => Some(SortOrder {
            column,
            direction: SortDirection::Descending,
        }),
        Some(SortOrder {
            column: c,
            direction: SortDirection::Descending,
        }) if c == column => None,
        _ => Some(SortOrder {
            column,
            direction: SortDirection::Ascending,
        }),
    }
}
