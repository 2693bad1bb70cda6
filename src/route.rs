use crate::model::Employee;

pub const TABLE_PATH: &str = "/employee-table";
pub const FORM_PATH: &str = "/employee-form";

/// Where the app can go. The form route carries the record being edited as
/// transient state; it is not encoded in the path.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    EmployeeTable,
    EmployeeForm(Option<Employee>),
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::EmployeeTable => TABLE_PATH,
            Route::EmployeeForm(_) => FORM_PATH,
        }
    }

    /// `/` redirects to the table. A form path alone opens a blank form.
    pub fn from_path(path: &str) -> Option<Route> {
        match path.trim_end_matches('/') {
            "" | TABLE_PATH => Some(Route::EmployeeTable),
            FORM_PATH => Some(Route::EmployeeForm(None)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_table() {
        assert_eq!(Route::from_path("/"), Some(Route::EmployeeTable));
        assert_eq!(Route::from_path("/employee-table"), Some(Route::EmployeeTable));
        assert_eq!(Route::from_path("/employee-form/"), Some(Route::EmployeeForm(None)));
        assert_eq!(Route::from_path("/payroll"), None);
    }
}
