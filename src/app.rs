use tracing::info;

use crate::api::SharedTransport;
use crate::form::FormController;
use crate::notice::Notice;
use crate::route::Route;
use crate::table::TableController;

pub enum Screen {
    Table(TableController),
    Form(FormController),
}

/// Owns whichever screen is mounted and moves between them.
pub struct App {
    transport: SharedTransport,
    page_size: usize,
    route: Route,
    screen: Screen,
    notices: Vec<Notice>,
}

impl App {
    pub fn new(transport: SharedTransport, page_size: usize) -> Self {
        let screen = Screen::Table(TableController::new(transport.clone(), page_size));
        Self {
            transport,
            page_size,
            route: Route::EmployeeTable,
            screen,
            notices: Vec::new(),
        }
    }

    /// Mount the landing screen.
    pub async fn start(&mut self) {
        self.navigate(Route::EmployeeTable).await;
    }

    /// Replace the mounted screen. Notices raised by the old one are kept so
    /// a success message survives the redirect.
    pub async fn navigate(&mut self, route: Route) {
        let pending = self.screen_notices();
        self.notices.extend(pending);
        info!(path = route.path(), "Navigating");

        self.screen = match &route {
            Route::EmployeeTable => {
                let mut table = TableController::new(self.transport.clone(), self.page_size);
                table.refresh().await;
                Screen::Table(table)
            }
            Route::EmployeeForm(employee) => {
                Screen::Form(FormController::new(self.transport.clone(), employee.clone()))
            }
        };
        self.route = route;
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    fn screen_notices(&mut self) -> Vec<Notice> {
        match &mut self.screen {
            Screen::Table(table) => table.take_notices(),
            Screen::Form(form) => form.take_notices(),
        }
    }

    /// Everything raised since the last call, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        let mut notices = std::mem::take(&mut self.notices);
        notices.extend(self.screen_notices());
        notices
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::api::fake::{Call, RecordingTransport};
    use crate::form::Field;
    use crate::model::{
        AddressState, Department, Education, Employee, Gender, MaritalStatus,
    };

    #[tokio::test]
    async fn start_mounts_the_table() {
        let transport = Arc::new(RecordingTransport::with_rows(vec![Employee::new(1, "E1")]));
        let mut app = App::new(transport.clone(), 8);

        app.start().await;

        assert_eq!(app.route().path(), "/employee-table");
        assert_eq!(transport.calls(), vec![Call::ListAll]);
        match app.screen() {
            Screen::Table(table) => assert_eq!(table.rows().len(), 1),
            Screen::Form(_) => panic!("expected the table"),
        }
        assert_eq!(app.take_notices().len(), 1);
    }

    fn complete_record() -> Employee {
        Employee {
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            designation: "Engineer".into(),
            gender: Some(Gender::Female),
            marital_status: Some(MaritalStatus::Single),
            email: "asha@corp.in".into(),
            mobile_number: "9876543210".into(),
            dob: NaiveDate::from_ymd_opt(1994, 3, 7),
            current_state: Some(AddressState::Kerala),
            pin_code: "682001".into(),
            department: Some(Department::Hr),
            joining_date: NaiveDate::from_ymd_opt(2020, 1, 6),
            mothers_name: "Lakshmi".into(),
            education_list: vec![Education {
                qualification: "MBA".into(),
                specialization: "HR".into(),
                year_of_passout: Some(2018),
                percentage: "74".into(),
            }],
            ..Employee::new(4, "E4")
        }
    }

    #[tokio::test]
    async fn submit_redirect_keeps_the_form_notice() {
        let transport = Arc::new(RecordingTransport::with_rows(vec![complete_record()]));
        let mut app = App::new(transport.clone(), 8);
        app.navigate(Route::EmployeeForm(Some(complete_record()))).await;
        assert_eq!(app.route().path(), "/employee-form");

        let Screen::Form(form) = app.screen_mut() else {
            panic!("expected the form");
        };
        form.set_field(Field::Designation, "Lead").unwrap();
        while !form.step().is_last() {
            form.next().unwrap();
        }
        let route = form.submit().await.unwrap();
        app.navigate(route).await;

        let messages: Vec<_> = app.take_notices().into_iter().map(|n| n.message).collect();
        assert_eq!(
            messages,
            vec!["Employee Updated Successfully!", "Employees fetched successfully"]
        );
        match app.screen() {
            Screen::Table(table) => assert_eq!(table.rows()[0].designation, "Lead"),
            Screen::Form(_) => panic!("expected the table"),
        }
        assert!(app.take_notices().is_empty());
    }
}
