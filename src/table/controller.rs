use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::api::{SharedTransport, StatusChange, TransportError};
use crate::model::{Employee, EmployeeId, EmployeeStatus};
use crate::notice::Notice;
use crate::route::Route;
use crate::table::filter::{StatusFilter, matches_search};
use crate::table::pagination::Pagination;
use crate::table::sort::{SortColumn, SortOrder, cycle};

pub const FETCHED_MESSAGE: &str = "Employees fetched successfully";
pub const NO_DATA_MESSAGE: &str = "No data received from server";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch employees";
pub const STATUS_FAILED_MESSAGE: &str = "Failed to update employee status";
pub const DELETED_MESSAGE: &str = "Employee deleted successfully";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete employee";

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("employee {0} is not in the table")]
    UnknownEmployee(EmployeeId),
    #[error("employee {0} is inactive and cannot be edited")]
    Inactive(EmployeeId),
    #[error("another change is still in flight")]
    Busy,
    #[error("nothing to confirm")]
    NothingPending,
    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    ToggleStatus,
    Delete,
}

/// A row action waiting for the user's yes/no.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub action: RowAction,
    pub id: EmployeeId,
    /// Active flag of the row when the prompt was raised.
    pub was_active: bool,
}

impl PendingAction {
    pub fn prompt(&self) -> String {
        match self.action {
            RowAction::ToggleStatus if self.was_active => {
                "Are you sure to deactivate this employee?".to_string()
            }
            RowAction::ToggleStatus => "Are you sure to activate this employee?".to_string(),
            RowAction::Delete => "Are you sure to delete this employee?".to_string(),
        }
    }
}

/// Listing screen: the fetched rows plus local search, filter, sort and
/// paging over them.
pub struct TableController {
    transport: SharedTransport,
    rows: Vec<Employee>,
    search: String,
    status_filter: StatusFilter,
    sort: Option<SortOrder>,
    pagination: Pagination,
    loading: bool,
    busy: bool,
    pending: Option<PendingAction>,
    notices: Vec<Notice>,
}

impl TableController {
    pub fn new(transport: SharedTransport, page_size: usize) -> Self {
        Self {
            transport,
            rows: Vec::new(),
            search: String::new(),
            status_filter: StatusFilter::default(),
            sort: None,
            pagination: Pagination::new(page_size),
            loading: false,
            busy: false,
            pending: None,
            notices: Vec::new(),
        }
    }

    /// Re-read the whole list from the backend. On failure the previous rows
    /// stay on screen.
    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.transport.list_all().await {
            Ok(Some(rows)) => {
                debug!(rows = rows.len(), "Employee list replaced");
                self.rows = rows;
                self.notices.push(Notice::success(FETCHED_MESSAGE));
            }
            Ok(None) => {
                warn!("Employee list response carried no data");
                self.notices.push(Notice::error(NO_DATA_MESSAGE));
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch employees");
                self.notices.push(Notice::error(FETCH_FAILED_MESSAGE));
            }
        }
        self.loading = false;
    }

    pub fn rows(&self) -> &[Employee] {
        &self.rows
    }

    pub fn find(&self, id: EmployeeId) -> Option<&Employee> {
        self.rows.iter().find(|e| e.id == id)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn status_filter(&self) -> &StatusFilter {
        &self.status_filter
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    pub fn toggle_status_filter(&mut self, status: EmployeeStatus) {
        self.status_filter.toggle(status);
    }

    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort
    }

    /// Same as clicking the column header.
    pub fn sort_by(&mut self, column: SortColumn) -> Option<SortOrder> {
        self.sort = cycle(self.sort, column);
        self.sort
    }

    /// Rows after search, status filter and sort, before paging.
    pub fn visible_rows(&self) -> Vec<&Employee> {
        let mut rows: Vec<&Employee> = self
            .rows
            .iter()
            .filter(|e| matches_search(e, &self.search))
            .filter(|e| self.status_filter.allows(e))
            .collect();
        if let Some(order) = self.sort {
            rows.sort_by(|a, b| order.compare(a, b));
        }
        rows
    }

    pub fn page_rows(&self) -> Vec<&Employee> {
        let visible = self.visible_rows();
        self.pagination.slice(&visible).to_vec()
    }

    pub fn page(&self) -> usize {
        self.pagination.current_page(self.visible_rows().len())
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.visible_rows().len())
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.set_page_size(page_size);
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Row actions are disabled while a toggle or delete is in flight.
    pub fn actions_enabled(&self) -> bool {
        !self.busy
    }

    pub fn can_edit(&self, id: EmployeeId) -> bool {
        self.actions_enabled() && self.find(id).is_some_and(Employee::is_editable)
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Route to the form for this record. Inactive records are not editable.
    pub fn edit(&self, id: EmployeeId) -> Result<Route, ActionError> {
        if self.busy {
            return Err(ActionError::Busy);
        }
        let employee = self.find(id).ok_or(ActionError::UnknownEmployee(id))?;
        if !employee.is_editable() {
            return Err(ActionError::Inactive(id));
        }
        Ok(Route::EmployeeForm(Some(employee.clone())))
    }

    fn stage(&mut self, action: RowAction, id: EmployeeId) -> Result<&PendingAction, ActionError> {
        if self.busy {
            return Err(ActionError::Busy);
        }
        let was_active = self
            .find(id)
            .map(|e| e.is_active)
            .ok_or(ActionError::UnknownEmployee(id))?;
        Ok(self.pending.insert(PendingAction {
            action,
            id,
            was_active,
        }))
    }

    pub fn request_toggle(&mut self, id: EmployeeId) -> Result<&PendingAction, ActionError> {
        self.stage(RowAction::ToggleStatus, id)
    }

    pub fn request_delete(&mut self, id: EmployeeId) -> Result<&PendingAction, ActionError> {
        self.stage(RowAction::Delete, id)
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Run the staged action, then re-fetch. Rows are never patched locally.
    pub async fn confirm(&mut self) -> Result<(), ActionError> {
        if self.busy {
            return Err(ActionError::Busy);
        }
        let pending = self.pending.take().ok_or(ActionError::NothingPending)?;

        self.busy = true;
        let result = match pending.action {
            RowAction::ToggleStatus => self.toggle_status(&pending).await,
            RowAction::Delete => self.delete(&pending).await,
        };
        self.busy = false;
        result
    }

    async fn toggle_status(&mut self, pending: &PendingAction) -> Result<(), ActionError> {
        let change = StatusChange {
            id: pending.id,
            is_active: !pending.was_active,
        };

        match self.transport.set_active(change).await {
            Ok(()) => {
                let verb = if pending.was_active {
                    "deactivated"
                } else {
                    "activated"
                };
                info!(employee_id = %pending.id, is_active = change.is_active, "Employee status changed");
                self.notices
                    .push(Notice::success(format!("Employee {} successfully", verb)));
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, employee_id = %pending.id, "Status update failed");
                self.notices.push(Notice::error(STATUS_FAILED_MESSAGE));
                Err(e.into())
            }
        }
    }

    async fn delete(&mut self, pending: &PendingAction) -> Result<(), ActionError> {
        match self.transport.delete(pending.id).await {
            Ok(()) => {
                info!(employee_id = %pending.id, "Employee deleted");
                self.notices.push(Notice::success(DELETED_MESSAGE));
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, employee_id = %pending.id, "Delete failed");
                self.notices.push(Notice::error(DELETE_FAILED_MESSAGE));
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
