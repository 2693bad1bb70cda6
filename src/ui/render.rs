use std::fmt::Write as _;

use strum::IntoEnumIterator;

use crate::form::fields::InputKind;
use crate::form::{Field, FormController, Step};
use crate::model::{Employee, EmployeeStatus};
use crate::table::{SortDirection, TableController};

pub const PROCESSING: &str = "Processing...";

const HEADERS: [&str; 10] = [
    "S.no",
    "Emp Code",
    "First Name",
    "Last Name",
    "Email",
    "Designation",
    "Department",
    "Mobile",
    "Status",
    "Action",
];

fn row_cells(employee: &Employee, table: &TableController) -> Vec<String> {
    let action = if !table.actions_enabled() {
        "busy".to_string()
    } else if table.can_edit(employee.id) {
        "edit toggle delete".to_string()
    } else {
        "toggle delete".to_string()
    };

    vec![
        employee.id.to_string(),
        employee.employee_code.clone(),
        employee.first_name.clone(),
        employee.last_name.clone(),
        employee.email.clone(),
        employee.designation.clone(),
        employee
            .department
            .map(|d| d.to_string())
            .unwrap_or_default(),
        employee.mobile_number.clone(),
        employee.status().to_string(),
        action,
    ]
}

/// Pad every column to its widest cell.
fn grid(rows: &[Vec<String>]) -> String {
    let columns = rows.first().map_or(0, Vec::len);
    let widths: Vec<usize> = (0..columns)
        .map(|c| rows.iter().map(|r| r[c].chars().count()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn render_table(table: &TableController) -> String {
    let mut out = String::from("== Employees ==\n");

    let mut criteria = Vec::new();
    if !table.search().is_empty() {
        criteria.push(format!("search: \"{}\"", table.search()));
    }
    if table.status_filter().is_active() {
        let statuses: Vec<String> = EmployeeStatus::iter()
            .filter(|s| table.status_filter().is_selected(*s))
            .map(|s| s.to_string())
            .collect();
        criteria.push(format!("status: {}", statuses.join(", ")));
    }
    if let Some(order) = table.sort_order() {
        let direction = match order.direction {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        criteria.push(format!("sort: {} {}", order.column, direction));
    }
    if !criteria.is_empty() {
        let _ = writeln!(out, "{}", criteria.join("  "));
    }

    if table.is_loading() {
        let _ = writeln!(out, "{}", PROCESSING);
        return out;
    }

    let page_rows = table.page_rows();
    if page_rows.is_empty() {
        out.push_str("No employees\n");
    } else {
        let mut rows = vec![HEADERS.iter().map(|h| h.to_string()).collect::<Vec<_>>()];
        rows.extend(page_rows.iter().map(|e| row_cells(e, table)));
        out.push_str(&grid(&rows));
    }

    let _ = writeln!(
        out,
        "page {}/{} ({} per page, {} matching)",
        table.page(),
        table.page_count(),
        table.page_size(),
        table.visible_rows().len()
    );
    if let Some(pending) = table.pending() {
        let _ = writeln!(out, "{} (yes/no)", pending.prompt());
    }
    out
}

fn field_hint(field: Field) -> String {
    match field.input_kind() {
        InputKind::Choice => format!(" ({})", field.options().join(" | ")),
        InputKind::Date => " (YYYY-MM-DD)".to_string(),
        InputKind::Year => " (YYYY)".to_string(),
        InputKind::Text => String::new(),
    }
}

pub fn render_form(form: &FormController) -> String {
    let mut out = String::from("== Employee Registration ==\n");
    if let Some(id) = form.editing_id() {
        let _ = writeln!(out, "editing employee {}", id);
    }

    let trail: Vec<String> = Step::iter()
        .map(|s| {
            if s == form.step() {
                format!("[{}]", s)
            } else {
                s.to_string()
            }
        })
        .collect();
    let _ = writeln!(
        out,
        "step {}/{}: {}",
        form.step().index() + 1,
        Step::count(),
        trail.join(" > ")
    );

    let Some(step) = form.active_content() else {
        let _ = writeln!(out, "{}", PROCESSING);
        return out;
    };

    for &field in step.fields() {
        let marker = if field.is_required() { "*" } else { " " };
        let _ = writeln!(
            out,
            "{} {} [{}]{}: {}",
            marker,
            field.label(),
            field.as_ref(),
            field_hint(field),
            form.fields().display_value(field)
        );
        if let Some(message) = form.errors().get(field) {
            let _ = writeln!(out, "    ! {}", message);
        }
    }

    if step == Step::IdProof && !form.id_proofs().is_empty() {
        out.push_str("---\n");
        for proof in form.id_proofs() {
            let _ = writeln!(out, "{}: {}", proof.id_type, proof.id_number);
        }
    }

    let mut actions = Vec::new();
    if step.prev().is_some() {
        actions.push("prev");
    }
    if step == Step::IdProof {
        actions.push("addid");
    }
    if step.is_last() {
        actions.push(if form.is_update() { "submit (Update)" } else { "submit" });
    } else {
        actions.push("next");
    }
    actions.push("back (View Employees)");
    let _ = writeln!(out, "{}", actions.join(" | "));
    out
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::fake::RecordingTransport;

    fn person(id: u64, code: &str, active: bool) -> Employee {
        Employee {
            first_name: "Asha".into(),
            is_active: active,
            ..Employee::new(id, code)
        }
    }

    #[tokio::test]
    async fn table_shows_rows_and_actions() {
        let transport = Arc::new(RecordingTransport::with_rows(vec![
            person(1, "E1", true),
            person(2, "E2", false),
        ]));
        let mut table = TableController::new(transport, 8);
        table.refresh().await;
        table.request_delete(crate::model::EmployeeId(2)).unwrap();

        let text = render_table(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("S.no"));
        assert!(lines[2].starts_with("1 ") && lines[2].ends_with("| edit toggle delete"));
        assert!(lines[3].starts_with("2 ") && lines[3].contains("Inactive"));
        assert!(!lines[3].contains("edit"));
        assert!(text.contains("page 1/1 (8 per page, 2 matching)"));
        assert!(text.contains("Are you sure to delete this employee? (yes/no)"));
    }

    #[test]
    fn empty_table_says_so() {
        let table = TableController::new(Arc::new(RecordingTransport::default()), 8);
        assert!(render_table(&table).contains("No employees"));
    }

    #[test]
    fn form_page_lists_inputs_and_errors() {
        let mut form = FormController::new(Arc::new(RecordingTransport::default()), None);
        form.set_field(Field::PinCode, "12").unwrap();
        form.set_field(Field::Gender, "female").unwrap();

        let text = render_form(&form);
        assert!(text.contains("step 1/5: [Personal Details] > Job Details"));
        assert!(text.contains("* Gender [gender] (Male | Female): Female"));
        assert!(text.contains("* Pin Code [pinCode]: 12\n    ! Must be 6 digits"));
        assert!(text.contains("* Date of Birth [dob] (YYYY-MM-DD): \n"));
        assert!(text.ends_with("next | back (View Employees)\n"));
    }
}
