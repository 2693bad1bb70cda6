use std::collections::BTreeSet;

use serde_json::Value;

use crate::model::{Employee, EmployeeStatus};

/// Every value of the record flattened to text, nested lists included.
pub fn search_text(employee: &Employee) -> String {
    let mut parts = Vec::new();
    if let Ok(value) = serde_json::to_value(employee) {
        collect_leaves(&value, &mut parts);
    }
    parts.join(" ")
}

fn collect_leaves(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::String(s) => out.push(s.clone()),
        Value::Bool(b) => out.push(b.to_string()),
        Value::Number(n) => out.push(n.to_string()),
        Value::Array(items) => items.iter().for_each(|v| collect_leaves(v, out)),
        Value::Object(map) => map.values().for_each(|v| collect_leaves(v, out)),
    }
}

/// Case-insensitive substring match; a blank query matches everything.
pub fn matches_search(employee: &Employee, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    search_text(employee)
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Checklist filter on the Status column. Nothing checked means no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusFilter {
    selected: BTreeSet<EmployeeStatus>,
}

impl StatusFilter {
    pub fn only(statuses: &[EmployeeStatus]) -> Self {
        Self {
            selected: statuses.iter().copied().collect(),
        }
    }

    pub fn toggle(&mut self, status: EmployeeStatus) {
        if !self.selected.remove(&status) {
            self.selected.insert(status);
        }
    }

    pub fn is_selected(&self, status: EmployeeStatus) -> bool {
        self.selected.contains(&status)
    }

    pub fn reset(&mut self) {
        self.selected.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn allows(&self, employee: &Employee) -> bool {
        self.selected.is_empty() || self.is_selected(employee.status())
    }
}
