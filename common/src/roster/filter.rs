//! Search and column filters over the employee collection.

use crate::model::employee::{Employee, EmployeeStatus};

/// Constraints applied to the roster. `None` and an empty search term impose
/// no constraint; the ones present are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterFilter {
    pub search_term: String,
    pub department: Option<String>,
    pub status: Option<EmployeeStatus>,
}

impl RosterFilter {
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.department.is_none() && self.status.is_none()
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        matches_search(employee, &self.search_term)
            && self
                .department
                .as_ref()
                .is_none_or(|department| employee.department == *department)
            && self
                .status
                .is_none_or(|status| employee.status() == status)
    }
}

/// Case-insensitive substring match on name, email or position, or a plain
/// substring match on the decimal id.
fn matches_search(employee: &Employee, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    [
        &employee.first_name,
        &employee.last_name,
        &employee.email,
        &employee.position,
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(&needle))
        || employee.id.to_string().contains(term)
}

/// Keeps the employees matching `filter`, preserving collection order.
pub fn filter<'a>(employees: &'a [Employee], filter: &RosterFilter) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|employee| filter.matches(employee))
        .collect()
}
