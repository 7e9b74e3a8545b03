use common::model::employee::Employee;
use common::roster::RosterState;

/// Which employee the form sheet is editing.
#[derive(Clone, PartialEq)]
pub enum FormTarget {
    Create,
    Edit(Employee),
}

/// Roster screen state. The filter, sort and paging inputs live in
/// `roster`; everything else tracks requests and which sheet is open.
pub struct EmployeeListComponent {
    pub roster: RosterState,
    pub loading: bool,
    /// Guards against overlapping roster fetches.
    pub in_flight: bool,
    /// Blocking message shown instead of the table after a failed fetch.
    pub error: Option<String>,
    pub form: Option<FormTarget>,
    /// Id of the employee shown in the details sheet.
    pub viewing: Option<i64>,
    /// Id of the employee whose delete request is running.
    pub deleting: Option<i64>,
}

impl EmployeeListComponent {
    pub fn new() -> Self {
        Self {
            roster: RosterState::new(),
            loading: true,
            in_flight: false,
            error: None,
            form: None,
            viewing: None,
            deleting: None,
        }
    }
}
