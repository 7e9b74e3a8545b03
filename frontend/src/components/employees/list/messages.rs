use common::model::employee::Employee;
use common::roster::SortField;

pub enum Msg {
    /// Fetch the roster, unless a fetch is already running.
    Load,
    Loaded(Vec<Employee>),
    LoadFailed(String),
    SetSearch(String),
    /// Raw select value; empty means every department.
    SetDepartment(String),
    /// Raw select value; empty means every status.
    SetStatus(String),
    ClearFilters,
    SortBy(SortField),
    SetPageSize(String),
    GoToPage(usize),
    OpenCreate,
    OpenEdit(Employee),
    OpenDetails(i64),
    CloseDetails,
    /// The form sheet closed; `saved` is true after a successful write.
    FormClosed { saved: bool },
    Delete(i64),
    Deleted,
    DeleteFailed,
}
