use yew::prelude::*;

use common::model::employee::Employee;

#[derive(Properties, PartialEq, Clone)]
pub struct EmployeeDetailsProps {
    pub employee_id: i64,
    pub on_close: Callback<()>,
    /// Hands the loaded record to the roster so it can open the edit form.
    pub on_edit: Callback<Employee>,
}
