//! Properties for `EmployeeForm`.

use yew::prelude::*;

use common::model::employee::Employee;

#[derive(Properties, PartialEq, Clone)]
pub struct EmployeeFormProps {
    /// Employee to edit, or `None` to create a new one.
    #[prop_or_default]
    pub employee: Option<Employee>,

    /// Called when the sheet closes. The flag is `true` only after the
    /// backend accepted the write, which tells the roster to reload.
    pub on_close: Callback<bool>,
}
