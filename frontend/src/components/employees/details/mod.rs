//! Read-only details sheet. Always fetches the employee by id rather than
//! reusing the roster row, so it shows what the backend holds now.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod view;

pub use messages::Msg;
pub use props::EmployeeDetailsProps;

use common::model::employee::Employee;

use crate::services::employee_service;
use crate::services::error::ServiceError;

pub struct EmployeeDetails {
    pub employee: Option<Employee>,
    pub loading: bool,
    pub error: Option<String>,
}

impl EmployeeDetails {
    fn new() -> Self {
        Self {
            employee: None,
            loading: true,
            error: None,
        }
    }

    /// Late answers for an id we have since moved away from are dropped.
    fn apply_loaded(&mut self, current_id: i64, employee: Employee) -> bool {
        if employee.id != current_id {
            return false;
        }
        self.loading = false;
        self.error = None;
        self.employee = Some(employee);
        true
    }

    fn apply_failed(&mut self, current_id: i64, id: i64, message: String) -> bool {
        if id != current_id {
            return false;
        }
        self.loading = false;
        self.employee = None;
        self.error = Some(message);
        true
    }
}

impl Component for EmployeeDetails {
    type Message = Msg;
    type Properties = EmployeeDetailsProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                self.loading = true;
                self.error = None;
                let id = ctx.props().employee_id;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match employee_service::get_employee(id).await {
                        Ok(employee) => link.send_message(Msg::Loaded(employee)),
                        Err(err) => {
                            gloo_console::error!("Error loading employee details:", err.to_string());
                            let message = match err {
                                ServiceError::NotFound => "Employee not found",
                                _ => "Failed to load employee details",
                            };
                            link.send_message(Msg::LoadFailed {
                                id,
                                message: message.to_string(),
                            });
                        }
                    }
                });
                true
            }
            Msg::Loaded(employee) => self.apply_loaded(ctx.props().employee_id, employee),
            Msg::LoadFailed { id, message } => {
                self.apply_failed(ctx.props().employee_id, id, message)
            }
            Msg::Edit => {
                if let Some(employee) = self.employee.clone() {
                    ctx.props().on_edit.emit(employee);
                }
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().employee_id != old_props.employee_id {
            self.employee = None;
            ctx.link().send_message(Msg::Load);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
