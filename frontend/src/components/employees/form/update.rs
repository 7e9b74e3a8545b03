use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::EmployeeForm;
use crate::components::helpers::{confirm, show_toast};
use crate::services::employee_service;

pub fn update(component: &mut EmployeeForm, ctx: &Context<EmployeeForm>, msg: Msg) -> bool {
    match msg {
        Msg::Input(field, value) => {
            component.draft.set(field, value);
            component.errors.clear(field);
            true
        }
        Msg::Submit => {
            if component.saving {
                return false;
            }
            let payload = match component.draft.validate() {
                Ok(payload) => payload,
                Err(errors) => {
                    component.errors = errors;
                    return true;
                }
            };
            component.saving = true;

            let existing_id = ctx.props().employee.as_ref().map(|employee| employee.id);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match existing_id {
                    Some(id) => employee_service::update_employee(id, &payload).await,
                    None => employee_service::create_employee(&payload).await,
                };
                match result {
                    Ok(saved) => {
                        gloo_console::log!("Saved employee", saved.id.to_string());
                        link.send_message(Msg::SaveSucceeded);
                    }
                    Err(err) => {
                        gloo_console::error!("Error saving employee:", err.to_string());
                        link.send_message(Msg::SaveFailed);
                    }
                }
            });
            true
        }
        Msg::SaveSucceeded => {
            component.saving = false;
            let message = if ctx.props().employee.is_some() {
                "Employee updated"
            } else {
                "Employee created"
            };
            show_toast(message);
            ctx.props().on_close.emit(true);
            false
        }
        Msg::SaveFailed => {
            component.saving = false;
            show_toast("Failed to save employee. Please try again.");
            true
        }
        Msg::Cancel => {
            if component.saving {
                return false;
            }
            if component.is_dirty() && !confirm("Discard unsaved changes?") {
                return false;
            }
            ctx.props().on_close.emit(false);
            false
        }
    }
}
