//! Message handling for the roster screen.
//!
//! Filter and sort messages only touch `RosterState` and re-render; the
//! derived page is recomputed from it on every render. Network messages
//! follow one rule: reads that fail replace the table with an error, writes
//! that fail leave the table alone and raise a toast.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::employee::EmployeeStatus;
use common::roster::PageSize;

use super::messages::Msg;
use super::state::{EmployeeListComponent, FormTarget};
use crate::components::helpers::{confirm, show_toast};
use crate::services::employee_service;

pub fn update(
    component: &mut EmployeeListComponent,
    ctx: &Context<EmployeeListComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Load => {
            if component.in_flight {
                return false;
            }
            component.in_flight = true;
            component.loading = true;
            component.error = None;

            let link = ctx.link().clone();
            spawn_local(async move {
                match employee_service::list_employees().await {
                    Ok(employees) => link.send_message(Msg::Loaded(employees)),
                    Err(err) => {
                        gloo_console::error!("Error loading employees:", err.to_string());
                        link.send_message(Msg::LoadFailed(
                            "Failed to load employees. Make sure the backend is running."
                                .to_string(),
                        ));
                    }
                }
            });
            true
        }
        Msg::Loaded(employees) => {
            component.in_flight = false;
            component.loading = false;
            component.roster.replace_employees(employees);
            true
        }
        Msg::LoadFailed(message) => {
            component.in_flight = false;
            component.loading = false;
            component.roster.clear_employees();
            component.error = Some(message);
            true
        }
        Msg::SetSearch(term) => {
            component.roster.set_search_term(term);
            true
        }
        Msg::SetDepartment(department) => {
            component.roster.set_department_filter(Some(department));
            true
        }
        Msg::SetStatus(label) => {
            component
                .roster
                .set_status_filter(EmployeeStatus::from_label(&label));
            true
        }
        Msg::ClearFilters => {
            component.roster.clear_filters();
            true
        }
        Msg::SortBy(field) => {
            component.roster.toggle_sort(field);
            true
        }
        Msg::SetPageSize(value) => {
            match value.parse().ok().and_then(PageSize::from_rows) {
                Some(size) => {
                    component.roster.set_page_size(size);
                    true
                }
                None => false,
            }
        }
        Msg::GoToPage(page) => {
            let before = component.roster.current_page();
            component.roster.go_to_page(page);
            component.roster.current_page() != before
        }
        Msg::OpenCreate => {
            component.viewing = None;
            component.form = Some(FormTarget::Create);
            true
        }
        Msg::OpenEdit(employee) => {
            component.viewing = None;
            component.form = Some(FormTarget::Edit(employee));
            true
        }
        Msg::OpenDetails(id) => {
            component.viewing = Some(id);
            true
        }
        Msg::CloseDetails => {
            component.viewing = None;
            true
        }
        Msg::FormClosed { saved } => {
            component.form = None;
            if saved {
                ctx.link().send_message(Msg::Load);
            }
            true
        }
        Msg::Delete(id) => {
            if component.deleting.is_some()
                || !confirm("Are you sure you want to delete this employee?")
            {
                return false;
            }
            component.deleting = Some(id);

            let link = ctx.link().clone();
            spawn_local(async move {
                match employee_service::delete_employee(id).await {
                    Ok(()) => link.send_message(Msg::Deleted),
                    Err(err) => {
                        gloo_console::error!("Error deleting employee:", err.to_string());
                        link.send_message(Msg::DeleteFailed);
                    }
                }
            });
            true
        }
        Msg::Deleted => {
            component.deleting = None;
            show_toast("Employee deleted");
            ctx.link().send_message(Msg::Load);
            true
        }
        Msg::DeleteFailed => {
            component.deleting = None;
            show_toast("Failed to delete employee");
            true
        }
    }
}
