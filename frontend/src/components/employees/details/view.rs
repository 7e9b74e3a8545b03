use yew::prelude::*;

use common::format::{format_currency, format_date, or_placeholder};
use common::model::employee::Employee;

use super::messages::Msg;
use super::EmployeeDetails;
use crate::components::layout::modal_sheet::ModalSheet;

pub fn view(component: &EmployeeDetails, ctx: &Context<EmployeeDetails>) -> Html {
    let link = ctx.link();
    let on_close = ctx.props().on_close.clone();

    let body = if component.loading {
        html! { <div class="loading">{"Loading employee details..."}</div> }
    } else if let Some(error) = &component.error {
        html! { <div class="error">{ error.clone() }</div> }
    } else if let Some(employee) = &component.employee {
        html! {
            <>
                { profile(employee) }
                <div class="details-actions">
                    <button class="btn btn-edit" onclick={link.callback(|_| Msg::Edit)}>
                        {"Edit Employee"}
                    </button>
                </div>
            </>
        }
    } else {
        Html::default()
    };

    html! {
        <ModalSheet title={"Employee Details".to_string()} {on_close}>
            { body }
        </ModalSheet>
    }
}

fn detail_row(label: &'static str, value: String) -> Html {
    html! {
        <div class="detail-row">
            <span class="detail-label">{ label }</span>
            <span class="detail-value">{ value }</span>
        </div>
    }
}

fn profile(employee: &Employee) -> Html {
    let status = employee.status();

    html! {
        <div class="employee-details">
            <div class="details-header">
                <div class="avatar">{ employee.initials() }</div>
                <div>
                    <h2>{ employee.full_name() }</h2>
                    <p>{ or_placeholder(Some(employee.position.as_str())).to_string() }</p>
                </div>
            </div>

            <section>
                <h3>{"Contact Information"}</h3>
                { detail_row("Email", employee.email.clone()) }
                { detail_row("Phone", or_placeholder(employee.phone.as_deref()).to_string()) }
                { detail_row("Address", or_placeholder(employee.address.as_deref()).to_string()) }
            </section>

            <section>
                <h3>{"Employment Details"}</h3>
                { detail_row("Employee ID", employee.id.to_string()) }
                { detail_row("Department", employee.department.clone()) }
                { detail_row("Position", or_placeholder(Some(employee.position.as_str())).to_string()) }
                { detail_row("Hire Date", format_date(employee.hire_date)) }
                <div class="detail-row">
                    <span class="detail-label">{"Status"}</span>
                    <span class={classes!("status-badge", status.css_class())}>{ status.label() }</span>
                </div>
            </section>

            <section>
                <h3>{"Salary Information"}</h3>
                { detail_row("Annual", format_currency(employee.salary())) }
                { detail_row("Monthly", format_currency(employee.monthly_salary())) }
                { detail_row("Per Day", format_currency(employee.daily_salary())) }
            </section>

            <section>
                <h3>{"Leave Management"}</h3>
                { detail_row("Leave Balance", format!("{} days", employee.leave_balance())) }
                { detail_row("Leaves Taken", format!("{} days", employee.leaves_taken())) }
                { detail_row("Remaining", format!("{} days", employee.leave_remaining())) }
            </section>
        </div>
    }
}
