use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::format::{format_currency, or_placeholder};
use common::model::employee::{Employee, EmployeeStatus};
use common::roster::{DerivedView, PageItem, PageSize, SortField, SortSpec};

use super::messages::Msg;
use super::state::{EmployeeListComponent, FormTarget};
use crate::components::employees::details::EmployeeDetails;
use crate::components::employees::form::EmployeeForm;

pub fn view(component: &EmployeeListComponent, ctx: &Context<EmployeeListComponent>) -> Html {
    let link = ctx.link();

    if component.loading && component.roster.employees().is_empty() {
        return html! { <div class="loading">{"Loading employees..."}</div> };
    }

    if let Some(error) = &component.error {
        return html! {
            <div class="error">
                <p>{ error.clone() }</p>
                <button class="btn btn-secondary" onclick={link.callback(|_| Msg::Load)}>{"Retry"}</button>
            </div>
        };
    }

    let derived = component.roster.derive();

    html! {
        <div class="employee-list-container">
            <div class="header">
                <h1>{"Employee Management"}</h1>
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                    {"+ Add New Employee"}
                </button>
            </div>
            { filters(component, link) }
            <div class="results-info">
                { results_caption(&derived) }
            </div>
            {
                if derived.matched == 0 {
                    html! { <div class="no-results">{"No employees found"}</div> }
                } else {
                    html! {
                        <>
                            { table(component, &derived, link) }
                            { pagination(&derived, link) }
                        </>
                    }
                }
            }
            { sheets(component, link) }
        </div>
    }
}

fn results_caption(derived: &DerivedView) -> String {
    if derived.matched == 0 {
        format!("Showing 0 of {} employees", derived.total)
    } else {
        format!(
            "Showing {}–{} of {} matching ({} total)",
            derived.first_row, derived.last_row, derived.matched, derived.total
        )
    }
}

fn filters(component: &EmployeeListComponent, link: &Scope<EmployeeListComponent>) -> Html {
    let filter = component.roster.filter();
    let department = filter.department.clone().unwrap_or_default();
    let status = filter.status.map(EmployeeStatus::label).unwrap_or_default();
    let page_size = component.roster.page_size().rows().to_string();

    html! {
        <div class="filters">
            <div class="search-box">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by name, email, position or ID..."
                    value={filter.search_term.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetSearch(input.value())
                    })}
                />
            </div>
            <select
                class="filter-select"
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::SetDepartment(select.value())
                })}
            >
                <option value="" selected={department.is_empty()}>{"All Departments"}</option>
                { for component.roster.departments().into_iter().map(|name| html! {
                    <option key={name.clone()} value={name.clone()} selected={name == department}>
                        { name.clone() }
                    </option>
                }) }
            </select>
            <select
                class="filter-select"
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::SetStatus(select.value())
                })}
            >
                <option value="" selected={status.is_empty()}>{"All Status"}</option>
                { for EmployeeStatus::ALL.into_iter().map(|option| html! {
                    <option key={option.label()} value={option.label()} selected={option.label() == status}>
                        { option.label() }
                    </option>
                }) }
            </select>
            <select
                class="filter-select"
                title="Rows per page"
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::SetPageSize(select.value())
                })}
            >
                { for PageSize::ALL.into_iter().map(|size| {
                    let rows = size.rows().to_string();
                    html! {
                        <option key={rows.clone()} value={rows.clone()} selected={rows == page_size}>
                            { format!("{rows} per page") }
                        </option>
                    }
                }) }
            </select>
            if component.roster.has_active_filters() {
                <button class="btn btn-secondary" onclick={link.callback(|_| Msg::ClearFilters)}>
                    {"Clear Filters"}
                </button>
            }
        </div>
    }
}

fn sort_header(
    label: &'static str,
    field: SortField,
    sort: SortSpec,
    link: &Scope<EmployeeListComponent>,
) -> Html {
    let indicator = if sort.field == field {
        sort.direction.indicator()
    } else {
        ""
    };
    html! {
        <th class="sortable" onclick={link.callback(move |_| Msg::SortBy(field))}>
            { label }{" "}{ indicator }
        </th>
    }
}

fn table(
    component: &EmployeeListComponent,
    derived: &DerivedView,
    link: &Scope<EmployeeListComponent>,
) -> Html {
    let sort = component.roster.sort();

    html! {
        <table class="employee-table">
            <thead>
                <tr>
                    { sort_header("ID", SortField::Id, sort, link) }
                    { sort_header("Name", SortField::FirstName, sort, link) }
                    { sort_header("Email", SortField::Email, sort, link) }
                    { sort_header("Phone", SortField::Phone, sort, link) }
                    { sort_header("Department", SortField::Department, sort, link) }
                    { sort_header("Position", SortField::Position, sort, link) }
                    <th>{"Salary"}</th>
                    { sort_header("Status", SortField::Status, sort, link) }
                    <th>{"Actions"}</th>
                </tr>
            </thead>
            <tbody>
                { for derived.rows.iter().map(|employee| row(component, employee, link)) }
            </tbody>
        </table>
    }
}

fn row(
    component: &EmployeeListComponent,
    employee: &Employee,
    link: &Scope<EmployeeListComponent>,
) -> Html {
    let id = employee.id;
    let status = employee.status();
    let to_edit = employee.clone();
    let deleting = component.deleting == Some(id);

    html! {
        <tr key={id.to_string()}>
            <td>{ id.to_string() }</td>
            <td>{ employee.full_name() }</td>
            <td>{ employee.email.clone() }</td>
            <td>{ or_placeholder(employee.phone.as_deref()).to_string() }</td>
            <td>{ employee.department.clone() }</td>
            <td>{ or_placeholder(Some(employee.position.as_str())).to_string() }</td>
            <td>{ format_currency(employee.salary()) }</td>
            <td>
                <span class={classes!("status-badge", status.css_class())}>{ status.label() }</span>
            </td>
            <td class="actions">
                <button class="btn btn-view" onclick={link.callback(move |_| Msg::OpenDetails(id))}>
                    {"View"}
                </button>
                <button class="btn btn-edit" onclick={link.callback(move |_| Msg::OpenEdit(to_edit.clone()))}>
                    {"Edit"}
                </button>
                <button
                    class="btn btn-delete"
                    disabled={component.deleting.is_some()}
                    onclick={link.callback(move |_| Msg::Delete(id))}
                >
                    { if deleting { "Deleting..." } else { "Delete" } }
                </button>
            </td>
        </tr>
    }
}

fn pagination(derived: &DerivedView, link: &Scope<EmployeeListComponent>) -> Html {
    if derived.total_pages <= 1 {
        return Html::default();
    }
    let current = derived.current_page;

    html! {
        <div class="pagination">
            <button
                class="page-btn"
                disabled={current == 1}
                onclick={link.callback(move |_| Msg::GoToPage(current.saturating_sub(1)))}
            >
                {"Previous"}
            </button>
            { for derived.page_items.iter().enumerate().map(|(slot, item)| match *item {
                PageItem::Page(page) => html! {
                    <button
                        key={format!("page-{page}")}
                        class={classes!("page-btn", (page == current).then_some("active"))}
                        onclick={link.callback(move |_| Msg::GoToPage(page))}
                    >
                        { page.to_string() }
                    </button>
                },
                PageItem::Ellipsis => html! {
                    <span key={format!("gap-{slot}")} class="page-ellipsis">{"…"}</span>
                },
            }) }
            <button
                class="page-btn"
                disabled={current == derived.total_pages}
                onclick={link.callback(move |_| Msg::GoToPage(current + 1))}
            >
                {"Next"}
            </button>
        </div>
    }
}

fn sheets(component: &EmployeeListComponent, link: &Scope<EmployeeListComponent>) -> Html {
    let form = component.form.as_ref().map(|target| {
        let employee = match target {
            FormTarget::Create => None,
            FormTarget::Edit(employee) => Some(employee.clone()),
        };
        html! {
            <EmployeeForm
                {employee}
                on_close={link.callback(|saved: bool| Msg::FormClosed { saved })}
            />
        }
    });

    let details = component.viewing.map(|employee_id| {
        html! {
            <EmployeeDetails
                {employee_id}
                on_close={link.callback(|()| Msg::CloseDetails)}
                on_edit={link.callback(Msg::OpenEdit)}
            />
        }
    });

    html! {
        <>
            { for form }
            { for details }
        </>
    }
}
