use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::form::FormField;
use common::model::employee::EmployeeStatus;

use super::messages::Msg;
use super::state::EmployeeForm;
use crate::components::layout::modal_sheet::ModalSheet;

/// Static description of one plain input.
struct InputSpec {
    field: FormField,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    required: bool,
    placeholder: &'static str,
}

static INPUTS: [InputSpec; 8] = [
    InputSpec {
        field: FormField::FirstName,
        id: "firstName",
        label: "First Name",
        input_type: "text",
        required: true,
        placeholder: "",
    },
    InputSpec {
        field: FormField::LastName,
        id: "lastName",
        label: "Last Name",
        input_type: "text",
        required: true,
        placeholder: "",
    },
    InputSpec {
        field: FormField::Email,
        id: "email",
        label: "Email",
        input_type: "email",
        required: true,
        placeholder: "",
    },
    InputSpec {
        field: FormField::Phone,
        id: "phone",
        label: "Phone",
        input_type: "tel",
        required: false,
        placeholder: "e.g., +91-98450-00000",
    },
    InputSpec {
        field: FormField::Department,
        id: "department",
        label: "Department",
        input_type: "text",
        required: true,
        placeholder: "e.g., IT, HR, Sales",
    },
    InputSpec {
        field: FormField::Position,
        id: "position",
        label: "Position",
        input_type: "text",
        required: true,
        placeholder: "e.g., Software Engineer, Manager",
    },
    InputSpec {
        field: FormField::Salary,
        id: "salary",
        label: "Salary",
        input_type: "number",
        required: true,
        placeholder: "",
    },
    InputSpec {
        field: FormField::HireDate,
        id: "hireDate",
        label: "Hire Date",
        input_type: "date",
        required: false,
        placeholder: "",
    },
];

pub fn view(component: &EmployeeForm, ctx: &Context<EmployeeForm>) -> Html {
    let link = ctx.link();
    let editing = ctx.props().employee.is_some();
    let title = if editing { "Edit Employee" } else { "Add New Employee" };
    let submit_label = match (component.saving, editing) {
        (true, _) => "Saving...",
        (false, true) => "Update",
        (false, false) => "Create",
    };

    html! {
        <ModalSheet
            title={title.to_string()}
            busy={component.saving}
            on_close={link.callback(|()| Msg::Cancel)}
        >
            <form
                class="employee-form"
                novalidate={true}
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                { for INPUTS.iter().map(|spec| input_group(component, link, spec)) }
                { status_group(component, link) }
                { address_group(component, link) }
                <div class="form-actions">
                    if component.is_dirty() {
                        <span class="dirty-indicator">{"Unsaved changes"}</span>
                    }
                    <button
                        type="button"
                        class="btn btn-cancel"
                        disabled={component.saving}
                        onclick={link.callback(|_| Msg::Cancel)}
                    >
                        {"Cancel"}
                    </button>
                    <button type="submit" class="btn btn-submit" disabled={component.saving}>
                        { submit_label }
                    </button>
                </div>
            </form>
        </ModalSheet>
    }
}

fn field_error(component: &EmployeeForm, field: FormField) -> Html {
    match component.errors.get(field) {
        Some(message) => html! { <span class="error-text">{ message }</span> },
        None => Html::default(),
    }
}

fn input_group(component: &EmployeeForm, link: &Scope<EmployeeForm>, spec: &InputSpec) -> Html {
    let field = spec.field;
    let has_error = component.errors.get(field).is_some();
    let label = if spec.required {
        format!("{} *", spec.label)
    } else {
        spec.label.to_string()
    };

    html! {
        <div class="form-group" key={spec.id}>
            <label for={spec.id}>{ label }</label>
            <input
                type={spec.input_type}
                id={spec.id}
                name={spec.id}
                value={component.draft.value(field)}
                placeholder={spec.placeholder}
                class={classes!(has_error.then_some("error"))}
                min={(field == FormField::Salary).then_some("0")}
                step={(field == FormField::Salary).then_some("0.01")}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::Input(field, input.value())
                })}
            />
            { field_error(component, field) }
        </div>
    }
}

fn status_group(component: &EmployeeForm, link: &Scope<EmployeeForm>) -> Html {
    html! {
        <div class="form-group">
            <label for="status">{"Status"}</label>
            <select
                id="status"
                name="status"
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::Input(FormField::Status, select.value())
                })}
            >
                { for EmployeeStatus::ALL.into_iter().map(|status| html! {
                    <option
                        key={status.label()}
                        value={status.label()}
                        selected={status == component.draft.status}
                    >
                        { status.label() }
                    </option>
                }) }
            </select>
        </div>
    }
}

fn address_group(component: &EmployeeForm, link: &Scope<EmployeeForm>) -> Html {
    html! {
        <div class="form-group">
            <label for="address">{"Address"}</label>
            <textarea
                id="address"
                name="address"
                rows="3"
                placeholder="Enter full address"
                value={component.draft.address.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::Input(FormField::Address, input.value())
                })}
            />
        </div>
    }
}
