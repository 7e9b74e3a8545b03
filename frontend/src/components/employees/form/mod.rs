//! Create/edit sheet for a single employee.
//!
//! Validation runs locally before anything is sent; a rejected draft shows
//! field messages and issues no request. A failed save keeps the sheet open
//! with the user's input and reports the failure in a toast.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::EmployeeFormProps;
pub use state::EmployeeForm;

use common::form::EmployeeDraft;

impl Component for EmployeeForm {
    type Message = Msg;
    type Properties = EmployeeFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let draft = ctx
            .props()
            .employee
            .as_ref()
            .map(EmployeeDraft::from_employee)
            .unwrap_or_default();
        EmployeeForm::new(draft)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
