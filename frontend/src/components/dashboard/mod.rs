//! Dashboard: workforce statistics fetched from the backend and rendered as
//! metric cards, a financial overview, the department distribution and the
//! status bar.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod view;

pub use messages::Msg;
pub use state::DashboardComponent;

use crate::services::employee_service;

impl Component for DashboardComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        DashboardComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                if self.in_flight {
                    return false;
                }
                self.in_flight = true;
                self.loading = true;
                self.error = None;

                let link = ctx.link().clone();
                spawn_local(async move {
                    match employee_service::get_statistics().await {
                        Ok(statistics) => link.send_message(Msg::Loaded(statistics)),
                        Err(err) => {
                            gloo_console::error!("Error loading statistics:", err.to_string());
                            link.send_message(Msg::LoadFailed(
                                "Failed to load statistics".to_string(),
                            ));
                        }
                    }
                });
                true
            }
            Msg::Loaded(statistics) => {
                self.in_flight = false;
                self.loading = false;
                self.statistics = Some(statistics);
                true
            }
            Msg::LoadFailed(message) => {
                self.in_flight = false;
                self.loading = false;
                self.statistics = None;
                self.error = Some(message);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
        }
    }
}
