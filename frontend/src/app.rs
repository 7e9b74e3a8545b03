use yew::{classes, html, Component, Context, Html};

use crate::components::dashboard::DashboardComponent;
use crate::components::employees::list::EmployeeListComponent;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Dashboard,
    Employees,
}

pub enum Msg {
    SetView(ActiveView),
}

/// Admin shell: sidebar navigation and the active screen. Switching views
/// unmounts the previous screen, so each visit loads fresh data.
pub struct App {
    active_view: ActiveView,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            active_view: ActiveView::Dashboard,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetView(view) => {
                let changed = self.active_view != view;
                self.active_view = view;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let nav_item = |view: ActiveView, label: &'static str| {
            html! {
                <button
                    class={classes!("nav-item", (self.active_view == view).then_some("active"))}
                    onclick={link.callback(move |_| Msg::SetView(view))}
                >
                    { label }
                </button>
            }
        };

        html! {
            <div class="admin-container">
                <aside class="sidebar">
                    <div class="sidebar-header">
                        <h2>{"WorkSphere"}</h2>
                        <p>{"Admin Panel"}</p>
                    </div>
                    <nav class="sidebar-nav">
                        { nav_item(ActiveView::Dashboard, "Dashboard") }
                        { nav_item(ActiveView::Employees, "Employees") }
                    </nav>
                </aside>
                <main class="main-content">
                    {
                        match self.active_view {
                            ActiveView::Dashboard => html! { <DashboardComponent /> },
                            ActiveView::Employees => html! { <EmployeeListComponent /> },
                        }
                    }
                </main>
            </div>
        }
    }
}
