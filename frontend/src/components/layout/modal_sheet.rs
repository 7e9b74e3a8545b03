use uuid::Uuid;
use yew::events::MouseEvent;
use yew::{html, Callback, Children, Component, Context, Html, Properties};

/// Overlay sheet hosting the employee form and the details view.
///
/// The sheet is rendered only while its parent wants it open, so there is
/// no show/hide state of its own; closing goes through `on_close`.
pub struct ModalSheet {
    title_id: String,
}

#[derive(Properties, PartialEq)]
pub struct ModalSheetProps {
    pub title: String,
    pub on_close: Callback<()>,
    /// Disables the close button, e.g. while a save is in flight.
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub children: Children,
}

impl Component for ModalSheet {
    type Message = ();
    type Properties = ModalSheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            title_id: format!("sheet-title-{}", Uuid::new_v4().simple()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_close = props.on_close.reform(|_: MouseEvent| ());

        html! {
            <div class="modal-overlay">
                <div class="modal-content" role="dialog" aria-modal="true" aria-labelledby={self.title_id.clone()}>
                    <div class="modal-header">
                        <h2 id={self.title_id.clone()}>{ props.title.clone() }</h2>
                        <button class="close-btn" title="Close" onclick={on_close} disabled={props.busy}>{"×"}</button>
                    </div>
                    { for props.children.iter() }
                </div>
            </div>
        }
    }
}
