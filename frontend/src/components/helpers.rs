//! Browser helpers shared by the components: toast notifications, the
//! native confirmation dialog, and the MD5 fingerprint used for dirty
//! tracking in the employee form.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::TOAST_MILLIS;

/// Displays a temporary notification at the bottom of the screen.
///
/// Used for the outcome of write operations (create, update, delete), which
/// never block the page. The toast removes itself after `TOAST_MILLIS`.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// Asks the user a yes/no question with the browser's native dialog.
/// Anything other than an explicit "OK" counts as no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Hex MD5 digest of `input`.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}
