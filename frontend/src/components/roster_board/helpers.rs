//! Browser glue for the roster board: toast notifications and the location
//! hash used for deep links.

use common::model::player::PlayerId;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::roster::route::parse_player_route;
use crate::roster::workflow::Notifier;

/// Confirms successful mutations with a toast.
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str) {
        show_toast(message);
    }
}

/// Player id named by the current `#/players/<id>` hash, if any.
pub fn current_player_route() -> Option<PlayerId> {
    let hash = web_sys::window()?.location().hash().ok()?;
    parse_player_route(&hash)
}

/// Shows `message` at the bottom of the page for a few seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
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
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
