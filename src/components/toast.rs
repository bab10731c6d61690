//! Toast notification overlay.

use dioxus::prelude::*;
use portfolio_core::UiEvent;

use crate::context::use_page;

/// Shows the page's current toast, if any, top right.
#[component]
pub fn ToastView() -> Element {
    let page = use_page();
    let state = page.state.read();

    let Some(toast) = state.notifications.current().cloned() else {
        return rsx! {};
    };
    let id = toast.id;

    rsx! {
        div {
            key: "{id:?}",
            class: toast.severity.class(),
            style: "background: {toast.severity.background()};",
            div { class: "notification-content",
                span { class: "notification-message", "{toast.message}" }
                button {
                    class: "notification-close",
                    onclick: move |_| page.send(UiEvent::DismissToast(id)),
                    "\u{00D7}"
                }
            }
        }
    }
}
