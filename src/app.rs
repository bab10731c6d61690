use dioxus::prelude::*;
use portfolio_core::{KeyInput, UiEvent, UiState};

use crate::components::{
    About, Contact, Footer, Hero, NavBar, Portfolio, ProjectModal, Skills, ToastView,
};
use crate::context::{use_page_provider, PAGE_ID};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the page context, and turns the page
/// container's native events into [`UiEvent`]s.
#[component]
pub fn App() -> Element {
    let initial = use_context::<UiState>();
    let page = use_page_provider(initial);

    let overflow = page.visuals.read().body_overflow();

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            id: PAGE_ID,
            class: "page",
            tabindex: "0",
            style: "overflow-y: {overflow};",
            onmounted: move |evt| {
                let data = evt.data();
                page.register_container(data.clone());
                spawn(async move {
                    if let Err(e) = data.set_focus(true).await {
                        tracing::debug!(error = ?e, "Failed to focus page container");
                    }
                    if let Ok(rect) = data.get_client_rect().await {
                        page.send(UiEvent::Resize {
                            width: rect.size.width,
                            height: rect.size.height,
                        });
                    }
                    page.refresh().await;
                });
            },
            onresize: move |evt| {
                if let Ok(size) = evt.get_border_box_size() {
                    page.send(UiEvent::Resize {
                        width: size.width,
                        height: size.height,
                    });
                }
                spawn(async move {
                    page.refresh().await;
                });
            },
            onscroll: move |_| {
                spawn(async move {
                    page.refresh().await;
                });
            },
            onmousemove: move |evt| {
                let point = evt.client_coordinates();
                page.send(UiEvent::PointerMove { x: point.x, y: point.y });
            },
            onkeydown: move |evt| {
                let key = KeyInput::from_key_name(&evt.key().to_string());
                page.send(UiEvent::KeyDown(key));
            },

            NavBar {}
            Hero {}
            About {}
            Portfolio {}
            Skills {}
            Contact {}
            Footer {}
            ProjectModal {}
            ToastView {}
        }
    }
}
