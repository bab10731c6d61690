//! Hero Section
//!
//! Greeting, call-to-action buttons and the robot.

use dioxus::prelude::*;
use portfolio_core::{RevealKind, Section, UiEvent};

use crate::components::Robot;
use crate::context::use_page;

#[component]
pub fn Hero() -> Element {
    let page = use_page();
    let visuals = page.visuals.read();

    rsx! {
        section {
            id: "home",
            class: "hero",
            onmounted: move |evt| page.register_section(Section::Home, evt.data()),

            div { class: "hero-container",
                div {
                    class: visuals.reveal_class("hero-text", "hero-text"),
                    onmounted: move |evt| page.register_target("hero-text", RevealKind::Scroll, evt.data()),

                    h1 { class: "hero-title",
                        "Halo, Saya "
                        span { class: "highlight", "Developer" }
                    }
                    p { class: "hero-subtitle",
                        "Membangun pengalaman web yang indah, cepat, dan menyenangkan."
                    }
                    div { class: "hero-buttons",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| page.send(UiEvent::NavClick(Section::Portfolio.anchor())),
                            "Lihat Portfolio"
                        }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| page.send(UiEvent::NavClick(Section::Contact.anchor())),
                            "Hubungi Saya"
                        }
                    }
                }

                div {
                    class: visuals.reveal_class("hero-image", "hero-image"),
                    onmounted: move |evt| page.register_target("hero-image", RevealKind::Scroll, evt.data()),
                    Robot {}
                }
            }
        }
    }
}
