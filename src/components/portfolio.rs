//! Portfolio Section
//!
//! One card per catalog project; "Lihat Detail" opens the project modal.

use dioxus::prelude::*;
use portfolio_core::{RevealKind, Section, UiEvent};

use crate::context::use_page;

#[component]
pub fn Portfolio() -> Element {
    let page = use_page();
    let visuals = page.visuals.read();
    let state = page.state.read();

    rsx! {
        section {
            id: "portfolio",
            class: "portfolio",
            onmounted: move |evt| page.register_section(Section::Portfolio, evt.data()),

            div { class: "container",
                div {
                    class: visuals.reveal_class("portfolio-header", "section-header"),
                    onmounted: move |evt| page.register_target("portfolio-header", RevealKind::Scroll, evt.data()),
                    h2 { class: "section-title", "Portfolio" }
                    p { class: "section-subtitle", "Beberapa proyek yang pernah saya kerjakan." }
                }

                div { class: "portfolio-grid",
                    for project in state.catalog.projects().iter().cloned() {
                        div {
                            key: "{project.id}",
                            class: "portfolio-item",
                            style: visuals.reveal_style(&format!("item-{}", project.id)),
                            onmounted: {
                                let target = format!("item-{}", project.id);
                                move |evt: MountedEvent| page.register_target(&target, RevealKind::Card, evt.data())
                            },

                            div { class: "portfolio-image",
                                img { src: "{project.image}", alt: "{project.title}" }
                            }
                            div { class: "portfolio-content",
                                h3 { "{project.title}" }
                                div { class: "portfolio-tags",
                                    for tech in project.technologies.iter().take(3) {
                                        span { class: "tag", "{tech}" }
                                    }
                                }
                                button {
                                    class: "btn btn-primary",
                                    onclick: {
                                        let id = project.id.clone();
                                        move |_| page.send(UiEvent::OpenProject(id.clone()))
                                    },
                                    "Lihat Detail"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
