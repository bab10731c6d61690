//! Project Modal Component
//!
//! Details of one catalog project. Clicking the backdrop or the close button
//! closes it; clicks inside the content do not.

use dioxus::prelude::*;
use portfolio_core::UiEvent;

use crate::context::use_page;

#[component]
pub fn ProjectModal() -> Element {
    let page = use_page();
    let state = page.state.read();

    let Some(project) = state.modal.project(&state.catalog).cloned() else {
        return rsx! {};
    };

    rsx! {
        div {
            id: "portfolio-modal",
            class: "modal",
            onclick: move |_| page.send(UiEvent::ModalClick { on_backdrop: true }),

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "modal-close",
                    "aria-label": "Close",
                    onclick: move |_| page.send(UiEvent::CloseModal),
                    "\u{00D7}"
                }

                div { id: "modal-body", class: "modal-project",
                    img { class: "modal-image", src: "{project.image}", alt: "{project.title}" }
                    h2 { class: "modal-title", "{project.title}" }
                    p { class: "modal-description", "{project.description}" }

                    div { class: "modal-section",
                        h3 { "Teknologi yang Digunakan:" }
                        div { class: "modal-tags",
                            for tech in project.technologies.iter() {
                                span { class: "tag", "{tech}" }
                            }
                        }
                    }

                    div { class: "modal-section",
                        h3 { "Fitur Utama:" }
                        ul { class: "modal-features",
                            for feature in project.features.iter() {
                                li { "{feature}" }
                            }
                        }
                    }

                    div { class: "modal-links",
                        a { class: "btn btn-secondary", href: "{project.github_url}", target: "_blank", "Lihat Kode" }
                        a { class: "btn btn-primary", href: "{project.live_url}", target: "_blank", "Live Demo" }
                    }
                }
            }
        }
    }
}
