//! About Section

use dioxus::prelude::*;
use portfolio_core::{RevealKind, Section};

use crate::context::use_page;

/// (id, icon, title, text)
const ABOUT_CARDS: [(&str, &str, &str, &str); 3] = [
    (
        "about-card-design",
        "🎨",
        "Desain Kreatif",
        "Antarmuka yang bersih dan menarik dengan perhatian pada setiap detail.",
    ),
    (
        "about-card-code",
        "💻",
        "Kode Berkualitas",
        "Kode yang rapi, teruji, dan mudah dirawat untuk jangka panjang.",
    ),
    (
        "about-card-speed",
        "⚡",
        "Performa Cepat",
        "Aplikasi yang ringan dan responsif di semua perangkat.",
    ),
];

#[component]
pub fn About() -> Element {
    let page = use_page();
    let visuals = page.visuals.read();

    rsx! {
        section {
            id: "about",
            class: "about",
            onmounted: move |evt| page.register_section(Section::About, evt.data()),

            div { class: "container",
                div {
                    class: visuals.reveal_class("about-header", "section-header"),
                    onmounted: move |evt| page.register_target("about-header", RevealKind::Scroll, evt.data()),
                    h2 { class: "section-title", "Tentang Saya" }
                    p { class: "section-subtitle",
                        "Web developer yang suka mengubah ide menjadi pengalaman digital."
                    }
                }

                div { class: "about-grid",
                    for (id, icon, title, text) in ABOUT_CARDS {
                        div {
                            key: "{id}",
                            class: "about-card",
                            style: visuals.reveal_style(id),
                            onmounted: move |evt| page.register_target(id, RevealKind::Card, evt.data()),
                            div { class: "about-icon", "{icon}" }
                            h3 { "{title}" }
                            p { "{text}" }
                        }
                    }
                }
            }
        }
    }
}
