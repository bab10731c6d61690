//! Footer

use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "container",
                p { "© 2024 Portfolio. Dibuat dengan 💖 menggunakan Rust & Dioxus." }
            }
        }
    }
}
