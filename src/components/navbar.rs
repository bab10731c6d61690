//! Navigation Bar Component
//!
//! Fixed top bar with section links and the mobile hamburger.
//! Desktop: horizontal links. Mobile (<= 768px): links slide in from the hamburger.

use dioxus::prelude::*;
use portfolio_core::{Section, UiEvent};

use crate::context::use_page;

/// Navigation bar
///
/// The link of the section under the viewport top is highlighted; the bar
/// itself switches background once the page is scrolled.
#[component]
pub fn NavBar() -> Element {
    let page = use_page();
    let visuals = page.visuals.read();

    let navbar_style = visuals.navbar.css();
    let menu_class = visuals.nav_menu_class();
    let bars = visuals.hamburger_bars();

    rsx! {
        nav { id: "navbar", class: "navbar", style: "{navbar_style}",
            div { class: "nav-container",
                div { class: "nav-logo",
                    span { class: "logo-text", "Portfolio" }
                }

                ul { id: "nav-menu", class: "{menu_class}",
                    for section in Section::ALL {
                        li { class: "nav-item",
                            a {
                                class: visuals.nav_link_class(section),
                                href: "{section.anchor()}",
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    page.send(UiEvent::NavClick(section.anchor()));
                                },
                                "{section.label()}"
                            }
                        }
                    }
                }

                div {
                    id: "hamburger",
                    class: "hamburger",
                    onclick: move |_| page.send(UiEvent::HamburgerClick),
                    for bar in bars {
                        span { class: "bar", style: "{bar.css()}" }
                    }
                }
            }
        }
    }
}
