//! Contact Section
//!
//! Contact details and a four-field form. Validation and the simulated
//! delivery happen in the page state; this component only forwards input.

use dioxus::prelude::*;
use portfolio_core::{FormField, RevealKind, Section, UiEvent};

use crate::context::use_page;

#[component]
pub fn Contact() -> Element {
    let page = use_page();
    let visuals = page.visuals.read();
    let form = page.state.read().form.clone();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        page.send(UiEvent::Submit);
    };

    rsx! {
        section {
            id: "contact",
            class: "contact",
            onmounted: move |evt| page.register_section(Section::Contact, evt.data()),

            div { class: "container",
                div {
                    class: visuals.reveal_class("contact-header", "section-header"),
                    onmounted: move |evt| page.register_target("contact-header", RevealKind::Scroll, evt.data()),
                    h2 { class: "section-title", "Hubungi Saya" }
                    p { class: "section-subtitle", "Punya proyek menarik? Mari ngobrol!" }
                }

                div { class: "contact-content",
                    div { class: "contact-info",
                        div { class: "contact-item",
                            span { class: "contact-icon", "📧" }
                            span { "hello@portfolio.dev" }
                        }
                        div { class: "contact-item",
                            span { class: "contact-icon", "📍" }
                            span { "Jakarta, Indonesia" }
                        }
                    }

                    form {
                        id: "contact-form",
                        class: "contact-form",
                        onsubmit: on_submit,

                        FormInput { field: FormField::Name, value: form.name.clone(), placeholder: "Nama Anda" }
                        FormInput { field: FormField::Email, value: form.email.clone(), placeholder: "Email Anda" }
                        FormInput { field: FormField::Subject, value: form.subject.clone(), placeholder: "Subjek" }

                        div { class: "form-group",
                            textarea {
                                name: FormField::Message.name(),
                                placeholder: "Pesan Anda",
                                rows: "5",
                                value: "{form.message}",
                                oninput: move |e| page.send(UiEvent::FormInput {
                                    field: FormField::Message,
                                    value: e.value(),
                                }),
                            }
                        }

                        button { class: "btn btn-primary", r#type: "submit", "Kirim Pesan" }
                    }
                }
            }
        }
    }
}

/// Single-line form input bound to one field of the page's contact form.
#[component]
fn FormInput(field: FormField, value: String, placeholder: &'static str) -> Element {
    let page = use_page();
    let input_type = if field == FormField::Email { "email" } else { "text" };

    rsx! {
        div { class: "form-group",
            input {
                r#type: input_type,
                name: field.name(),
                placeholder: placeholder,
                value: "{value}",
                oninput: move |e| page.send(UiEvent::FormInput { field, value: e.value() }),
            }
        }
    }
}
