//! Skills Section
//!
//! Skill groups with progress bars that fill once half visible.

use dioxus::prelude::*;
use portfolio_core::{RevealKind, Section};

use crate::context::use_page;

struct SkillGroup {
    id: &'static str,
    title: &'static str,
    /// (name, percent)
    skills: &'static [(&'static str, u8)],
}

static SKILL_GROUPS: [SkillGroup; 3] = [
    SkillGroup {
        id: "frontend",
        title: "Frontend",
        skills: &[("HTML & CSS", 95), ("JavaScript", 90), ("React", 85)],
    },
    SkillGroup {
        id: "backend",
        title: "Backend",
        skills: &[("Node.js", 80), ("MongoDB", 75), ("Firebase", 78)],
    },
    SkillGroup {
        id: "design",
        title: "Desain",
        skills: &[("UI/UX Design", 88), ("Figma", 85), ("Responsive Design", 92)],
    },
];

/// Element id of a skill bar: `skill-<group>-<index>`.
fn bar_id(group: &str, index: usize) -> String {
    format!("skill-{group}-{index}")
}

#[component]
pub fn Skills() -> Element {
    let page = use_page();
    let visuals = page.visuals.read();

    rsx! {
        section {
            id: "skills",
            class: "skills",
            onmounted: move |evt| page.register_section(Section::Skills, evt.data()),

            div { class: "container",
                div {
                    class: visuals.reveal_class("skills-header", "section-header"),
                    onmounted: move |evt| page.register_target("skills-header", RevealKind::Scroll, evt.data()),
                    h2 { class: "section-title", "Keahlian" }
                    p { class: "section-subtitle", "Teknologi yang saya gunakan sehari-hari." }
                }

                div { class: "skills-grid",
                    for group in SKILL_GROUPS.iter() {
                        div {
                            key: "{group.id}",
                            class: "skill-item",
                            style: visuals.reveal_style(group.id),
                            onmounted: move |evt| page.register_target(group.id, RevealKind::Card, evt.data()),

                            h3 { "{group.title}" }
                            for (index, (name, percent)) in group.skills.iter().enumerate() {
                                div { class: "skill",
                                    div { class: "skill-info",
                                        span { "{name}" }
                                        span { "{percent}%" }
                                    }
                                    div { class: "skill-bar",
                                        div {
                                            class: "skill-progress",
                                            "data-width": "{percent}",
                                            style: visuals.reveal_style(&bar_id(group.id, index)),
                                            onmounted: {
                                                let id = bar_id(group.id, index);
                                                let kind = RevealKind::SkillBar { target_width: *percent };
                                                move |evt: MountedEvent| page.register_target(&id, kind, evt.data())
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
