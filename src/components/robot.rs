//! Robot Component
//!
//! Decorative robot that tilts towards the cursor and follows it with its eyes.
//! Rainbow mode is toggled by the Konami code.

use dioxus::prelude::*;

use crate::context::use_page;

#[component]
pub fn Robot() -> Element {
    let page = use_page();
    let visuals = page.visuals.read();

    let container_transform = visuals.robot_pose.container_transform();
    let eye_transform = visuals.robot_pose.eye_transform();
    let animation = visuals.robot_mode.animation();

    rsx! {
        div {
            id: "robot-container",
            class: "robot-container",
            style: "transform: {container_transform};",
            onmounted: move |evt| page.register_robot(evt.data()),

            div { class: "robot", style: "animation: {animation};",
                div { class: "robot-head",
                    div { class: "robot-antenna" }
                    div { class: "robot-eyes",
                        for _ in 0..2 {
                            div { class: "eye-socket",
                                div { class: "eye", style: "transform: {eye_transform};" }
                            }
                        }
                    }
                    div { class: "robot-mouth" }
                }
                div { class: "robot-body",
                    div { class: "robot-heart", "♥" }
                }
                div { class: "robot-arms",
                    div { class: "robot-arm left" }
                    div { class: "robot-arm right" }
                }
            }
        }
    }
}
