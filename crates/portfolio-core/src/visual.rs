//! The "apply visual state" seam.
//!
//! Handlers decide, sinks apply. [`VisualState`] is the sink the desktop app
//! renders from; [`RecordingSink`] keeps a log of every call.

use std::collections::HashMap;

use crate::easter_egg::RobotMode;
use crate::geometry::RobotPose;
use crate::menu::{BarStyle, MenuState};
use crate::reconciler::TargetId;
use crate::section::Section;

/// Navbar visual tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavbarTier {
    #[default]
    Top,
    Scrolled,
}

/// Background and shadow for a navbar tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

impl NavbarTier {
    /// `Scrolled` at or past `threshold`.
    pub fn for_offset(scroll_offset: f64, threshold: f64) -> Self {
        if scroll_offset >= threshold {
            NavbarTier::Scrolled
        } else {
            NavbarTier::Top
        }
    }

    pub fn style(&self) -> NavbarStyle {
        match self {
            NavbarTier::Top => NavbarStyle {
                background: "rgba(255, 255, 255, 0.95)",
                box_shadow: "0 2px 20px rgba(255, 105, 180, 0.1)",
            },
            NavbarTier::Scrolled => NavbarStyle {
                background: "rgba(255, 255, 255, 0.98)",
                box_shadow: "0 2px 30px rgba(255, 105, 180, 0.15)",
            },
        }
    }

    /// Inline `style` attribute value.
    pub fn css(&self) -> String {
        let style = self.style();
        format!(
            "background: {}; box-shadow: {};",
            style.background, style.box_shadow
        )
    }
}

/// What revealing a target does to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealEffect {
    /// Adds the `animate` class
    Animate,
    /// Sets the width to this many percent
    Width(u8),
    /// Starts the fade-in-up animation
    FadeInUp,
}

impl RevealEffect {
    /// Extra class for the element, if any.
    pub fn class(&self) -> Option<&'static str> {
        match self {
            RevealEffect::Animate => Some("animate"),
            _ => None,
        }
    }

    /// Inline style for the element, if any.
    pub fn style(&self) -> Option<String> {
        match self {
            RevealEffect::Animate => None,
            RevealEffect::Width(percent) => Some(format!("width: {percent}%;")),
            RevealEffect::FadeInUp => Some("animation: fadeInUp 0.6s ease-out forwards;".into()),
        }
    }
}

/// Receives visual decisions from handlers.
///
/// Implementations must tolerate any call order; every call carries the full
/// new value for one attribute.
pub trait VisualSink {
    fn set_active_section(&mut self, section: Section);
    fn set_navbar(&mut self, tier: NavbarTier);
    fn reveal(&mut self, target: &TargetId, effect: RevealEffect);
    fn set_menu_open(&mut self, open: bool);
    fn set_robot_pose(&mut self, pose: RobotPose);
    fn set_robot_mode(&mut self, mode: RobotMode);
    fn set_scroll_locked(&mut self, locked: bool);
}

/// Current visual attributes of the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisualState {
    pub active_section: Option<Section>,
    pub navbar: NavbarTier,
    pub revealed: HashMap<TargetId, RevealEffect>,
    pub menu_open: bool,
    pub robot_pose: RobotPose,
    pub robot_mode: RobotMode,
    pub scroll_locked: bool,
}

impl VisualState {
    /// Class list for the nav link pointing at `section`.
    pub fn nav_link_class(&self, section: Section) -> &'static str {
        if self.active_section == Some(section) {
            "nav-link active"
        } else {
            "nav-link"
        }
    }

    pub fn nav_menu_class(&self) -> &'static str {
        if self.menu_open {
            "nav-menu active"
        } else {
            "nav-menu"
        }
    }

    pub fn hamburger_bars(&self) -> [BarStyle; 3] {
        MenuState::bar_styles(self.menu_open)
    }

    pub fn reveal_effect(&self, id: &str) -> Option<RevealEffect> {
        self.revealed.get(&TargetId::new(id)).copied()
    }

    /// `base` plus the reveal class when `id` has been revealed.
    pub fn reveal_class(&self, id: &str, base: &str) -> String {
        match self.reveal_effect(id).and_then(|effect| effect.class()) {
            Some(extra) => format!("{base} {extra}"),
            None => base.to_string(),
        }
    }

    /// Reveal style for `id`, empty when unrevealed.
    pub fn reveal_style(&self, id: &str) -> String {
        self.reveal_effect(id)
            .and_then(|effect| effect.style())
            .unwrap_or_default()
    }

    pub fn body_overflow(&self) -> &'static str {
        if self.scroll_locked {
            "hidden"
        } else {
            "auto"
        }
    }
}

impl VisualSink for VisualState {
    fn set_active_section(&mut self, section: Section) {
        self.active_section = Some(section);
    }

    fn set_navbar(&mut self, tier: NavbarTier) {
        self.navbar = tier;
    }

    fn reveal(&mut self, target: &TargetId, effect: RevealEffect) {
        self.revealed.entry(target.clone()).or_insert(effect);
    }

    fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }

    fn set_robot_pose(&mut self, pose: RobotPose) {
        self.robot_pose = pose;
    }

    fn set_robot_mode(&mut self, mode: RobotMode) {
        self.robot_mode = mode;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}

/// Sink that records every call in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    pub active_changes: Vec<Section>,
    pub navbar_changes: Vec<NavbarTier>,
    pub reveals: Vec<(TargetId, RevealEffect)>,
    pub menu_changes: Vec<bool>,
    pub poses: Vec<RobotPose>,
    pub modes: Vec<RobotMode>,
    pub scroll_locks: Vec<bool>,
}

impl VisualSink for RecordingSink {
    fn set_active_section(&mut self, section: Section) {
        self.active_changes.push(section);
    }

    fn set_navbar(&mut self, tier: NavbarTier) {
        self.navbar_changes.push(tier);
    }

    fn reveal(&mut self, target: &TargetId, effect: RevealEffect) {
        self.reveals.push((target.clone(), effect));
    }

    fn set_menu_open(&mut self, open: bool) {
        self.menu_changes.push(open);
    }

    fn set_robot_pose(&mut self, pose: RobotPose) {
        self.poses.push(pose);
    }

    fn set_robot_mode(&mut self, mode: RobotMode) {
        self.modes.push(mode);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locks.push(locked);
    }
}
