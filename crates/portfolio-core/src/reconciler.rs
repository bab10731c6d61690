//! View-state reconciliation.
//!
//! On every scroll tick the reconciler re-derives three things from the
//! current scroll offset and the measured layout:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  Active section   first extent containing offset + header_offset │
//! │                   (no match: previous section stays active)      │
//! │  Navbar tier      Scrolled iff offset >= navbar_threshold        │
//! │  Scroll reveals   top < viewport_height - visibility_margin      │
//! │                   (one-way: never un-revealed)                   │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Skill bars and cards use the intersection-driven variant instead
//! ([`Reconciler::observe_intersections`]): they reveal once a configured
//! fraction of their area is on screen.
//!
//! Decisions are pushed into a [`VisualSink`], so the logic here never
//! touches a rendering target directly.

use std::collections::HashSet;

use crate::config::PageConfig;
use crate::geometry::Rect;
use crate::section::Section;

use crate::visual::{NavbarTier, RevealEffect, VisualSink};

/// Identifier of an animation target (its element id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a target reveals itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealKind {
    /// Section headers and hero blocks: revealed by the scroll pass
    Scroll,
    /// Progress bar that grows to `target_width` percent
    SkillBar { target_width: u8 },
    /// About/portfolio/skill cards that fade in
    Card,
}

impl RevealKind {
    /// Effect applied when a target of this kind reveals.
    pub fn effect(&self) -> RevealEffect {
        match self {
            RevealKind::Scroll => RevealEffect::Animate,
            RevealKind::SkillBar { target_width } => RevealEffect::Width(*target_width),
            RevealKind::Card => RevealEffect::FadeInUp,
        }
    }
}

/// Vertical extent of a section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(section: Section, top: f64, height: f64) -> Self {
        Self {
            section,
            top,
            height,
        }
    }

    /// Half-open `[top, top + height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }

    fn is_measurable(&self) -> bool {
        self.top.is_finite() && self.height.is_finite() && self.height >= 0.0
    }
}

/// An animation target and its viewport-relative box.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetRect {
    pub id: TargetId,
    pub kind: RevealKind,
    pub rect: Rect,
}

impl TargetRect {
    pub fn new(id: impl Into<String>, kind: RevealKind, rect: Rect) -> Self {
        Self {
            id: TargetId::new(id),
            kind,
            rect,
        }
    }
}

/// Measured page geometry for one tick.
///
/// Sections or targets that could not be measured are simply absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub sections: Vec<SectionExtent>,
    pub targets: Vec<TargetRect>,
    /// Robot container box, viewport-relative
    pub robot: Option<Rect>,
}

impl Layout {
    /// Document top of `section`, if it was measured.
    pub fn section_top(&self, section: Section) -> Option<f64> {
        self.sections
            .iter()
            .find(|extent| extent.section == section)
            .map(|extent| extent.top)
    }
}

/// Scroll-driven view state.
#[derive(Debug, Clone)]
pub struct Reconciler {
    header_offset: f64,
    navbar_threshold: f64,
    visibility_margin: f64,
    skill_bar_threshold: f64,
    card_threshold: f64,
    active: Option<Section>,
    navbar: Option<NavbarTier>,
    revealed: HashSet<TargetId>,
}

impl Reconciler {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            header_offset: config.header_offset,
            navbar_threshold: config.navbar_threshold,
            visibility_margin: config.visibility_margin,
            skill_bar_threshold: config.skill_bar_threshold,
            card_threshold: config.card_threshold,
            active: None,
            navbar: None,
            revealed: HashSet::new(),
        }
    }

    pub fn active_section(&self) -> Option<Section> {
        self.active
    }

    /// Current navbar tier ("top" before the first reconcile).
    pub fn navbar_tier(&self) -> NavbarTier {
        self.navbar.unwrap_or(NavbarTier::Top)
    }

    pub fn is_revealed(&self, id: &TargetId) -> bool {
        self.revealed.contains(id)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// First section, in the given order, whose extent contains `position`.
    pub fn select_section(sections: &[SectionExtent], position: f64) -> Option<Section> {
        sections
            .iter()
            .filter(|extent| extent.is_measurable())
            .find(|extent| extent.contains(position))
            .map(|extent| extent.section)
    }

    /// Re-derive active section, navbar tier and scroll reveals.
    pub fn reconcile(
        &mut self,
        scroll_offset: f64,
        viewport_height: f64,
        layout: &Layout,
        sink: &mut dyn VisualSink,
    ) {
        // 1. Active section (last known good when nothing matches)
        let position = scroll_offset + self.header_offset;
        match Self::select_section(&layout.sections, position) {
            Some(section) if self.active != Some(section) => {
                tracing::info!(
                    from = ?self.active,
                    to = %section,
                    "Active section changed"
                );
                self.active = Some(section);
                sink.set_active_section(section);
            }
            Some(_) => {}
            None => {
                tracing::trace!(position, "No section contains scroll position");
            }
        }

        // 2. Navbar tier
        let tier = NavbarTier::for_offset(scroll_offset, self.navbar_threshold);
        if self.navbar != Some(tier) {
            tracing::debug!(?tier, scroll_offset, "Navbar tier changed");
            self.navbar = Some(tier);
            sink.set_navbar(tier);
        }

        // 3. Scroll reveal pass
        let limit = viewport_height - self.visibility_margin;
        for target in layout
            .targets
            .iter()
            .filter(|target| target.kind == RevealKind::Scroll)
        {
            if target.rect.top < limit {
                self.reveal(target, sink);
            }
        }
    }

    /// Intersection-driven reveal for skill bars and cards.
    ///
    /// Returns true when this call revealed the target.
    pub fn observe(
        &mut self,
        target: &TargetRect,
        visible_fraction: f64,
        sink: &mut dyn VisualSink,
    ) -> bool {
        let threshold = match target.kind {
            RevealKind::SkillBar { .. } => self.skill_bar_threshold,
            RevealKind::Card => self.card_threshold,
            RevealKind::Scroll => return false,
        };
        if visible_fraction >= threshold {
            self.reveal(target, sink)
        } else {
            false
        }
    }

    /// Run [`observe`](Self::observe) for every intersection-driven target.
    pub fn observe_intersections(
        &mut self,
        viewport_height: f64,
        layout: &Layout,
        sink: &mut dyn VisualSink,
    ) {
        for target in &layout.targets {
            let fraction = target.rect.visible_fraction(viewport_height);
            self.observe(target, fraction, sink);
        }
    }

    fn reveal(&mut self, target: &TargetRect, sink: &mut dyn VisualSink) -> bool {
        if !self.revealed.insert(target.id.clone()) {
            return false;
        }
        tracing::debug!(target = %target.id, kind = ?target.kind, "Revealed");
        sink.reveal(&target.id, target.kind.effect());
        true
    }
}
