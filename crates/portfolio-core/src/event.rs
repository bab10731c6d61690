//! Events in, effects out.
//!
//! The host translates its native UI events into [`UiEvent`]s. Handlers never
//! block; anything that must happen later comes back as an [`Effect`] and
//! re-enters as [`UiEvent::Timer`] once the host's timer fires.

use std::fmt;
use std::time::Duration;

use crate::contact::FormField;
use crate::debounce::Ticket;
use crate::notification::ToastId;
use crate::reconciler::Layout;

/// A key press, reduced to what the page cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Printable character, lowercased
    Char(char),
    Other,
}

impl KeyInput {
    /// From a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(key: &str) -> Self {
        match key {
            "ArrowUp" => KeyInput::ArrowUp,
            "ArrowDown" => KeyInput::ArrowDown,
            "ArrowLeft" => KeyInput::ArrowLeft,
            "ArrowRight" => KeyInput::ArrowRight,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyInput::Char(c.to_ascii_lowercase()),
                    _ => KeyInput::Other,
                }
            }
        }
    }

    /// From a legacy `keyCode`.
    pub fn from_legacy_code(code: u32) -> Self {
        match code {
            37 => KeyInput::ArrowLeft,
            38 => KeyInput::ArrowUp,
            39 => KeyInput::ArrowRight,
            40 => KeyInput::ArrowDown,
            65..=90 => char::from_u32(code)
                .map(|c| KeyInput::Char(c.to_ascii_lowercase()))
                .unwrap_or(KeyInput::Other),
            _ => KeyInput::Other,
        }
    }
}

/// A UI event delivered by the host's event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Pointer moved to client coordinates
    PointerMove { x: f64, y: f64 },
    /// Page scrolled; carries the layout measured for this tick
    Scroll { offset: f64, layout: Layout },
    /// Viewport resized
    Resize { width: f64, height: f64 },
    KeyDown(KeyInput),
    HamburgerClick,
    /// Nav link clicked; carries the link's `href`
    NavClick(String),
    FormInput { field: FormField, value: String },
    Submit,
    /// Project card's "details" clicked
    OpenProject(String),
    CloseModal,
    /// Click anywhere in the modal; `on_backdrop` when the backdrop itself was hit
    ModalClick { on_backdrop: bool },
    DismissToast(ToastId),
    Timer(TimerKind),
}

/// Listener category an event is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMove,
    Scroll,
    Resize,
    KeyDown,
    Click,
    Input,
    Submit,
    Timer,
}

impl UiEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            UiEvent::PointerMove { .. } => EventKind::PointerMove,
            UiEvent::Scroll { .. } => EventKind::Scroll,
            UiEvent::Resize { .. } => EventKind::Resize,
            UiEvent::KeyDown(_) => EventKind::KeyDown,
            UiEvent::HamburgerClick
            | UiEvent::NavClick(_)
            | UiEvent::OpenProject(_)
            | UiEvent::CloseModal
            | UiEvent::ModalClick { .. }
            | UiEvent::DismissToast(_) => EventKind::Click,
            UiEvent::FormInput { .. } => EventKind::Input,
            UiEvent::Submit => EventKind::Submit,
            UiEvent::Timer(_) => EventKind::Timer,
        }
    }
}

/// Timer callbacks the page schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Debounce window for a pointer move elapsed
    PointerSettled(Ticket),
    /// Toast reached its time to live
    ToastExpired(ToastId),
    /// Simulated contact form delivery finished
    SubmissionDelivered,
    /// Rainbow mode for the given activation ran out
    EasterEggExpired(u64),
}

/// Work the host performs on the page's behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Deliver `UiEvent::Timer(timer)` after `after`
    Schedule { after: Duration, timer: TimerKind },
    /// Smooth-scroll the page to this document offset
    ScrollTo { top: f64 },
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Schedule { after, timer } => write!(f, "schedule {timer:?} in {after:?}"),
            Effect::ScrollTo { top } => write!(f, "scroll to {top}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(KeyInput::from_key_name("ArrowLeft"), KeyInput::ArrowLeft);
        assert_eq!(KeyInput::from_key_name("B"), KeyInput::Char('b'));
        assert_eq!(KeyInput::from_key_name("Shift"), KeyInput::Other);
    }

    #[test]
    fn test_legacy_codes() {
        assert_eq!(KeyInput::from_legacy_code(38), KeyInput::ArrowUp);
        assert_eq!(KeyInput::from_legacy_code(66), KeyInput::Char('b'));
        assert_eq!(KeyInput::from_legacy_code(13), KeyInput::Other);
    }

    #[test]
    fn test_click_events_share_a_kind() {
        assert_eq!(UiEvent::HamburgerClick.kind(), EventKind::Click);
        assert_eq!(UiEvent::NavClick("#about".into()).kind(), EventKind::Click);
        assert_eq!(UiEvent::Submit.kind(), EventKind::Submit);
    }
}
