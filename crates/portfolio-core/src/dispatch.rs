//! Event registration table.
//!
//! Handlers are registered per [`EventKind`], like DOM listeners, and run in
//! registration order by [`Dispatcher::dispatch`] on the host's single event
//! loop thread. Each handler picks out the event variants it cares about.

use std::collections::HashMap;

use crate::event::{Effect, EventKind, UiEvent};
use crate::state::UiState;
use crate::visual::VisualSink;

/// A registered listener.
pub type Handler = fn(&mut UiState, &UiEvent, &mut dyn VisualSink) -> Vec<Effect>;

#[derive(Clone, Default)]
pub struct Dispatcher {
    handlers: HashMap<EventKind, Vec<Handler>>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<_, _> = self
            .handlers
            .iter()
            .map(|(kind, handlers)| (*kind, handlers.len()))
            .collect();
        f.debug_struct("Dispatcher").field("handlers", &counts).finish()
    }
}

impl Dispatcher {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with every page listener registered.
    pub fn with_default_handlers() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(EventKind::PointerMove, pointer_move);
        dispatcher.register(EventKind::Scroll, scroll);
        dispatcher.register(EventKind::Resize, resize);
        dispatcher.register(EventKind::KeyDown, key_down);
        dispatcher.register(EventKind::Click, menu_click);
        dispatcher.register(EventKind::Click, modal_click);
        dispatcher.register(EventKind::Click, toast_click);
        dispatcher.register(EventKind::Input, form_input);
        dispatcher.register(EventKind::Submit, submit);
        dispatcher.register(EventKind::Timer, timer);
        dispatcher
    }

    pub fn register(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.entry(kind).or_default().push(handler);
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Run every handler registered for the event's kind.
    pub fn dispatch(
        &self,
        state: &mut UiState,
        event: &UiEvent,
        sink: &mut dyn VisualSink,
    ) -> Vec<Effect> {
        let Some(handlers) = self.handlers.get(&event.kind()) else {
            tracing::trace!(kind = ?event.kind(), "No handlers registered");
            return Vec::new();
        };
        let mut effects = Vec::new();
        for handler in handlers {
            effects.extend(handler(state, event, sink));
        }
        effects
    }
}

fn pointer_move(state: &mut UiState, event: &UiEvent, _: &mut dyn VisualSink) -> Vec<Effect> {
    match event {
        UiEvent::PointerMove { x, y } => state.on_pointer_move(*x, *y),
        _ => Vec::new(),
    }
}

fn scroll(state: &mut UiState, event: &UiEvent, sink: &mut dyn VisualSink) -> Vec<Effect> {
    if let UiEvent::Scroll { offset, layout } = event {
        state.on_scroll(*offset, layout.clone(), sink);
    }
    Vec::new()
}

fn resize(state: &mut UiState, event: &UiEvent, sink: &mut dyn VisualSink) -> Vec<Effect> {
    if let UiEvent::Resize { width, height } = event {
        state.on_resize(*width, *height, sink);
    }
    Vec::new()
}

fn key_down(state: &mut UiState, event: &UiEvent, sink: &mut dyn VisualSink) -> Vec<Effect> {
    match event {
        UiEvent::KeyDown(key) => state.on_key_down(*key, sink),
        _ => Vec::new(),
    }
}

fn menu_click(state: &mut UiState, event: &UiEvent, sink: &mut dyn VisualSink) -> Vec<Effect> {
    match event {
        UiEvent::HamburgerClick => {
            state.on_hamburger_click(sink);
            Vec::new()
        }
        UiEvent::NavClick(href) => state.on_nav_click(href, sink),
        _ => Vec::new(),
    }
}

fn modal_click(state: &mut UiState, event: &UiEvent, sink: &mut dyn VisualSink) -> Vec<Effect> {
    match event {
        UiEvent::OpenProject(id) => state.on_open_project(id, sink),
        UiEvent::CloseModal | UiEvent::ModalClick { on_backdrop: true } => {
            state.on_close_modal(sink)
        }
        _ => {}
    }
    Vec::new()
}

fn toast_click(state: &mut UiState, event: &UiEvent, _: &mut dyn VisualSink) -> Vec<Effect> {
    if let UiEvent::DismissToast(id) = event {
        state.on_dismiss_toast(*id);
    }
    Vec::new()
}

fn form_input(state: &mut UiState, event: &UiEvent, _: &mut dyn VisualSink) -> Vec<Effect> {
    if let UiEvent::FormInput { field, value } = event {
        state.on_form_input(*field, value);
    }
    Vec::new()
}

fn submit(state: &mut UiState, event: &UiEvent, _: &mut dyn VisualSink) -> Vec<Effect> {
    match event {
        UiEvent::Submit => state.on_submit(),
        _ => Vec::new(),
    }
}

fn timer(state: &mut UiState, event: &UiEvent, sink: &mut dyn VisualSink) -> Vec<Effect> {
    match event {
        UiEvent::Timer(kind) => state.on_timer(*kind, sink),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;
    use crate::geometry::Rect;
    use crate::reconciler::{Layout, RevealKind, SectionExtent, TargetRect};
    use crate::section::Section;
    use crate::visual::{NavbarTier, VisualState};

    #[test]
    fn test_default_table() {
        let dispatcher = Dispatcher::with_default_handlers();
        assert_eq!(dispatcher.handler_count(EventKind::Click), 3);
        assert_eq!(dispatcher.handler_count(EventKind::Scroll), 1);
    }

    #[test]
    fn test_unregistered_kind_is_noop() {
        let dispatcher = Dispatcher::new();
        let mut state = UiState::new(PageConfig::default()).unwrap();
        let mut visuals = VisualState::default();
        let effects = dispatcher.dispatch(&mut state, &UiEvent::Submit, &mut visuals);
        assert!(effects.is_empty());
        assert!(state.notifications.current().is_none());
    }

    #[test]
    fn test_scroll_updates_visual_state() {
        let dispatcher = Dispatcher::with_default_handlers();
        let mut state = UiState::new(PageConfig::default()).unwrap();
        let mut visuals = VisualState::default();

        dispatcher.dispatch(
            &mut state,
            &UiEvent::Resize {
                width: 1280.0,
                height: 800.0,
            },
            &mut visuals,
        );

        let layout = Layout {
            sections: vec![
                SectionExtent::new(Section::Home, 0.0, 800.0),
                SectionExtent::new(Section::About, 800.0, 800.0),
            ],
            targets: vec![TargetRect::new(
                "about-header",
                RevealKind::Scroll,
                Rect::new(0.0, 300.0, 500.0, 50.0),
            )],
            robot: None,
        };
        dispatcher.dispatch(
            &mut state,
            &UiEvent::Scroll {
                offset: 750.0,
                layout,
            },
            &mut visuals,
        );

        assert_eq!(visuals.active_section, Some(Section::About));
        assert_eq!(visuals.navbar, NavbarTier::Scrolled);
        assert_eq!(
            visuals.reveal_class("about-header", "section-header"),
            "section-header animate"
        );
    }

    #[test]
    fn test_content_click_does_not_close_modal() {
        let dispatcher = Dispatcher::with_default_handlers();
        let mut state = UiState::new(PageConfig::default()).unwrap();
        let mut visuals = VisualState::default();

        dispatcher.dispatch(
            &mut state,
            &UiEvent::OpenProject("project3".into()),
            &mut visuals,
        );
        dispatcher.dispatch(
            &mut state,
            &UiEvent::ModalClick { on_backdrop: false },
            &mut visuals,
        );
        assert!(state.modal.is_open());
        assert!(visuals.scroll_locked);

        dispatcher.dispatch(
            &mut state,
            &UiEvent::ModalClick { on_backdrop: true },
            &mut visuals,
        );
        assert!(!state.modal.is_open());
        assert_eq!(visuals.body_overflow(), "auto");
    }
}
