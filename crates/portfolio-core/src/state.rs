//! Page state and the handlers that mutate it.
//!
//! [`UiState`] is created once at startup and threaded through every handler
//! call by the host. Handlers are synchronous: they update state, push visual
//! decisions into the sink, and return the [`Effect`]s the host must perform.

use crate::catalog::Catalog;
use crate::config::PageConfig;
use crate::contact::{ContactForm, FormField};
use crate::debounce::{Debouncer, Ticket};
use crate::easter_egg::{EasterEgg, RobotMode};
use crate::error::PortfolioResult;
use crate::event::{Effect, KeyInput, TimerKind};
use crate::geometry::{Point, RobotPose, Vec2};
use crate::menu::MenuState;
use crate::modal::ModalState;
use crate::notification::{NotificationCenter, Severity, ToastId};
use crate::reconciler::{Layout, Reconciler};
use crate::section::Section;
use crate::sequence::SequenceDetector;
use crate::visual::VisualSink;

pub const SENDING_MESSAGE: &str = "Mengirim pesan...";
pub const SENT_MESSAGE: &str = "Pesan berhasil dikirim! Terima kasih.";
pub const EASTER_EGG_MESSAGE: &str = "🎉 Easter Egg Activated! Rainbow Robot Mode! 🌈";

/// Everything the page remembers during a session.
#[derive(Debug, Clone)]
pub struct UiState {
    pub config: PageConfig,
    /// Last pointer position seen
    pub cursor: Point,
    /// Viewport width and height
    pub viewport: Vec2,
    pub scroll_offset: f64,
    /// Layout measured on the last scroll tick
    pub layout: Layout,
    pub menu: MenuState,
    pub reconciler: Reconciler,
    pub detector: SequenceDetector<KeyInput>,
    pub pointer: Debouncer<Point>,
    pub notifications: NotificationCenter,
    pub form: ContactForm,
    pub catalog: Catalog,
    pub modal: ModalState,
    pub easter_egg: EasterEgg,
}

impl UiState {
    /// State with the built-in project catalog.
    pub fn new(config: PageConfig) -> PortfolioResult<Self> {
        Ok(Self::with_catalog(config, Catalog::builtin()?))
    }

    pub fn with_catalog(config: PageConfig, catalog: Catalog) -> Self {
        Self {
            cursor: Point::default(),
            viewport: Vec2::ZERO,
            scroll_offset: 0.0,
            layout: Layout::default(),
            menu: MenuState::new(config.mobile_breakpoint),
            reconciler: Reconciler::new(&config),
            detector: SequenceDetector::konami(),
            pointer: Debouncer::new(config.pointer_debounce()),
            notifications: NotificationCenter::new(),
            form: ContactForm::default(),
            catalog,
            modal: ModalState::new(),
            easter_egg: EasterEgg::new(),
            config,
        }
    }

    pub fn is_desktop(&self) -> bool {
        self.config.is_desktop(self.viewport.x)
    }

    /// Show a toast and schedule its expiry.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> Effect {
        let id = self.notifications.show(message, severity);
        Effect::Schedule {
            after: self.config.toast_ttl(),
            timer: TimerKind::ToastExpired(id),
        }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Vec<Effect> {
        let ticket = self.pointer.schedule(Point::new(x, y));
        vec![Effect::Schedule {
            after: self.pointer.window(),
            timer: TimerKind::PointerSettled(ticket),
        }]
    }

    /// Debounce window elapsed: move the robot if this was the latest move.
    pub fn on_pointer_settled(&mut self, ticket: Ticket, sink: &mut dyn VisualSink) {
        let Some(cursor) = self.pointer.take(ticket) else {
            return;
        };
        self.cursor = cursor;

        if !self.is_desktop() {
            return;
        }
        let Some(robot) = self.layout.robot else {
            tracing::trace!("Robot not measured yet, skipping pose");
            return;
        };
        let pose = RobotPose::compute(cursor, self.viewport, robot, &self.config);
        tracing::trace!(%pose, "Robot pose");
        sink.set_robot_pose(pose);
    }

    pub fn on_scroll(&mut self, offset: f64, layout: Layout, sink: &mut dyn VisualSink) {
        self.scroll_offset = offset;
        self.layout = layout;
        self.reconciler
            .reconcile(offset, self.viewport.y, &self.layout, sink);
        self.reconciler
            .observe_intersections(self.viewport.y, &self.layout, sink);
    }

    pub fn on_resize(&mut self, width: f64, height: f64, sink: &mut dyn VisualSink) {
        self.viewport = Vec2::new(width, height);
        if self.menu.on_resize(width) {
            tracing::debug!(width, "Viewport widened, closing mobile menu");
            sink.set_menu_open(false);
        }
    }

    pub fn on_key_down(&mut self, key: KeyInput, sink: &mut dyn VisualSink) -> Vec<Effect> {
        if !self.detector.push(key) {
            return Vec::new();
        }
        let activation = self.easter_egg.activate();
        sink.set_robot_mode(RobotMode::Rainbow);
        vec![
            self.notify(EASTER_EGG_MESSAGE, Severity::Success),
            Effect::Schedule {
                after: self.config.easter_egg_duration(),
                timer: TimerKind::EasterEggExpired(activation),
            },
        ]
    }

    pub fn on_hamburger_click(&mut self, sink: &mut dyn VisualSink) {
        if self.menu.toggle(self.viewport.x) {
            sink.set_menu_open(self.menu.is_open());
        }
    }

    /// Scroll to the linked section and close the mobile menu.
    pub fn on_nav_click(&mut self, href: &str, sink: &mut dyn VisualSink) -> Vec<Effect> {
        let mut effects = Vec::new();
        match href.parse::<Section>() {
            Ok(section) => match self.layout.section_top(section) {
                Some(top) => effects.push(Effect::ScrollTo {
                    top: top - self.config.nav_scroll_offset,
                }),
                None => tracing::debug!(%section, "Section not measured, not scrolling"),
            },
            Err(e) => tracing::debug!(error = %e, "Ignoring nav click"),
        }

        if self.menu.close() {
            sink.set_menu_open(false);
        }
        effects
    }

    pub fn on_form_input(&mut self, field: FormField, value: &str) {
        self.form.set(field, value);
    }

    /// Validate and start the simulated delivery.
    pub fn on_submit(&mut self) -> Vec<Effect> {
        match self.form.validate() {
            Err(e) => {
                tracing::warn!(error = ?e, "Contact form rejected");
                vec![self.notify(e.to_string(), Severity::Error)]
            }
            Ok(()) => {
                tracing::info!(subject = %self.form.subject, "Sending contact form");
                vec![
                    self.notify(SENDING_MESSAGE, Severity::Info),
                    Effect::Schedule {
                        after: self.config.submit_delay(),
                        timer: TimerKind::SubmissionDelivered,
                    },
                ]
            }
        }
    }

    pub fn on_open_project(&mut self, id: &str, sink: &mut dyn VisualSink) {
        self.modal.open(id, &self.catalog);
        sink.set_scroll_locked(true);
    }

    pub fn on_close_modal(&mut self, sink: &mut dyn VisualSink) {
        if self.modal.close() {
            sink.set_scroll_locked(false);
        }
    }

    pub fn on_dismiss_toast(&mut self, id: ToastId) {
        self.notifications.dismiss(id);
    }

    pub fn on_timer(&mut self, timer: TimerKind, sink: &mut dyn VisualSink) -> Vec<Effect> {
        match timer {
            TimerKind::PointerSettled(ticket) => {
                self.on_pointer_settled(ticket, sink);
                Vec::new()
            }
            TimerKind::ToastExpired(id) => {
                self.notifications.dismiss(id);
                Vec::new()
            }
            TimerKind::SubmissionDelivered => {
                tracing::info!("Contact form delivered");
                self.form.reset();
                vec![self.notify(SENT_MESSAGE, Severity::Success)]
            }
            TimerKind::EasterEggExpired(activation) => {
                if self.easter_egg.expire(activation) {
                    sink.set_robot_mode(RobotMode::Normal);
                }
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::reconciler::SectionExtent;
    use crate::sequence::KONAMI_CODE;
    use crate::visual::RecordingSink;

    fn state() -> UiState {
        let mut state = UiState::new(PageConfig::default()).unwrap();
        state.viewport = Vec2::new(1280.0, 800.0);
        state
    }

    #[test]
    fn test_pointer_debounced_to_latest() {
        let mut state = state();
        state.layout.robot = Some(Rect::new(800.0, 200.0, 300.0, 400.0));
        let mut sink = RecordingSink::default();

        let first = state.on_pointer_move(10.0, 10.0);
        let second = state.on_pointer_move(640.0, 400.0);

        for effect in first.into_iter().chain(second) {
            if let Effect::Schedule { timer, .. } = effect {
                state.on_timer(timer, &mut sink);
            }
        }
        assert_eq!(sink.poses.len(), 1);
        assert_eq!(state.cursor, Point::new(640.0, 400.0));
        assert_eq!(sink.poses[0].offset, Vec2::ZERO);
    }

    #[test]
    fn test_no_pose_on_mobile() {
        let mut state = state();
        state.viewport = Vec2::new(600.0, 800.0);
        state.layout.robot = Some(Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut sink = RecordingSink::default();

        let effects = state.on_pointer_move(5.0, 5.0);
        if let Some(Effect::Schedule { timer, .. }) = effects.first() {
            state.on_timer(*timer, &mut sink);
        }
        assert!(sink.poses.is_empty());
        assert_eq!(state.cursor, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_nav_click_scrolls_and_closes_menu() {
        let mut state = state();
        state.viewport.x = 500.0;
        state.layout.sections = vec![SectionExtent::new(Section::Skills, 2300.0, 700.0)];
        let mut sink = RecordingSink::default();

        state.on_hamburger_click(&mut sink);
        assert!(state.menu.is_open());

        let effects = state.on_nav_click("#skills", &mut sink);
        assert_eq!(effects, vec![Effect::ScrollTo { top: 2230.0 }]);
        assert!(!state.menu.is_open());
        assert_eq!(sink.menu_changes, vec![true, false]);
    }

    #[test]
    fn test_nav_click_unknown_section() {
        let mut state = state();
        let mut sink = RecordingSink::default();
        assert!(state.on_nav_click("#blog", &mut sink).is_empty());
        assert!(state.on_nav_click("#about", &mut sink).is_empty());
    }

    #[test]
    fn test_submit_flow() {
        let mut state = state();
        let mut sink = RecordingSink::default();
        for (field, value) in [
            (FormField::Name, "Ayu"),
            (FormField::Email, "ayu@example.com"),
            (FormField::Subject, "Kerja sama"),
            (FormField::Message, "Halo!"),
        ] {
            state.on_form_input(field, value);
        }

        let effects = state.on_submit();
        assert_eq!(state.notifications.current().unwrap().message, SENDING_MESSAGE);
        assert!(effects.contains(&Effect::Schedule {
            after: state.config.submit_delay(),
            timer: TimerKind::SubmissionDelivered,
        }));

        state.on_timer(TimerKind::SubmissionDelivered, &mut sink);
        let toast = state.notifications.current().unwrap();
        assert_eq!(toast.message, SENT_MESSAGE);
        assert_eq!(toast.severity, Severity::Success);
        assert_eq!(state.form, ContactForm::default());
    }

    #[test]
    fn test_submit_rejected_keeps_form() {
        let mut state = state();
        state.on_form_input(FormField::Name, "Ayu");
        state.on_form_input(FormField::Email, "a@b");
        state.on_form_input(FormField::Subject, "s");
        state.on_form_input(FormField::Message, "m");

        let effects = state.on_submit();
        assert_eq!(effects.len(), 1);
        let toast = state.notifications.current().unwrap();
        assert_eq!(toast.severity, Severity::Error);
        assert_eq!(toast.message, "Format email tidak valid!");
        assert_eq!(state.form.name, "Ayu");
    }

    #[test]
    fn test_konami_activates_rainbow_then_expires() {
        let mut state = state();
        let mut sink = RecordingSink::default();

        let mut effects = Vec::new();
        for key in KONAMI_CODE {
            effects.extend(state.on_key_down(key, &mut sink));
        }
        assert_eq!(state.easter_egg.mode(), RobotMode::Rainbow);
        assert_eq!(
            state.notifications.current().unwrap().message,
            EASTER_EGG_MESSAGE
        );

        for effect in effects {
            if let Effect::Schedule { timer, .. } = effect {
                state.on_timer(timer, &mut sink);
            }
        }
        assert_eq!(sink.modes, vec![RobotMode::Rainbow, RobotMode::Normal]);
        assert!(state.notifications.current().is_none());
    }

    #[test]
    fn test_modal_locks_scroll() {
        let mut state = state();
        let mut sink = RecordingSink::default();

        state.on_open_project("project2", &mut sink);
        assert_eq!(
            state.modal.project(&state.catalog).unwrap().title,
            "Task Management App"
        );
        state.on_close_modal(&mut sink);
        state.on_close_modal(&mut sink);
        assert_eq!(sink.scroll_locks, vec![true, false]);
    }

    #[test]
    fn test_resize_closes_menu() {
        let mut state = state();
        let mut sink = RecordingSink::default();
        state.on_resize(500.0, 800.0, &mut sink);
        state.on_hamburger_click(&mut sink);
        state.on_resize(1024.0, 800.0, &mut sink);
        assert!(!state.menu.is_open());
        assert_eq!(sink.menu_changes, vec![true, false]);
    }
}
