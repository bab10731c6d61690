//! Portfolio Page Core Library
//!
//! Host-independent interactivity for a single-page personal portfolio.
//!
//! ## Overview
//!
//! The page reacts to a handful of UI events (pointer moves, scrolling,
//! resizing, key presses, clicks, form submission). Every reaction is a
//! synchronous handler that mutates an explicitly owned [`UiState`] and
//! pushes visual changes into a [`VisualSink`]. Anything that needs to
//! happen later is returned as an [`Effect`] for the host to schedule.
//!
//! ## Components
//!
//! - **Geometry**: parallax, tilt and pupil vectors for the robot graphic
//! - **Reconciler**: active section, navbar tier and one-way reveal animations
//! - **Sequence detector**: sliding-window match for the Konami code
//! - **Collaborators**: contact form validation, toast notifications,
//!   project catalog and modal
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{Dispatcher, PageConfig, UiEvent, UiState, VisualState};
//!
//! let dispatcher = Dispatcher::with_default_handlers();
//! let mut state = UiState::new(PageConfig::default())?;
//! let mut visuals = VisualState::default();
//!
//! let event = UiEvent::Resize { width: 1280.0, height: 800.0 };
//! let effects = dispatcher.dispatch(&mut state, &event, &mut visuals);
//! for effect in effects {
//!     // host schedules timers / performs scrolls
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod contact;
pub mod debounce;
pub mod dispatch;
pub mod easter_egg;
pub mod error;
pub mod event;
pub mod geometry;
pub mod menu;
pub mod modal;
pub mod notification;
pub mod reconciler;
pub mod section;
pub mod sequence;
pub mod state;
pub mod visual;

// Re-exports
pub use catalog::{Catalog, Project};
pub use config::PageConfig;
pub use contact::{ContactForm, FormField};
pub use debounce::{Debouncer, Ticket};
pub use dispatch::{Dispatcher, Handler};
pub use easter_egg::{EasterEgg, RobotMode};
pub use error::{FormError, PortfolioError, PortfolioResult};
pub use event::{Effect, EventKind, KeyInput, TimerKind, UiEvent};
pub use geometry::{Point, Rect, RobotPose, Vec2};
pub use menu::{BarStyle, MenuState};
pub use modal::ModalState;
pub use notification::{NotificationCenter, Severity, Toast, ToastId};
pub use reconciler::{Layout, Reconciler, RevealKind, SectionExtent, TargetId, TargetRect};
pub use section::Section;
pub use sequence::{SequenceDetector, KONAMI_CODE};
pub use state::UiState;
pub use visual::{
    NavbarStyle, NavbarTier, RecordingSink, RevealEffect, VisualSink, VisualState,
};
