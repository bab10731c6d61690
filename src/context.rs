//! Page context provider for the portfolio.
//!
//! Owns the single [`UiState`], the [`VisualState`] components render from,
//! and the dispatcher that connects them. Also keeps handles to the mounted
//! elements the reconciler needs measured.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let page = use_page_provider(initial_state);
//!
//! // In child components
//! let page = use_page();
//! page.send(UiEvent::HamburgerClick);
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{
    Dispatcher, Effect, Layout, Rect, RevealKind, Section, SectionExtent, TargetRect, UiEvent,
    UiState, VisualState,
};

/// Id of the scrolling page container.
pub const PAGE_ID: &str = "page";

/// Mounted elements whose geometry feeds the reconciler.
#[derive(Clone, Default)]
pub struct Elements {
    container: Option<Rc<MountedData>>,
    robot: Option<Rc<MountedData>>,
    sections: Vec<(Section, Rc<MountedData>)>,
    targets: Vec<(String, RevealKind, Rc<MountedData>)>,
}

/// Handle to the page, shared with every component via context.
///
/// All fields are signals, so the handle is `Copy` and can be moved into
/// any number of event closures.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub state: Signal<UiState>,
    pub visuals: Signal<VisualState>,
    dispatcher: Signal<Dispatcher>,
    elements: Signal<Elements>,
}

impl PageContext {
    /// Dispatch `event` and perform the resulting effects.
    pub fn send(self, event: UiEvent) {
        let effects = {
            let dispatcher = self.dispatcher.read();
            let mut state = self.state;
            let mut visuals = self.visuals;
            let mut state = state.write();
            let mut visuals = visuals.write();
            dispatcher.dispatch(&mut *state, &event, &mut *visuals)
        };
        for effect in effects {
            self.perform(effect);
        }
    }

    fn perform(self, effect: Effect) {
        tracing::trace!(%effect, "Performing effect");
        match effect {
            Effect::Schedule { after, timer } => {
                spawn(async move {
                    tokio::time::sleep(after).await;
                    self.send(UiEvent::Timer(timer));
                });
            }
            Effect::ScrollTo { top } => {
                let js = format!(
                    "document.getElementById('{PAGE_ID}').scrollTo({{ top: {top}, behavior: 'smooth' }});"
                );
                let eval = document::eval(&js);
                spawn(async move {
                    if let Err(e) = eval.await {
                        tracing::debug!(error = ?e, top, "Smooth scroll failed");
                    }
                });
            }
        }
    }

    pub fn register_container(self, data: Rc<MountedData>) {
        let mut elements = self.elements;
        elements.write().container = Some(data);
    }

    pub fn register_robot(self, data: Rc<MountedData>) {
        let mut elements = self.elements;
        elements.write().robot = Some(data);
    }

    pub fn register_section(self, section: Section, data: Rc<MountedData>) {
        let mut elements = self.elements;
        let mut elements = elements.write();
        elements.sections.retain(|(existing, _)| *existing != section);
        elements.sections.push((section, data));
        elements.sections.sort_by_key(|(section, _)| *section);
    }

    pub fn register_target(self, id: &str, kind: RevealKind, data: Rc<MountedData>) {
        let mut elements = self.elements;
        let mut elements = elements.write();
        elements.targets.retain(|(existing, _, _)| existing != id);
        elements.targets.push((id.to_string(), kind, data));
    }

    /// Measure the page and run a scroll tick with the result.
    pub async fn refresh(self) {
        if let Some((offset, layout)) = self.measure().await {
            self.send(UiEvent::Scroll { offset, layout });
        }
    }

    /// Scroll offset and layout, or `None` before the container is mounted.
    ///
    /// Elements that fail to measure are left out of the layout.
    async fn measure(self) -> Option<(f64, Layout)> {
        let elements = self.elements.read().clone();
        let container = elements.container?;

        let offset = match container.get_scroll_offset().await {
            Ok(offset) => offset.y,
            Err(e) => {
                tracing::warn!(error = ?e, "Failed to read scroll offset");
                return None;
            }
        };
        let container_top = container
            .get_client_rect()
            .await
            .map(|rect| rect.origin.y)
            .unwrap_or(0.0);

        let mut layout = Layout::default();
        for (section, data) in &elements.sections {
            match client_rect(data).await {
                Some(rect) => layout.sections.push(document_extent(
                    *section,
                    rect,
                    container_top,
                    offset,
                )),
                None => tracing::debug!(%section, "Section not measurable"),
            }
        }
        for (id, kind, data) in &elements.targets {
            if let Some(rect) = client_rect(data).await {
                layout.targets.push(TargetRect::new(
                    id.clone(),
                    *kind,
                    container_relative(rect, container_top),
                ));
            }
        }
        // Pointer coordinates are client coordinates, so the robot stays in them
        if let Some(robot) = &elements.robot {
            layout.robot = client_rect(robot).await;
        }
        Some((offset, layout))
    }
}

/// Section extent in document coordinates of the scrolling container.
fn document_extent(
    section: Section,
    rect: Rect,
    container_top: f64,
    offset: f64,
) -> SectionExtent {
    SectionExtent::new(section, rect.top - container_top + offset, rect.height)
}

/// `rect` with its top measured from the container's top edge, the frame
/// the reveal margin is checked in.
fn container_relative(mut rect: Rect, container_top: f64) -> Rect {
    rect.top -= container_top;
    rect
}

async fn client_rect(data: &MountedData) -> Option<Rect> {
    let rect = data.get_client_rect().await.ok()?;
    Some(Rect::new(
        rect.origin.x,
        rect.origin.y,
        rect.size.width,
        rect.size.height,
    ))
}

/// Create the page context. Call once, from the root component.
pub fn use_page_provider(initial: UiState) -> PageContext {
    let state = use_signal(move || initial);
    let visuals = use_signal(VisualState::default);
    let dispatcher = use_signal(Dispatcher::with_default_handlers);
    let elements = use_signal(Elements::default);

    use_context_provider(|| PageContext {
        state,
        visuals,
        dispatcher,
        elements,
    })
}

/// Hook to access the page from context.
pub fn use_page() -> PageContext {
    use_context::<PageContext>()
}
