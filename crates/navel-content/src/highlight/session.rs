//! One highlight-scan-select cycle on a page.
//!
//! A [`HighlightSession`] scans the page, labels every visible interactive
//! element, then waits for the user to type a label. It ends on a match,
//! on Escape, on any click or scroll in the document, or when its
//! cancellation token fires. Whatever the exit path, including the future
//! being dropped mid-await, every marker is removed and the page listener
//! unregistered before `run` returns.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::highlight::labels::allocate;
use crate::highlight::overlay::{MarkerHandle, OverlayRenderer};
use crate::highlight::scanner::{scan, ClickableElementEntry};
use crate::highlight::selection::{classify_key, Selection, Step};
use crate::page::{ElementId, EventListener, EventResponse, Page, PageEvent, Subscription};

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

/// Lifecycle of a session, observable through [`HighlightSession::phases`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Scanning,
    Annotated,
    AwaitingInput,
    Resolved,
    TornDown,
}

/// Why a session ended without a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbandonReason {
    Escape,
    Click,
    Scroll,
    Cancelled,
}

impl fmt::Display for AbandonReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbandonReason::Escape => write!(f, "escape"),
            AbandonReason::Click => write!(f, "document click"),
            AbandonReason::Scroll => write!(f, "document scroll"),
            AbandonReason::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Selected {
        label: String,
        target: ElementId,
        open_in_new_tab: bool,
    },
    Abandoned(AbandonReason),
    /// Nothing on screen to label.
    NoTargets,
}

/// A label bound to its target element and marker.
struct Annotation {
    target: ElementId,
    marker: MarkerHandle,
}

/// Input forwarded from the page listener to the session loop.
#[derive(Debug)]
enum SessionInput {
    Step(Step),
    Click,
    Scroll,
}

impl SessionInput {
    fn ends_session(&self) -> bool {
        !matches!(self, SessionInput::Step(Step::Continue))
    }
}

/// Prefix state shared by the listener and the session loop.
///
/// Keys are applied as they are dispatched, so once a key resolves the
/// session every later event passes through to the page untouched.
#[derive(Debug, Default)]
struct InputState {
    selection: Selection,
    resolved: bool,
}

struct SessionListener {
    state: Arc<Mutex<InputState>>,
    tx: mpsc::UnboundedSender<SessionInput>,
}

impl EventListener for SessionListener {
    fn handle_event(&self, event: &PageEvent) -> EventResponse {
        let mut state = self.state.lock();
        if state.resolved {
            return EventResponse::PASS;
        }

        let (input, response) = match event {
            PageEvent::KeyDown(key_event) => {
                let Some(key) = classify_key(key_event) else {
                    return EventResponse::PASS;
                };
                let step = state.selection.apply(key, key_event.shift);
                (SessionInput::Step(step), EventResponse::CONSUME)
            }
            PageEvent::Click { .. } => (SessionInput::Click, EventResponse::PASS),
            PageEvent::Scroll => (SessionInput::Scroll, EventResponse::PASS),
        };
        state.resolved = input.ends_session();
        // The loop may already have been cancelled and dropped the receiver.
        let _ = self.tx.send(input);
        response
    }
}

/// Everything a session has put on the page. Dropping it tears it all
/// down.
struct ActiveSession {
    renderer: OverlayRenderer,
    annotations: HashMap<String, Annotation>,
    input: Arc<Mutex<InputState>>,
    subscription: Option<Subscription>,
    phase: watch::Sender<SessionPhase>,
}

impl ActiveSession {
    fn set_phase(&self, phase: SessionPhase) {
        debug!(?phase, "Highlight session phase");
        self.phase.send_replace(phase);
    }

    fn annotate(&mut self, entries: &[ClickableElementEntry]) {
        let labels = allocate(entries.len());
        for (entry, label) in entries.iter().zip(labels) {
            let marker = self.renderer.render(entry.bounding_rect, &label);
            self.annotations.insert(
                label,
                Annotation {
                    target: entry.element,
                    marker,
                },
            );
        }
        self.input.lock().selection = Selection::new(self.annotations.keys().cloned());
    }

    fn shade(&self) {
        let prefix = self.input.lock().selection.prefix().to_owned();
        debug!(prefix = %prefix, "Highlight input");
        for annotation in self.annotations.values() {
            self.renderer.emphasize_prefix(&annotation.marker, &prefix);
        }
    }

    fn teardown(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        for (_, annotation) in self.annotations.drain() {
            self.renderer.destroy(annotation.marker);
        }
        let mut input = self.input.lock();
        input.resolved = true;
        input.selection.clear();
    }
}

impl Drop for ActiveSession {
    fn drop(&mut self) {
        self.teardown();
        self.set_phase(SessionPhase::TornDown);
    }
}

/// A single-use link-hint session bound to one page.
pub struct HighlightSession {
    page: Arc<dyn Page>,
    phase: watch::Sender<SessionPhase>,
}

impl HighlightSession {
    pub fn new(page: Arc<dyn Page>) -> Self {
        let (phase, _) = watch::channel(SessionPhase::Idle);
        Self { page, phase }
    }

    /// Subscribe to phase changes.
    pub fn phases(&self) -> watch::Receiver<SessionPhase> {
        self.phase.subscribe()
    }

    /// Drive the session to completion.
    pub async fn run(self, token: Option<CancellationToken>) -> SessionOutcome {
        let mut active = ActiveSession {
            renderer: OverlayRenderer::new(Arc::clone(&self.page)),
            annotations: HashMap::new(),
            input: Arc::default(),
            subscription: None,
            phase: self.phase,
        };

        active.set_phase(SessionPhase::Scanning);
        let entries = match &token {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => None,
                entries = scan(self.page.as_ref()) => Some(entries),
            },
            None => Some(scan(self.page.as_ref()).await),
        };
        let Some(entries) = entries else {
            info!("Highlight session cancelled while scanning");
            return SessionOutcome::Abandoned(AbandonReason::Cancelled);
        };

        if entries.is_empty() {
            info!("No visible clickable elements to highlight");
            return SessionOutcome::NoTargets;
        }

        active.annotate(&entries);
        active.set_phase(SessionPhase::Annotated);
        info!(
            visible = entries.len(),
            annotated = active.annotations.len(),
            "Annotated clickable elements"
        );

        let (tx, mut rx) = mpsc::unbounded_channel();
        active.subscription = Some(Subscription::register(
            &self.page,
            Arc::new(SessionListener {
                state: Arc::clone(&active.input),
                tx,
            }),
        ));
        active.set_phase(SessionPhase::AwaitingInput);

        let outcome = loop {
            let input = match &token {
                Some(token) => tokio::select! {
                    biased;
                    _ = token.cancelled() => None,
                    input = rx.recv() => input,
                },
                None => rx.recv().await,
            };

            let Some(input) = input else {
                break SessionOutcome::Abandoned(AbandonReason::Cancelled);
            };

            match input {
                SessionInput::Click => break SessionOutcome::Abandoned(AbandonReason::Click),
                SessionInput::Scroll => break SessionOutcome::Abandoned(AbandonReason::Scroll),
                SessionInput::Step(Step::Continue) => active.shade(),
                SessionInput::Step(Step::Cancel) => {
                    break SessionOutcome::Abandoned(AbandonReason::Escape);
                }
                SessionInput::Step(Step::Select {
                    label,
                    open_in_new_tab,
                }) => {
                    // Selection only ever yields labels taken from the annotations.
                    if let Some(annotation) = active.annotations.get(&label) {
                        break SessionOutcome::Selected {
                            target: annotation.target,
                            label,
                            open_in_new_tab,
                        };
                    }
                }
            }
        };

        active.set_phase(SessionPhase::Resolved);
        match &outcome {
            SessionOutcome::Abandoned(reason) => info!(%reason, "Highlight session abandoned"),
            SessionOutcome::Selected { label, target, .. } => {
                info!(label = %label, target = %target, "Highlight label selected")
            }
            SessionOutcome::NoTargets => {}
        }
        outcome
    }
}
