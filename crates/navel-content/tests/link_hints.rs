//! End-to-end link-hint sessions against in-memory pages.

use std::sync::Arc;

use navel_content::highlight::{
    AbandonReason, ActionResolver, Activation, HighlightSession, SessionOutcome, SessionPhase,
};
use navel_content::page::{ElementId, KeyEvent, MemoryPage, Page, PageFixture};
use navel_protocols::{channel, MessageSender, TabId};
use serde_json::json;
use tokio::sync::watch;
use tokio::task::JoinHandle;

const FIXTURE: &str = r#"{
    "url": "https://news.example.com/front",
    "viewport": {"width": 1024, "height": 768},
    "elements": [
        {"tag": "a", "attributes": {"href": "/story/1"}, "rect": {"x": 20, "y": 40, "width": 300, "height": 18}},
        {"tag": "div", "attributes": {"class": "ad"}, "rect": {"x": 20, "y": 80, "width": 300, "height": 90}},
        {"tag": "button", "attributes": {"aria-label": "Upvote"}, "rect": {"x": 0, "y": 40, "width": 16, "height": 16}},
        {"tag": "input", "attributes": {"type": "hidden", "name": "csrf"}, "rect": {"x": 0, "y": 0, "width": 0, "height": 0}},
        {"tag": "a", "attributes": {"href": "https://other.example.org/"}, "rect": {"x": 20, "y": 200, "width": 300, "height": 18}},
        {"tag": "a", "attributes": {"href": "/story/99"}, "rect": {"x": 20, "y": 4000, "width": 300, "height": 18}}
    ]
}"#;

fn fixture_page() -> Arc<MemoryPage> {
    Arc::new(PageFixture::from_json(FIXTURE).unwrap().into_page())
}

async fn start(page: &Arc<MemoryPage>) -> (JoinHandle<SessionOutcome>, watch::Receiver<SessionPhase>) {
    let session = HighlightSession::new(page.clone());
    let mut phases = session.phases();
    let handle = tokio::spawn(session.run(None));
    phases
        .wait_for(|phase| *phase == SessionPhase::AwaitingInput)
        .await
        .unwrap();
    (handle, phases)
}

async fn settle() {
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_fixture_labels_visible_candidates_in_document_order() {
    let page = fixture_page();
    let (handle, _phases) = start(&page).await;

    let markers = page.markers();
    let labels: Vec<String> = markers.iter().map(|m| m.text()).collect();
    assert_eq!(labels, vec!["S", "A", "D"]);
    assert_eq!((markers[1].top, markers[1].left), (40.0, 0.0));

    page.key_down(KeyEvent::new("d"));
    assert_eq!(
        handle.await.unwrap(),
        SessionOutcome::Selected {
            label: "d".into(),
            target: ElementId(4),
            open_in_new_tab: false,
        }
    );
}

// An exact match with an assigned label resolves the session. Anything
// else, including a prefix longer than every label, is a partial match
// that keeps the session waiting; Backspace trims it back.
#[tokio::test]
async fn test_unassigned_prefix_keeps_waiting() {
    let page = fixture_page();
    let (handle, phases) = start(&page).await;

    // Only "s", "a" and "d" are assigned, so "f" and then "fs" match nothing.
    page.key_down(KeyEvent::new("f"));
    page.key_down(KeyEvent::new("s"));
    settle().await;
    assert_eq!(*phases.borrow(), SessionPhase::AwaitingInput);
    assert_eq!(page.marker_count(), 3);

    page.key_down(KeyEvent::new("Backspace"));
    page.key_down(KeyEvent::new("Backspace"));
    page.key_down(KeyEvent::new("Backspace"));
    settle().await;
    assert_eq!(*phases.borrow(), SessionPhase::AwaitingInput);

    page.key_down(KeyEvent::new("s"));
    assert!(matches!(
        handle.await.unwrap(),
        SessionOutcome::Selected { target: ElementId(0), .. }
    ));
}

#[tokio::test]
async fn test_escape_after_prefix() {
    let page = fixture_page();
    let (handle, phases) = start(&page).await;

    page.key_down(KeyEvent::new("f"));
    page.key_down(KeyEvent::new("Escape"));

    assert_eq!(
        handle.await.unwrap(),
        SessionOutcome::Abandoned(AbandonReason::Escape)
    );
    assert_eq!(page.marker_count(), 0);
    assert_eq!(*phases.borrow(), SessionPhase::TornDown);
}

#[tokio::test]
async fn test_click_after_prefix() {
    let page = fixture_page();
    let (handle, _phases) = start(&page).await;

    page.key_down(KeyEvent::new("w"));
    page.user_click(Some(ElementId(1)));

    assert_eq!(
        handle.await.unwrap(),
        SessionOutcome::Abandoned(AbandonReason::Click)
    );
    assert_eq!(page.marker_count(), 0);
    assert_eq!(page.listener_count(), 0);
}

#[tokio::test]
async fn test_shift_selection_opens_link_in_new_tab() {
    let page = fixture_page();
    let (port, mut rx) = channel(MessageSender::tab(TabId(3), 5));
    let resolver = ActionResolver::new(page.clone(), Arc::new(port));
    let (handle, _phases) = start(&page).await;

    page.key_down(KeyEvent::new("S").with_shift());
    let SessionOutcome::Selected {
        target,
        open_in_new_tab,
        ..
    } = handle.await.unwrap()
    else {
        panic!("expected a selection");
    };

    let activation = resolver.resolve(target, open_in_new_tab);
    assert_eq!(
        activation,
        Activation::OpenedInNewTab {
            href: "https://news.example.com/story/1".into()
        }
    );

    let envelope = rx.try_recv().unwrap();
    assert_eq!(
        envelope.payload,
        json!({"kind": "openInNewTab", "data": {"href": "https://news.example.com/story/1"}})
    );
    assert!(rx.try_recv().is_err());
    assert_eq!(page.location(), "https://news.example.com/front");
}

#[tokio::test]
async fn test_shift_selection_on_button_clicks() {
    let page = fixture_page();
    let (port, mut rx) = channel(MessageSender::tab(TabId(3), 5));
    let resolver = ActionResolver::new(page.clone(), Arc::new(port));
    let (handle, _phases) = start(&page).await;

    page.key_down(KeyEvent::new("A").with_shift());
    let SessionOutcome::Selected {
        target,
        open_in_new_tab,
        ..
    } = handle.await.unwrap()
    else {
        panic!("expected a selection");
    };
    assert!(open_in_new_tab);

    assert_eq!(resolver.resolve(target, open_in_new_tab), Activation::Clicked);
    assert_eq!(page.activations(), vec![ElementId(2)]);
    assert_eq!(page.focused(), Some(ElementId(2)));
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_scrolled_out_of_view_elements_are_skipped() {
    let page = fixture_page();
    page.user_scroll(3900.0);

    let (handle, _phases) = start(&page).await;
    assert_eq!(page.marker_count(), 1);

    page.key_down(KeyEvent::new("s"));
    assert!(matches!(
        handle.await.unwrap(),
        SessionOutcome::Selected { target: ElementId(5), .. }
    ));
}
