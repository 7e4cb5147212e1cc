use super::*;
use parking_lot::Mutex;

struct Recorder {
    name: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
    response: EventResponse,
}

impl EventListener for Recorder {
    fn handle_event(&self, _event: &PageEvent) -> EventResponse {
        self.log.lock().push(self.name);
        self.response
    }
}

fn recorder(
    name: &'static str,
    log: &Arc<Mutex<Vec<&'static str>>>,
    response: EventResponse,
) -> Arc<dyn EventListener> {
    Arc::new(Recorder {
        name,
        log: Arc::clone(log),
        response,
    })
}

fn rect(x: f64, y: f64) -> Rect {
    Rect::new(x, y, 50.0, 20.0)
}

#[test]
fn test_rect_intersects() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(a.intersects(&Rect::new(50.0, 50.0, 100.0, 100.0)));
    assert!(!a.intersects(&Rect::new(200.0, 200.0, 10.0, 10.0)));
    assert!(!a.intersects(&Rect::new(100.0, 0.0, 10.0, 10.0)));
}

#[test]
fn test_boolean_attribute_semantics() {
    let el = ElementSnapshot::new(ElementId(0), "BUTTON")
        .with_attribute("disabled", "")
        .with_attribute("aria-hidden", "TRUE")
        .with_attribute("aria-disabled", "false");

    assert_eq!(el.tag, "button");
    assert!(el.is_boolean_attribute_set("disabled"));
    assert!(el.is_boolean_attribute_set("aria-hidden"));
    assert!(!el.is_boolean_attribute_set("aria-disabled"));
    assert!(!el.is_boolean_attribute_set("hidden"));
}

#[tokio::test]
async fn test_observe_intersections_uses_scroll_offset() {
    let page = MemoryPage::new("https://example.com/")
        .with_viewport(Viewport {
            width: 800.0,
            height: 600.0,
        });
    let top = page.add_element("a", &[], rect(10.0, 10.0));
    let below = page.add_element("a", &[], rect(10.0, 900.0));

    let entries = page.observe_intersections(&[top, below]).await;
    assert!(entries[0].is_intersecting);
    assert!(!entries[1].is_intersecting);

    page.scroll_by(0.0, 600.0, ScrollBehavior::Instant);
    let entries = page.observe_intersections(&[top, below]).await;
    assert!(!entries[0].is_intersecting);
    assert!(entries[1].is_intersecting);
    assert_eq!(entries[1].bounding_rect.top(), 300.0);
}

#[tokio::test]
async fn test_observe_skips_unknown_ids() {
    let page = MemoryPage::new("https://example.com/");
    let a = page.add_element("a", &[], rect(0.0, 0.0));

    let entries = page.observe_intersections(&[a, ElementId(42)]).await;
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_dispatch_newest_listener_first() {
    let page = MemoryPage::new("https://example.com/");
    let log = Arc::new(Mutex::new(Vec::new()));
    page.add_listener(recorder("old", &log, EventResponse::PASS));
    page.add_listener(recorder("new", &log, EventResponse::PASS));

    let outcome = page.key_down(KeyEvent::new("a"));
    assert_eq!(*log.lock(), vec!["new", "old"]);
    assert_eq!(outcome.delivered, 2);
    assert!(!outcome.default_prevented);
}

#[test]
fn test_stop_propagation_hides_event_from_older_listeners() {
    let page = MemoryPage::new("https://example.com/");
    let log = Arc::new(Mutex::new(Vec::new()));
    page.add_listener(recorder("page", &log, EventResponse::PASS));
    page.add_listener(recorder("overlay", &log, EventResponse::CONSUME));

    let outcome = page.key_down(KeyEvent::new("s"));
    assert_eq!(*log.lock(), vec!["overlay"]);
    assert!(outcome.default_prevented);
}

#[test]
fn test_subscription_removed_on_drop() {
    let memory = Arc::new(MemoryPage::new("https://example.com/"));
    let page: Arc<dyn Page> = memory.clone();
    let log = Arc::new(Mutex::new(Vec::new()));

    let mut subscription = Subscription::register(&page, recorder("x", &log, EventResponse::PASS));
    assert!(subscription.is_active());
    assert_eq!(memory.listener_count(), 1);
    subscription.unsubscribe();
    subscription.unsubscribe();
    assert!(!subscription.is_active());
    assert_eq!(memory.listener_count(), 0);

    let second = Subscription::register(&page, recorder("y", &log, EventResponse::PASS));
    assert_eq!(memory.listener_count(), 1);
    drop(second);
    assert_eq!(memory.listener_count(), 0);
}

#[test]
fn test_click_follows_link_and_records_activation() {
    let page = MemoryPage::new("https://example.com/docs/");
    let link = page.add_element("a", &[("href", "../about?x=1")], rect(0.0, 0.0));

    page.click(link);

    assert_eq!(page.activations(), vec![link]);
    assert_eq!(page.location(), "https://example.com/about?x=1");
}

#[test]
fn test_click_prevented_does_not_navigate() {
    let page = MemoryPage::new("https://example.com/");
    let link = page.add_element("a", &[("href", "/next")], rect(0.0, 0.0));
    let log = Arc::new(Mutex::new(Vec::new()));
    page.add_listener(recorder("spa-router", &log, EventResponse::CONSUME));

    page.click(link);

    assert_eq!(page.location(), "https://example.com/");
    assert_eq!(*log.lock(), vec!["spa-router"]);
}

#[test]
fn test_resolved_href() {
    let page = MemoryPage::new("https://example.com/a/b#frag");
    let relative = page.add_element("a", &[("href", "c")], rect(0.0, 0.0));
    let empty = page.add_element("a", &[("href", "")], rect(0.0, 0.0));
    let missing = page.add_element("a", &[], rect(0.0, 0.0));
    let button = page.add_element("button", &[("href", "/x")], rect(0.0, 0.0));

    assert_eq!(
        page.resolved_href(relative).as_deref(),
        Some("https://example.com/a/c")
    );
    assert_eq!(
        page.resolved_href(empty).as_deref(),
        Some("https://example.com/a/b")
    );
    assert_eq!(page.resolved_href(missing), None);
    assert_eq!(page.resolved_href(button), None);
}

#[test]
fn test_history_navigation() {
    let page = MemoryPage::new("https://example.com/1");
    let link = page.add_element("a", &[("href", "/2")], rect(0.0, 0.0));
    page.click(link);

    page.history_go(-1);
    assert_eq!(page.location(), "https://example.com/1");
    page.history_go(-1);
    assert_eq!(page.location(), "https://example.com/1");
    page.history_go(1);
    assert_eq!(page.location(), "https://example.com/2");
}

#[test]
fn test_marker_lifecycle() {
    let page = MemoryPage::new("https://example.com/");
    let id = page.insert_marker(Marker {
        class_name: "hint".into(),
        top: 1.0,
        left: 2.0,
        glyphs: vec![
            Glyph { ch: 'S', tone: Tone::Default },
            Glyph { ch: 'A', tone: Tone::Default },
        ],
    });

    page.set_marker_tones(id, &[Tone::Muted, Tone::Default]);
    assert_eq!(page.markers()[0].glyphs[0].tone, Tone::Muted);
    assert_eq!(page.markers()[0].text(), "SA");

    page.remove_marker(id);
    page.remove_marker(id);
    assert_eq!(page.marker_count(), 0);
    assert_eq!(page.markers_created(), 1);
}

#[test]
fn test_scroll_dispatches_event() {
    let page = MemoryPage::new("https://example.com/");
    let log = Arc::new(Mutex::new(Vec::new()));
    page.add_listener(recorder("watcher", &log, EventResponse::PASS));

    page.scroll_by(0.0, -50.0, ScrollBehavior::Smooth);

    assert_eq!(page.scroll_offset(), (0.0, 0.0));
    assert_eq!(log.lock().len(), 1);
}

#[test]
fn test_fixture_into_page() {
    let json = r#"{
        "url": "https://example.com/",
        "viewport": {"width": 400, "height": 300},
        "elements": [
            {"tag": "A", "attributes": {"href": "/x"}, "rect": {"x": 0, "y": 0, "width": 10, "height": 10}},
            {"tag": "div", "rect": {"x": 0, "y": 20, "width": 10, "height": 10}}
        ]
    }"#;

    let page = PageFixture::from_json(json).unwrap().into_page();
    let elements = page.elements();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].tag, "a");
    assert_eq!(elements[0].attribute("href"), Some("/x"));
    assert!(elements[1].attributes.is_empty());
}
