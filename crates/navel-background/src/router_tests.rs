use navel_protocols::{channel, BackgroundPort, MessageSender, MoveDirection, TabId};
use parking_lot::Mutex;
use serde_json::json;

use super::*;
use crate::strip::MemoryTabStrip;

fn setup(urls: &[&str]) -> (Arc<MemoryTabStrip>, Vec<TabId>, BackgroundRouter) {
    let strip = Arc::new(MemoryTabStrip::new());
    let ids = urls.iter().map(|url| strip.open(*url)).collect();
    let router = BackgroundRouter::new(strip.clone());
    (strip, ids, router)
}

fn envelope(payload: Value, sender: MessageSender) -> Envelope {
    Envelope { payload, sender }
}

struct Recording {
    seen: Arc<Mutex<Vec<BackgroundCommand>>>,
}

impl CommandHandler for Recording {
    fn kind(&self) -> BackgroundCommandKind {
        BackgroundCommandKind::DuplicateTab
    }

    fn execute(&self, command: &BackgroundCommand, _sender: &MessageSender) {
        self.seen.lock().push(command.clone());
    }
}

#[test]
fn test_dispatch_open_in_new_tab() {
    let (strip, ids, router) = setup(&["a", "b"]);

    router
        .dispatch(envelope(
            json!({"kind": "openInNewTab", "data": {"href": "https://x/"}}),
            strip.sender_for(ids[0]),
        ))
        .unwrap();

    let urls: Vec<_> = strip.tabs().into_iter().map(|t| t.url).collect();
    assert_eq!(urls, vec!["a", "https://x/", "b"]);
}

#[test]
fn test_unknown_kind_is_fatal() {
    let (_strip, _ids, router) = setup(&["a"]);

    let err = router
        .dispatch(envelope(json!({"kind": "closeAll"}), MessageSender::detached()))
        .unwrap_err();
    assert!(matches!(err, BackgroundError::UnknownCommand(ref kind) if kind == "closeAll"));
    assert!(err.is_fatal());

    let err = router
        .dispatch(envelope(json!({"data": {}}), MessageSender::detached()))
        .unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn test_known_kind_without_handler_is_unknown() {
    let router = BackgroundRouter::empty();
    let err = router
        .dispatch(envelope(json!({"kind": "duplicateTab"}), MessageSender::detached()))
        .unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn test_malformed_payload() {
    let (_strip, _ids, router) = setup(&["a"]);

    let err = router
        .dispatch(envelope(
            json!({"kind": "moveTab", "data": {"direction": "up"}}),
            MessageSender::detached(),
        ))
        .unwrap_err();
    assert!(matches!(err, BackgroundError::Malformed { .. }));
    assert!(!err.is_fatal());
}

#[test]
fn test_custom_handler_replaces_default() {
    let (strip, ids, router) = setup(&["a"]);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let router = router.with_handler(Box::new(Recording { seen: seen.clone() }));

    router
        .dispatch(envelope(json!({"kind": "duplicateTab"}), strip.sender_for(ids[0])))
        .unwrap();

    assert_eq!(*seen.lock(), vec![BackgroundCommand::DuplicateTab]);
    assert_eq!(strip.len(), 1);
}

#[tokio::test]
async fn test_run_processes_until_ports_close() {
    let (strip, ids, router) = setup(&["a", "b"]);
    let (port, rx) = channel(strip.sender_for(ids[0]));

    port.send(&BackgroundCommand::DuplicateTab).unwrap();
    port.send(&BackgroundCommand::move_tab(MoveDirection::Right))
        .unwrap();
    drop(port);

    router.run(rx, CancellationToken::new()).await.unwrap();

    let urls: Vec<_> = strip.tabs().into_iter().map(|t| t.url).collect();
    // The sender still reports index 0 for the second message.
    assert_eq!(urls, vec!["a", "a", "b"]);
    assert_eq!(strip.index_of(ids[0]), Some(1));
}

#[tokio::test]
async fn test_run_stops_on_unknown_kind() {
    let (strip, ids, router) = setup(&["a"]);
    let (port, rx) = channel(strip.sender_for(ids[0]));

    port.send_raw(json!({"kind": "bogus"})).unwrap();
    port.send(&BackgroundCommand::DuplicateTab).unwrap();

    let result = router.run(rx, CancellationToken::new()).await;

    assert!(matches!(result, Err(BackgroundError::UnknownCommand(_))));
    assert_eq!(strip.len(), 1);
}

#[tokio::test]
async fn test_run_skips_malformed_messages() {
    let (strip, ids, router) = setup(&["a"]);
    let (port, rx) = channel(strip.sender_for(ids[0]));

    port.send_raw(json!({"kind": "openInNewTab"})).unwrap();
    port.send(&BackgroundCommand::DuplicateTab).unwrap();
    drop(port);

    router.run(rx, CancellationToken::new()).await.unwrap();
    assert_eq!(strip.len(), 2);
}

#[tokio::test]
async fn test_run_stops_on_shutdown() {
    let (strip, ids, router) = setup(&["a"]);
    let (_port, rx) = channel(strip.sender_for(ids[0]));
    let shutdown = CancellationToken::new();
    shutdown.cancel();

    router.run(rx, shutdown).await.unwrap();
}
