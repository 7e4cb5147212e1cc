//! Installing Navel with file-backed settings and driving it by keyboard.

use std::sync::Arc;

use navel_config::{ExtensionOptions, FileSettingsStore, ScrollConfig, SettingsStore};
use navel_content::page::{KeyEvent, MemoryPage, Page, Rect};
use navel_content::{CommandContext, CommandFactory, ContentScript, KeyMap, LogSink};
use navel_logging::LogBuffer;
use navel_protocols::{channel, EnvelopeReceiver, MessageSender, TabId};
use serde_json::json;
use tempfile::TempDir;

fn factory(page: &Arc<MemoryPage>) -> (CommandFactory, EnvelopeReceiver) {
    let (port, rx) = channel(MessageSender::tab(TabId(11), 0));
    let factory = CommandFactory::new(CommandContext {
        page: page.clone(),
        port: Arc::new(port),
        logs: Arc::new(LogBuffer::new()),
        log_sink: LogSink::Memory(Default::default()),
        scroll: ScrollConfig::default(),
    });
    (factory, rx)
}

#[tokio::test]
async fn test_file_settings_gate_installation() {
    let dir = TempDir::new().unwrap();
    let store = FileSettingsStore::new(dir.path().join("settings.json"));
    store
        .save_options(&ExtensionOptions::from_text("^https://bank\\.\r\n\nintranet\n"))
        .await
        .unwrap();

    let bank = Arc::new(MemoryPage::new("https://bank.example.com/login"));
    let (f, _rx) = factory(&bank);
    assert!(ContentScript::install(bank.clone(), &store, KeyMap::default(), f)
        .await
        .unwrap()
        .is_none());

    let news = Arc::new(MemoryPage::new("https://news.example.com/"));
    let (f, _rx) = factory(&news);
    assert!(ContentScript::install(news.clone(), &store, KeyMap::default(), f)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_missing_settings_file_enables_everywhere() {
    let dir = TempDir::new().unwrap();
    let store = FileSettingsStore::new(dir.path().join("absent.json"));
    let page = Arc::new(MemoryPage::new("https://example.com/"));
    let (f, _rx) = factory(&page);

    let script = ContentScript::install(page.clone(), &store, KeyMap::default(), f)
        .await
        .unwrap();
    assert!(script.is_some());
}

#[tokio::test]
async fn test_keyboard_session() {
    let dir = TempDir::new().unwrap();
    let store = FileSettingsStore::new(dir.path().join("settings.json"));
    let page = Arc::new(MemoryPage::new("https://example.com/start"));
    page.add_element("a", &[("href", "/next")], Rect::new(0.0, 0.0, 50.0, 10.0));
    let (f, mut rx) = factory(&page);
    let script = ContentScript::install(page.clone(), &store, KeyMap::default(), f)
        .await
        .unwrap()
        .unwrap();

    page.key_down(KeyEvent::new("d").with_ctrl());
    script.settle().await;
    assert_eq!(rx.try_recv().unwrap().payload, json!({"kind": "duplicateTab"}));

    page.key_down(KeyEvent::new("l").with_ctrl());
    while page.marker_count() == 0 {
        tokio::task::yield_now().await;
    }
    page.key_down(KeyEvent::new("s"));
    script.settle().await;
    assert_eq!(page.location(), "https://example.com/next");

    page.key_down(KeyEvent::new("b").with_ctrl());
    script.settle().await;
    assert_eq!(page.location(), "https://example.com/start");

    script.shutdown().await;
    assert_eq!(page.listener_count(), 0);
}
