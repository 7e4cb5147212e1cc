//! Page ports talking to one executor over the shared channel.

use std::sync::Arc;

use navel_background::{BackgroundRouter, MemoryTabStrip};
use navel_protocols::{channel, BackgroundCommand, BackgroundPort, MessageSender, MoveDirection};
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn test_two_tabs_share_one_executor() {
    let strip = Arc::new(MemoryTabStrip::new());
    let first = strip.open("https://a.example/");
    let second = strip.open("https://b.example/");
    let router = BackgroundRouter::new(strip.clone());

    let (first_port, rx) = channel(strip.sender_for(first));
    let second_port = first_port.for_sender(strip.sender_for(second));

    second_port
        .send(&BackgroundCommand::open_in_new_tab("https://c.example/"))
        .unwrap();
    first_port
        .send(&BackgroundCommand::move_tab(MoveDirection::Left))
        .unwrap();
    drop(first_port);
    drop(second_port);

    router.run(rx, CancellationToken::new()).await.unwrap();

    let urls: Vec<String> = strip.tabs().into_iter().map(|t| t.url).collect();
    assert_eq!(
        urls,
        vec!["https://b.example/", "https://c.example/", "https://a.example/"]
    );
    assert!(strip.tabs()[1].active);
}

#[tokio::test]
async fn test_detached_sender_cannot_move_tabs() {
    let strip = Arc::new(MemoryTabStrip::new());
    strip.open("https://a.example/");
    strip.open("https://b.example/");
    let router = BackgroundRouter::new(strip.clone());

    let (port, rx) = channel(MessageSender::detached());
    port.send(&BackgroundCommand::move_tab(MoveDirection::Right))
        .unwrap();
    port.send(&BackgroundCommand::DuplicateTab).unwrap();
    drop(port);

    router.run(rx, CancellationToken::new()).await.unwrap();
    assert_eq!(strip.len(), 2);
    assert_eq!(strip.tabs()[0].url, "https://a.example/");
}
