//! `navel simulate`: run a page fixture and a tab strip in-process.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use navel_background::{BackgroundRouter, MemoryTabStrip};
use navel_config::{Config, SettingsStore};
use navel_content::page::Page;
use navel_content::{
    CommandContext, CommandFactory, ContentScript, KeyMap, LogSink, MemoryPage, PageFixture,
};
use navel_logging::LogBuffer;
use navel_protocols::channel;

use crate::key_script::{self, ScriptStep};

/// Scheduler turns granted after each step so spawned commands and the
/// executor can catch up.
const STEP_YIELDS: usize = 32;

pub(crate) async fn simulate(
    config: &Config,
    settings: &dyn SettingsStore,
    logs: Arc<LogBuffer>,
    page_path: &Path,
    keys: &str,
    open: &[String],
) -> Result<()> {
    let steps = key_script::parse(keys)?;
    let json = tokio::fs::read_to_string(page_path)
        .await
        .with_context(|| format!("Failed to read page fixture {}", page_path.display()))?;
    let fixture = PageFixture::from_json(&json)
        .with_context(|| format!("Invalid page fixture {}", page_path.display()))?;

    let page = Arc::new(fixture.into_page());
    let strip = Arc::new(MemoryTabStrip::new());
    let page_tab = strip.open(page.location());
    for url in open {
        strip.open(url.as_str());
    }
    strip.activate(page_tab)?;

    let (port, rx) = channel(strip.sender_for(page_tab));
    let router = BackgroundRouter::new(strip.clone());
    let shutdown = CancellationToken::new();
    let executor = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move { router.run(rx, shutdown).await })
    };

    let factory = CommandFactory::new(CommandContext {
        page: page.clone(),
        port: Arc::new(port),
        logs,
        log_sink: LogSink::Stderr,
        scroll: config.scroll.clone(),
    });
    let script = ContentScript::install(page.clone(), settings, KeyMap::default(), factory).await?;

    match script {
        Some(script) => {
            for step in steps {
                apply(&page, step);
                catch_up().await;
            }
            script.shutdown().await;
        }
        None => println!("Navel is disabled for {}", page.location()),
    }

    catch_up().await;
    shutdown.cancel();
    if let Err(e) = executor.await? {
        warn!(error = %e, "Background executor stopped");
    }

    print_state(&page, &strip);
    Ok(())
}

fn apply(page: &MemoryPage, step: ScriptStep) {
    info!(?step, "Simulating input");
    match step {
        ScriptStep::Key(event) => {
            page.key_down(event);
        }
        ScriptStep::Click(target) => {
            page.user_click(target);
        }
        ScriptStep::Scroll(dy) => {
            page.user_scroll(dy);
        }
    }
}

async fn catch_up() {
    for _ in 0..STEP_YIELDS {
        tokio::task::yield_now().await;
    }
}

fn print_state(page: &MemoryPage, strip: &MemoryTabStrip) {
    let (x, y) = page.scroll_offset();
    println!("Page:     {}", page.location());
    println!("Scroll:   {}, {}", x, y);
    if let Some(focused) = page.focused() {
        println!("Focused:  {}", focused);
    }

    let markers = page.markers();
    if !markers.is_empty() {
        let labels: Vec<String> = markers.iter().map(|m| m.text()).collect();
        println!("Markers:  {}", labels.join(" "));
    }

    println!("Tabs:");
    for (index, tab) in strip.tabs().iter().enumerate() {
        let active = if tab.active { "*" } else { " " };
        println!("  {} {:>2} {:<8} {}", active, index, tab.id.to_string(), tab.url);
    }
}
