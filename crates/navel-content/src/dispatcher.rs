//! Top-level keyboard listener of the page-resident component.

use std::sync::Arc;

use navel_config::{SettingsStore, SiteFilter};
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::commands::{CommandFactory, CommandKind};
use crate::error::ContentError;
use crate::keymap::KeyMap;
use crate::page::{EventListener, EventResponse, KeyEvent, Page, PageEvent, Subscription};

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;

struct RunningCommand {
    kind: CommandKind,
    token: CancellationToken,
    task: JoinHandle<()>,
}

struct Dispatch {
    keymap: KeyMap,
    factory: CommandFactory,
    runtime: Handle,
    running: Mutex<Option<RunningCommand>>,
}

impl Dispatch {
    fn on_key(&self, event: &KeyEvent) {
        if !event.ctrl || event.key == "Control" {
            return;
        }

        debug!(key = %event.key, "Looking for command");
        let Some(mapping) = self.keymap.get(&event.key) else {
            return;
        };
        if mapping.requires_shift && !event.shift {
            debug!(key = %event.key, "Command found but required shift modifier is missing");
            return;
        }

        let token = CancellationToken::new();
        let command = self.factory.create(mapping.command);
        info!(command = %mapping.command, "Command requested");

        let mut running = self.running.lock();
        if let Some(previous) = running.take() {
            previous.token.cancel();
        }

        let task_token = token.clone();
        let task = self.runtime.spawn(async move {
            let kind = command.kind();
            if let Err(e) = command.execute(Some(task_token)).await {
                warn!(command = %kind, error = %e, "Command failed");
            }
        });
        *running = Some(RunningCommand {
            kind: mapping.command,
            token,
            task,
        });
    }
}

struct KeyListener {
    dispatch: Arc<Dispatch>,
}

impl EventListener for KeyListener {
    fn handle_event(&self, event: &PageEvent) -> EventResponse {
        if let PageEvent::KeyDown(key) = event {
            self.dispatch.on_key(key);
        }
        EventResponse::PASS
    }
}

/// Navel installed in one page.
pub struct ContentScript {
    dispatch: Arc<Dispatch>,
    subscription: Subscription,
}

impl ContentScript {
    /// Install the keyboard listener on `page` unless the page URL matches
    /// a disabled-site pattern, in which case nothing is installed.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn install(
        page: Arc<dyn Page>,
        settings: &dyn SettingsStore,
        keymap: KeyMap,
        factory: CommandFactory,
    ) -> Result<Option<Self>, ContentError> {
        let options = settings.load_options().await?;
        let filter = SiteFilter::new(&options.disabled_site_regexes);
        let location = page.location();
        if filter.is_disabled(&location) {
            info!(url = %location, "Navel is disabled for this site");
            return Ok(None);
        }

        let dispatch = Arc::new(Dispatch {
            keymap,
            factory,
            runtime: Handle::current(),
            running: Mutex::new(None),
        });
        let subscription = Subscription::register(
            &page,
            Arc::new(KeyListener {
                dispatch: Arc::clone(&dispatch),
            }),
        );

        info!(url = %location, "Navel installed");
        Ok(Some(Self {
            dispatch,
            subscription,
        }))
    }

    /// Kind of the most recently started command, if it is still running.
    pub fn active_command(&self) -> Option<CommandKind> {
        self.dispatch
            .running
            .lock()
            .as_ref()
            .filter(|running| !running.task.is_finished())
            .map(|running| running.kind)
    }

    /// Wait for the most recently started command to finish.
    pub async fn settle(&self) {
        let running = self.dispatch.running.lock().take();
        if let Some(running) = running {
            if let Err(e) = running.task.await {
                warn!(command = %running.kind, error = %e, "Command task ended abnormally");
            }
        }
    }

    /// Cancel the running command, wait for it, and remove the listener.
    pub async fn shutdown(mut self) {
        self.subscription.unsubscribe();
        let running = self.dispatch.running.lock().take();
        if let Some(running) = running {
            running.token.cancel();
            if let Err(e) = running.task.await {
                warn!(command = %running.kind, error = %e, "Command task ended abnormally");
            }
        }
        debug!("Navel uninstalled");
    }
}
