use std::sync::Arc;

use async_trait::async_trait;
use navel_protocols::BackgroundPort;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::{Command, CommandKind};
use crate::error::ContentError;
use crate::highlight::{ActionResolver, Activation, HighlightSession, SessionOutcome};
use crate::page::Page;

/// Runs a link-hint session and activates the selected element.
pub struct HighlightLinksCommand {
    page: Arc<dyn Page>,
    port: Arc<dyn BackgroundPort>,
}

impl HighlightLinksCommand {
    pub fn new(page: Arc<dyn Page>, port: Arc<dyn BackgroundPort>) -> Self {
        Self { page, port }
    }

    /// Run one session. The overlay is already gone when the selected
    /// element is activated.
    pub async fn highlight(
        &self,
        token: Option<CancellationToken>,
    ) -> (SessionOutcome, Option<Activation>) {
        info!("Executing highlight links command");
        let outcome = HighlightSession::new(Arc::clone(&self.page))
            .run(token)
            .await;

        let activation = match &outcome {
            SessionOutcome::Selected {
                target,
                open_in_new_tab,
                ..
            } => Some(
                ActionResolver::new(Arc::clone(&self.page), Arc::clone(&self.port))
                    .resolve(*target, *open_in_new_tab),
            ),
            _ => None,
        };
        (outcome, activation)
    }
}

#[async_trait]
impl Command for HighlightLinksCommand {
    fn kind(&self) -> CommandKind {
        CommandKind::HighlightLinks
    }

    async fn execute(&self, token: Option<CancellationToken>) -> Result<(), ContentError> {
        self.highlight(token).await;
        Ok(())
    }
}
