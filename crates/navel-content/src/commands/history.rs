use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::{Command, CommandKind};
use crate::error::ContentError;
use crate::page::Page;

/// Back or forward one step in session history.
pub struct HistoryCommand {
    page: Arc<dyn Page>,
    delta: i64,
}

impl HistoryCommand {
    pub fn back(page: Arc<dyn Page>) -> Self {
        Self { page, delta: -1 }
    }

    pub fn forward(page: Arc<dyn Page>) -> Self {
        Self { page, delta: 1 }
    }
}

#[async_trait]
impl Command for HistoryCommand {
    fn kind(&self) -> CommandKind {
        if self.delta < 0 {
            CommandKind::GoBack
        } else {
            CommandKind::GoForward
        }
    }

    async fn execute(&self, _token: Option<CancellationToken>) -> Result<(), ContentError> {
        debug!(delta = self.delta, "Navigating history");
        self.page.history_go(self.delta);
        Ok(())
    }
}
