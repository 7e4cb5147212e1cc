use std::sync::Arc;

use async_trait::async_trait;
use navel_config::ScrollConfig;
use tokio_util::sync::CancellationToken;

use super::{Command, CommandKind};
use crate::error::ContentError;
use crate::page::{Page, ScrollBehavior};

/// Vertical scroll by a configured distance.
pub struct ScrollCommand {
    page: Arc<dyn Page>,
    kind: CommandKind,
    dy: f64,
    behavior: ScrollBehavior,
}

impl ScrollCommand {
    pub fn down(page: Arc<dyn Page>, config: &ScrollConfig) -> Self {
        Self {
            page,
            kind: CommandKind::ScrollDown,
            dy: config.down_px,
            behavior: behavior(config),
        }
    }

    pub fn up(page: Arc<dyn Page>, config: &ScrollConfig) -> Self {
        Self {
            page,
            kind: CommandKind::ScrollUp,
            dy: -config.up_px,
            behavior: behavior(config),
        }
    }
}

fn behavior(config: &ScrollConfig) -> ScrollBehavior {
    if config.smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Instant
    }
}

#[async_trait]
impl Command for ScrollCommand {
    fn kind(&self) -> CommandKind {
        self.kind
    }

    async fn execute(&self, _token: Option<CancellationToken>) -> Result<(), ContentError> {
        self.page.scroll_by(0.0, self.dy, self.behavior);
        Ok(())
    }
}
