use std::sync::Arc;

use async_trait::async_trait;
use navel_protocols::{BackgroundCommand, BackgroundPort, MoveDirection};
use tokio_util::sync::CancellationToken;

use super::{Command, CommandKind};
use crate::error::ContentError;

/// Asks the privileged executor to duplicate this tab.
pub struct DuplicateTabCommand {
    port: Arc<dyn BackgroundPort>,
}

impl DuplicateTabCommand {
    pub fn new(port: Arc<dyn BackgroundPort>) -> Self {
        Self { port }
    }
}

#[async_trait]
impl Command for DuplicateTabCommand {
    fn kind(&self) -> CommandKind {
        CommandKind::DuplicateTab
    }

    async fn execute(&self, _token: Option<CancellationToken>) -> Result<(), ContentError> {
        self.port.send(&BackgroundCommand::DuplicateTab)?;
        Ok(())
    }
}

/// Asks the privileged executor to move this tab one slot.
pub struct MoveTabCommand {
    port: Arc<dyn BackgroundPort>,
    direction: MoveDirection,
}

impl MoveTabCommand {
    pub fn new(port: Arc<dyn BackgroundPort>, direction: MoveDirection) -> Self {
        Self { port, direction }
    }
}

#[async_trait]
impl Command for MoveTabCommand {
    fn kind(&self) -> CommandKind {
        match self.direction {
            MoveDirection::Left => CommandKind::MoveTabLeft,
            MoveDirection::Right => CommandKind::MoveTabRight,
        }
    }

    async fn execute(&self, _token: Option<CancellationToken>) -> Result<(), ContentError> {
        self.port.send(&BackgroundCommand::move_tab(self.direction))?;
        Ok(())
    }
}
