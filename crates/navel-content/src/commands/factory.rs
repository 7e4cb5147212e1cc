use std::sync::Arc;

use navel_config::ScrollConfig;
use navel_logging::LogBuffer;
use navel_protocols::{BackgroundPort, MoveDirection};

use super::{
    Command, CommandKind, DumpLogsCommand, DuplicateTabCommand, HighlightLinksCommand,
    HistoryCommand, LogSink, MoveTabCommand, ScrollCommand,
};
use crate::page::Page;

/// Everything commands need from their environment.
#[derive(Clone)]
pub struct CommandContext {
    pub page: Arc<dyn Page>,
    pub port: Arc<dyn BackgroundPort>,
    pub logs: Arc<LogBuffer>,
    pub log_sink: LogSink,
    pub scroll: ScrollConfig,
}

/// Builds a fresh command for each invocation.
#[derive(Clone)]
pub struct CommandFactory {
    context: CommandContext,
}

impl CommandFactory {
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    pub fn create(&self, kind: CommandKind) -> Box<dyn Command> {
        let ctx = &self.context;
        match kind {
            CommandKind::HighlightLinks => Box::new(HighlightLinksCommand::new(
                Arc::clone(&ctx.page),
                Arc::clone(&ctx.port),
            )),
            CommandKind::DumpLogs => Box::new(DumpLogsCommand::new(
                Arc::clone(&ctx.logs),
                ctx.log_sink.clone(),
            )),
            CommandKind::DuplicateTab => Box::new(DuplicateTabCommand::new(Arc::clone(&ctx.port))),
            CommandKind::GoBack => Box::new(HistoryCommand::back(Arc::clone(&ctx.page))),
            CommandKind::GoForward => Box::new(HistoryCommand::forward(Arc::clone(&ctx.page))),
            CommandKind::ScrollDown => {
                Box::new(ScrollCommand::down(Arc::clone(&ctx.page), &ctx.scroll))
            }
            CommandKind::ScrollUp => Box::new(ScrollCommand::up(Arc::clone(&ctx.page), &ctx.scroll)),
            CommandKind::MoveTabLeft => Box::new(MoveTabCommand::new(
                Arc::clone(&ctx.port),
                MoveDirection::Left,
            )),
            CommandKind::MoveTabRight => Box::new(MoveTabCommand::new(
                Arc::clone(&ctx.port),
                MoveDirection::Right,
            )),
        }
    }
}
