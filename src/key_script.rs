//! Key scripts for `navel simulate`.
//!
//! A script is a whitespace-separated list of steps:
//!
//! - a key value (`s`, `Escape`, `ArrowLeft`) with optional modifier
//!   prefixes `C-` (Ctrl), `S-` (Shift), `M-` (Meta) and `A-` (Alt);
//!   shifted single characters are uppercased, as a browser reports them
//! - `click` or `click:<element>` for a pointer click in the document
//! - `scroll` or `scroll:<px>` for a user scroll

use anyhow::{bail, Context, Result};

use navel_content::page::{ElementId, KeyEvent};

/// Default distance of a bare `scroll` step.
const DEFAULT_SCROLL_PX: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ScriptStep {
    Key(KeyEvent),
    Click(Option<ElementId>),
    Scroll(f64),
}

pub(crate) fn parse(script: &str) -> Result<Vec<ScriptStep>> {
    script.split_whitespace().map(parse_step).collect()
}

fn parse_step(token: &str) -> Result<ScriptStep> {
    if token == "click" {
        return Ok(ScriptStep::Click(None));
    }
    if let Some(id) = token.strip_prefix("click:") {
        let id = id
            .parse()
            .with_context(|| format!("Invalid element index in '{}'", token))?;
        return Ok(ScriptStep::Click(Some(ElementId(id))));
    }
    if token == "scroll" {
        return Ok(ScriptStep::Scroll(DEFAULT_SCROLL_PX));
    }
    if let Some(px) = token.strip_prefix("scroll:") {
        let px = px
            .parse()
            .with_context(|| format!("Invalid scroll distance in '{}'", token))?;
        return Ok(ScriptStep::Scroll(px));
    }

    let mut event = KeyEvent::default();
    let mut rest = token;
    while rest.len() > 2 && rest.as_bytes()[1] == b'-' {
        match &rest[..2] {
            "C-" => event.ctrl = true,
            "S-" => event.shift = true,
            "M-" => event.meta = true,
            "A-" => event.alt = true,
            _ => break,
        }
        rest = &rest[2..];
    }
    if rest.is_empty() {
        bail!("Missing key in '{}'", token);
    }

    event.key = if event.shift && rest.chars().count() == 1 {
        rest.to_uppercase()
    } else {
        rest.to_string()
    };
    Ok(ScriptStep::Key(event))
}
