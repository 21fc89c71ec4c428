//! Shared prompt primitives
//!
//! Conventions:
//! - Prompts: lowercase with a trailing `> `
//! - Feedback: printed as returned by the command, no decoration

use anyhow::Result;
use inquire::{ui::RenderConfig, InquireError, Text};

pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// Reads one line. `None` on Esc or Ctrl-C.
pub fn read_line(prompt: &str) -> Result<Option<String>> {
    match Text::new(prompt)
        .with_render_config(minimal_render_config())
        .prompt_skippable()
    {
        Ok(line) => Ok(line),
        Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
