//! Interactive gate: block on a raw key press between listing and renaming.

use crate::report;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use eyre::Result;

/// Operator decision at the gate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Proceed,
    Abort,
}

/// Key mapping: Enter confirms, Esc cancels, anything else keeps waiting.
fn verdict_for(code: KeyCode) -> Option<Verdict> {
    match code {
        KeyCode::Enter => Some(Verdict::Proceed),
        KeyCode::Esc => Some(Verdict::Abort),
        _ => None,
    }
}

/// Prompt, then block on raw single-key input until Enter or Esc.
///
/// Raw mode is restored before returning on both paths.
pub fn await_confirmation() -> Result<Verdict> {
    report::gate_prompt();

    enable_raw_mode()?;
    let verdict = wait_for_key();
    disable_raw_mode()?;

    let verdict = verdict?;
    match verdict {
        Verdict::Proceed => report::gate_proceed(),
        Verdict::Abort => report::gate_abort(),
    }

    Ok(verdict)
}

fn wait_for_key() -> Result<Verdict> {
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(verdict) = verdict_for(key.code)
        {
            return Ok(verdict);
        }
    }
}
