//! Quick pick drawn inline on the controlling terminal.
//!
//! The list is rendered on stderr just below the cursor and erased again once
//! the user picks or dismisses it, so stdout stays free for `--json` output.
//! Input is read on the blocking pool; raw mode is restored by a drop guard
//! even if rendering fails halfway.
use async_trait::async_trait;
use crossterm::{
    cursor,
    event::{self, Event},
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, ClearType},
};
use std::io::{self, Write};
use std::path::PathBuf;

use super::quick_pick::{QuickPickState, Step};
use super::{OpenDialogOptions, PickerHost, QuickPickOptions};
use crate::{Error, Result};

const MAX_ROWS: usize = 12;

/// `PickerHost` backed by the terminal for the list and the OS for the dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPicker;

impl TerminalPicker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl PickerHost for TerminalPicker {
    async fn show_quick_pick(
        &self,
        items: &[String],
        options: &QuickPickOptions,
    ) -> Result<Option<String>> {
        let items = items.to_vec();
        let placeholder = options.placeholder.clone();
        tokio::task::spawn_blocking(move || run_quick_pick(items, &placeholder))
            .await
            .map_err(|e| Error::Prompt(format!("Quick pick task failed: {}", e)))?
            .map_err(|e| Error::Prompt(e.to_string()))
    }

    #[cfg(feature = "native-dialog")]
    async fn show_open_dialog(&self, options: &OpenDialogOptions) -> Result<Option<PathBuf>> {
        Ok(super::native::show_open_dialog(options).await)
    }

    #[cfg(not(feature = "native-dialog"))]
    async fn show_open_dialog(&self, _options: &OpenDialogOptions) -> Result<Option<PathBuf>> {
        Err(Error::Dialog(
            "built without native dialog support".to_string(),
        ))
    }
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("Failed to leave raw mode: {}", e);
        }
        if let Err(e) = restore_cursor(&mut io::stderr()) {
            log::warn!("Failed to show cursor: {}", e);
        }
    }
}

fn restore_cursor(out: &mut impl Write) -> io::Result<()> {
    queue!(out, cursor::Show)?;
    out.flush()
}

fn run_quick_pick(items: Vec<String>, placeholder: &str) -> io::Result<Option<String>> {
    let mut state = QuickPickState::new(items);
    let mut out = io::stderr();
    let _raw = RawModeGuard::enable()?;
    queue!(out, cursor::Hide)?;

    let mut drawn = 0u16;
    let result = loop {
        drawn = render(&mut out, &state, placeholder, drawn)?;
        if let Event::Key(key) = event::read()? {
            match state.handle_key(key) {
                Step::Continue => {}
                Step::Picked(label) => break Some(label),
                Step::Cancelled => break None,
            }
        }
    };

    erase(&mut out, drawn)?;
    out.flush()?;
    Ok(result)
}

/// Redraws the prompt in place and returns the number of lines it occupies.
fn render(
    out: &mut impl Write,
    state: &QuickPickState,
    placeholder: &str,
    drawn: u16,
) -> io::Result<u16> {
    let width = terminal::size().map(|(w, _)| w as usize).unwrap_or(80);
    erase(out, drawn)?;

    if state.filter().is_empty() {
        queue!(
            out,
            SetAttribute(Attribute::Dim),
            Print(clip(placeholder, width)),
            SetAttribute(Attribute::Reset),
        )?;
    } else {
        queue!(out, Print(clip(&format!("> {}", state.filter()), width)))?;
    }
    queue!(out, Print("\r\n"))?;
    let mut lines = 1u16;

    let labels: Vec<&str> = state.visible_items().collect();
    for row in state.window(MAX_ROWS) {
        let label = clip(labels[row], width.saturating_sub(2));
        if row == state.selected() {
            queue!(
                out,
                SetAttribute(Attribute::Reverse),
                Print(format!("> {}", label)),
                SetAttribute(Attribute::Reset),
            )?;
        } else {
            queue!(out, Print(format!("  {}", label)))?;
        }
        queue!(out, Print("\r\n"))?;
        lines += 1;
    }

    out.flush()?;
    Ok(lines)
}

fn erase(out: &mut impl Write, drawn: u16) -> io::Result<()> {
    if drawn > 0 {
        queue!(out, cursor::MoveToPreviousLine(drawn))?;
    }
    queue!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::FromCursorDown)
    )?;
    Ok(())
}

/// Truncates to `width` characters so no row wraps and throws off `erase`.
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(1);
    let mut clipped: String = text.chars().take(keep).collect();
    clipped.push('…');
    clipped
}
