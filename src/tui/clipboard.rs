//! System clipboard access for the copy-title shortcut

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Put `text` on the system clipboard
///
/// Fails on headless Linux with no display server.
pub fn copy_text(text: &str) -> Result<()> {
    Clipboard::new()
        .context("Failed to access clipboard")?
        .set_text(text)
        .context("Failed to set clipboard text")
}
