use arboard::Clipboard;

/// Writes `text` to the system clipboard.
pub fn copy_text(text: &str) -> Result<(), anyhow::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
