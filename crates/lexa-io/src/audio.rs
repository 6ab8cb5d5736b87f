use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::Command;

/// Plays pronunciation clips through an external player process.
///
/// The player fetches the URL itself (mpv and ffplay both stream HTTP);
/// its stdio is discarded so it cannot scribble over the session.
pub struct AudioPlayer {
    program: String,
    args: Vec<String>,
}

impl AudioPlayer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Runs the player to completion on one clip.
    pub async fn play(&self, url: &str) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .with_context(|| format!("failed to launch {}", self.program))?;

        if !status.success() {
            anyhow::bail!("{} exited with {status}", self.program);
        }

        Ok(())
    }
}
