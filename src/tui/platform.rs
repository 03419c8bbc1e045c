//! Desktop integration: clipboard writes and piping text to a share command.

use std::io::Write;
use std::process::{Command, Stdio};

use cli_clipboard::{ClipboardContext, ClipboardProvider};

/// Copy text to the system clipboard.
pub fn copy_text(text: &str) -> Result<(), String> {
    let mut ctx = ClipboardContext::new().map_err(|e| e.to_string())?;
    ctx.set_contents(text.to_string()).map_err(|e| e.to_string())
}

/// Pipe text to a user-configured share command via `sh -c`.
///
/// The command's exit status is ignored: share targets commonly exit
/// nonzero when the user cancels the picker, and the text was already
/// delivered on stdin by then.
pub fn share_text(command: &str, text: &str) -> Result<(), String> {
    let mut child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("failed to spawn '{command}': {e}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| e.to_string())?;
    }
    child.wait().map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_pipes_text_to_the_command() {
        let dir = std::env::temp_dir().join("moodring-share-test");
        std::fs::create_dir_all(&dir).unwrap();
        let out = dir.join("shared.txt");
        let command = format!("cat > {}", out.display());

        share_text(&command, "Positive — 92%\nMostly upbeat words.").unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        std::fs::remove_file(&out).ok();
        assert_eq!(written, "Positive — 92%\nMostly upbeat words.");
    }

    #[test]
    fn share_ignores_nonzero_exit() {
        assert!(share_text("cat > /dev/null; exit 3", "cancelled").is_ok());
    }
}
