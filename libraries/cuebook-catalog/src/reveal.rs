//! Best-effort file reveal in the host file manager

use std::path::Path;
use std::process::Command;

/// Ask the host shell to reveal `path` in its file manager.
///
/// Side-effecting and best-effort only: spawn failures are logged and
/// swallowed, since this is not part of the parsing core's correctness
/// surface.
pub fn open_file_location(path: &Path) {
    let result = spawn_reveal(path);
    if let Err(error) = result {
        tracing::warn!(?error, path = %path.display(), "failed to open file location");
    }
}

#[cfg(target_os = "macos")]
fn spawn_reveal(path: &Path) -> std::io::Result<()> {
    Command::new("open").arg("-R").arg(path).spawn()?;
    Ok(())
}

#[cfg(target_os = "windows")]
fn spawn_reveal(path: &Path) -> std::io::Result<()> {
    Command::new("explorer")
        .arg(format!("/select,{}", path.display()))
        .spawn()?;
    Ok(())
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn spawn_reveal(path: &Path) -> std::io::Result<()> {
    // No portable "select in file manager" on other platforms; open the
    // containing directory instead.
    let target = path.parent().unwrap_or(path);
    Command::new("xdg-open").arg(target).spawn()?;
    Ok(())
}
