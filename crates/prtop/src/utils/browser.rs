//! Browser utilities
//!
//! Functions for opening URLs in the system's default browser.

/// Open a URL in the system's default browser
///
/// Uses platform-specific commands:
/// - macOS: `open`
/// - Windows: `cmd /C start`
/// - everything else: `xdg-open`
///
/// The opener is detached; only a failure to start it is logged.
pub async fn open_url(url: String) {
    let result = opener_command(&url).spawn();

    match result {
        Ok(_) => log::debug!("Opened {} in browser", url),
        Err(e) => log::error!("Failed to open URL in browser: {}", e),
    }
}

fn opener_command(url: &str) -> tokio::process::Command {
    let mut command = if cfg!(target_os = "macos") {
        tokio::process::Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut command = tokio::process::Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else {
        tokio::process::Command::new("xdg-open")
    };
    command
        .arg(url)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null());
    command
}
