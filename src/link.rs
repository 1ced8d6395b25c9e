//! Opening deep-links for the secondary channel.
//!
//! Opening is fire-and-forget: the caller never waits for, or checks, what the
//! external application does with the link.

use std::process::Stdio;
use tokio::process::Command;
use tracing::{info, warn};

/// Hands a URL to whatever should display it.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str);
}

/// Only records the link in the logs. Used by headless runs and the demo.
#[derive(Debug, Default, Clone)]
pub struct TracingLinkOpener;

impl LinkOpener for TracingLinkOpener {
    fn open(&self, url: &str) {
        info!(%url, "Deep link ready");
    }
}

/// Launches the platform URL handler (`xdg-open`, `open`, or `start`) without waiting for it.
///
/// The child is reaped on a background task, so this must be called inside a Tokio runtime.
#[derive(Debug, Default, Clone)]
pub struct SystemLinkOpener;

impl SystemLinkOpener {
    fn command(url: &str) -> Command {
        let mut cmd = if cfg!(target_os = "macos") {
            Command::new("open")
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]);
            cmd
        } else {
            Command::new("xdg-open")
        };
        cmd.arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) {
        match Self::command(url).spawn() {
            Ok(mut child) => {
                info!(%url, "Deep link opened");
                tokio::spawn(async move {
                    if let Err(e) = child.wait().await {
                        warn!(error = %e, "URL handler did not exit cleanly");
                    }
                });
            }
            Err(e) => warn!(error = %e, %url, "Could not launch URL handler"),
        }
    }
}
