//! Application launch.

use std::process::Stdio;

use tokio::process::Command;
use tracing::info;

use frankie_protocols::error::AutomationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Linux
        }
    }
}

/// Program and arguments that launch (or focus) `app`.
pub fn launch_command(platform: Platform, app: &str) -> Vec<String> {
    let app = app.trim();
    match platform {
        Platform::MacOs => vec!["open".into(), "-a".into(), app.into()],
        Platform::Windows => vec![
            "cmd".into(),
            "/C".into(),
            "start".into(),
            String::new(),
            app.into(),
        ],
        Platform::Linux => {
            let binary = app
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-")
                .to_lowercase();
            vec![binary]
        }
    }
}

/// Launch `app`. On macOS and Windows the launcher exits once the app is
/// up; on Linux the app itself is spawned and left running.
pub async fn launch_app(platform: Platform, app: &str) -> Result<(), AutomationError> {
    let launch_error = |reason: String| AutomationError::AppLaunch {
        app: app.to_string(),
        reason,
    };
    if app.trim().is_empty() {
        return Err(launch_error("empty application name".to_string()));
    }

    let argv = launch_command(platform, app);
    let Some((program, args)) = argv.split_first() else {
        return Err(launch_error("no launcher".to_string()));
    };
    info!("Launching {} via {}", app, program);

    let mut command = Command::new(program);
    command.args(args).stdin(Stdio::null());

    if platform == Platform::Linux {
        command.stdout(Stdio::null()).stderr(Stdio::null());
        command.spawn().map_err(|e| launch_error(e.to_string()))?;
        return Ok(());
    }

    let output = command
        .output()
        .await
        .map_err(|e| launch_error(e.to_string()))?;
    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(launch_error(if stderr.is_empty() {
            format!("launcher exited with {}", output.status)
        } else {
            stderr
        }))
    }
}
