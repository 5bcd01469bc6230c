//! Subprocess invocation of the chip-tool controller

use tokio::process::Command;
use tracing::{error, info};

/// Result of one chip-tool invocation.
///
/// `output` is combined stdout+stderr; chip-tool interleaves its
/// diagnostics across both streams and nothing here depends on which
/// stream a line came from.
#[derive(Debug, Clone)]
pub struct CommissionOutcome {
    pub success: bool,
    pub output: String,
}

/// Launches chip-tool for pairing and unpairing.
///
/// The storage directory is owned entirely by chip-tool: it holds the
/// controller's fabric state and is never parsed here. Invocations block
/// until the subprocess exits; device discovery can take several seconds
/// and no timeout is imposed.
#[derive(Debug, Clone)]
pub struct Commissioner {
    chip_tool: String,
    storage_dir: String,
}

impl Commissioner {
    pub fn new(chip_tool: impl Into<String>, storage_dir: impl Into<String>) -> Self {
        Self {
            chip_tool: chip_tool.into(),
            storage_dir: storage_dir.into(),
        }
    }

    pub fn chip_tool(&self) -> &str {
        &self.chip_tool
    }

    /// Commission a device by pairing code.
    ///
    /// Runs `chip-tool pairing code <node_id> <code> --storage-directory <dir>`.
    pub async fn pair(&self, node_id: u64, code: &str) -> CommissionOutcome {
        info!("chip-tool: pairing node {} by code", node_id);
        self.run(&[
            "pairing",
            "code",
            &node_id.to_string(),
            code,
            "--storage-directory",
            &self.storage_dir,
        ])
        .await
    }

    /// Remove a device from the controller's fabric.
    ///
    /// Runs `chip-tool pairing unpair <node_id> --storage-directory <dir>`.
    pub async fn unpair(&self, node_id: u64) -> CommissionOutcome {
        info!("chip-tool: unpairing node {}", node_id);
        self.run(&[
            "pairing",
            "unpair",
            &node_id.to_string(),
            "--storage-directory",
            &self.storage_dir,
        ])
        .await
    }

    async fn run(&self, args: &[&str]) -> CommissionOutcome {
        let result = Command::new(&self.chip_tool).args(args).output().await;

        match result {
            Ok(output) => {
                let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
                combined.push_str(&String::from_utf8_lossy(&output.stderr));
                CommissionOutcome {
                    success: output.status.success(),
                    output: combined,
                }
            }
            Err(e) => {
                error!("failed to launch {}: {}", self.chip_tool, e);
                CommissionOutcome {
                    success: false,
                    output: format!("failed to launch {}: {}", self.chip_tool, e),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    // A stand-in chip-tool that echoes some output and exits as told.
    fn fake_chip_tool(dir: &TempDir, body: &str) -> String {
        let path = dir.path().join("chip-tool");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "#!/bin/sh\n{}", body).unwrap();
        let mut perms = file.metadata().unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn test_pair_success_on_zero_exit() {
        let dir = TempDir::new().unwrap();
        let tool = fake_chip_tool(&dir, "echo commissioning complete; exit 0");
        let commissioner = Commissioner::new(tool, dir.path().to_string_lossy());

        let outcome = commissioner.pair(42, "MT:ABC123").await;
        assert!(outcome.success);
        assert!(outcome.output.contains("commissioning complete"));
    }

    #[tokio::test]
    async fn test_failure_captures_both_streams() {
        let dir = TempDir::new().unwrap();
        let tool = fake_chip_tool(&dir, "echo on stdout; echo on stderr >&2; exit 1");
        let commissioner = Commissioner::new(tool, dir.path().to_string_lossy());

        let outcome = commissioner.unpair(42).await;
        assert!(!outcome.success);
        assert!(outcome.output.contains("on stdout"));
        assert!(outcome.output.contains("on stderr"));
    }

    #[tokio::test]
    async fn test_missing_binary_is_failed_outcome() {
        let dir = TempDir::new().unwrap();
        let commissioner = Commissioner::new(
            dir.path().join("no-such-tool").to_string_lossy(),
            dir.path().to_string_lossy(),
        );

        let outcome = commissioner.pair(1, "code").await;
        assert!(!outcome.success);
        assert!(outcome.output.contains("failed to launch"));
    }
}
