use assert_cmd::Command;
use serde_json::Value;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitStatus;
use tempfile::TempDir;

/// Temporary working directory for driving `sg` end to end.
pub struct SgWorkspace {
    pub temp_dir: TempDir,
    pub root: PathBuf,
    pub data_dir: PathBuf,
}

impl SgWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir.path().to_path_buf();
        let data_dir = root.join(".shortcuts");
        Self {
            temp_dir,
            root,
            data_dir,
        }
    }

    /// Workspace with `sg init` already run.
    pub fn initialized() -> Self {
        let workspace = Self::new();
        run_ok(&workspace, ["init"], "init");
        workspace
    }

    pub fn slot_path(&self) -> PathBuf {
        self.data_dir.join("bookmarks.json")
    }
}

pub struct SgOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl SgOutput {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout).expect("stdout is JSON")
    }
}

pub fn run_sg<I, S>(workspace: &SgWorkspace, args: I, label: &str) -> SgOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::cargo_bin("sg")
        .expect("sg binary")
        .current_dir(&workspace.root)
        .env_remove("SHORTCUT_GRID_DIR")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run sg: {e}"));

    SgOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Run `sg` and fail the test if it exits non-zero.
pub fn run_ok<I, S>(workspace: &SgWorkspace, args: I, label: &str) -> SgOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = run_sg(workspace, args, label);
    assert!(
        output.status.success(),
        "{label} failed\nstdout:\n{}\nstderr:\n{}",
        output.stdout,
        output.stderr
    );
    output
}

/// Add a bookmark and return its generated ID.
pub fn add(workspace: &SgWorkspace, title: &str, url: &str) -> String {
    let output = run_ok(workspace, ["add", title, url, "--json"], "add");
    output.json()["bookmark"]["id"]
        .as_str()
        .expect("id in add output")
        .to_string()
}

/// IDs in grid order.
pub fn list_ids(workspace: &SgWorkspace) -> Vec<String> {
    let output = run_ok(workspace, ["list", "--json"], "list");
    output
        .json()
        .as_array()
        .expect("list output is an array")
        .iter()
        .map(|row| row["id"].as_str().expect("row id").to_string())
        .collect()
}
