//! `<stem>.provenance.json` next to each sampling output.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Everything needed to rerun a sampling job: code revision, inputs, and a
/// short summary of what came out.
#[derive(Debug, Serialize)]
pub struct Sidecar {
    code_rev: String,
    stripcut_version: &'static str,
    params: Value,
    summary: Value,
    outputs: Vec<String>,
}

impl Sidecar {
    pub fn new(params: Value) -> Self {
        Self {
            code_rev: git_rev(),
            stripcut_version: stripcut::VERSION,
            params,
            summary: Value::Null,
            outputs: Vec::new(),
        }
    }

    pub fn summary(mut self, summary: Value) -> Self {
        self.summary = summary;
        self
    }

    /// Record `artifact` as the output and write the sidecar beside it.
    pub fn write_next_to(mut self, artifact: &Path) -> Result<PathBuf> {
        self.outputs = vec![artifact.display().to_string()];
        let path = sidecar_path(artifact);
        std::fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "polygons".into(), |s| s.to_string_lossy().into_owned());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|rev| rev.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
