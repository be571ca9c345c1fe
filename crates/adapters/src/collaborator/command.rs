// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborator backed by an external program.
//!
//! Each request spawns the program, writes the instruction as one JSON line
//! to stdin, and reads the reply from the last non-empty stdout line. Earlier
//! stdout lines are treated as agent chatter and logged at debug level.

use super::{Collaborator, CollaboratorError, CollaboratorResponse, Instruction};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone)]
pub struct CommandCollaborator {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl CommandCollaborator {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new(), cwd: None }
    }

    /// Split a whitespace separated command line (`"agent --json"`).
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self { program, args: parts.collect(), cwd: None })
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

#[async_trait]
impl Collaborator for CommandCollaborator {
    async fn request(
        &self,
        instruction: &Instruction,
    ) -> Result<CollaboratorResponse, CollaboratorError> {
        let payload = serde_json::to_string(instruction)
            .map_err(|e| CollaboratorError::Protocol(e.to_string()))?;

        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Dropping the future (timeout, shutdown) must not leave the agent running
            .kill_on_drop(true);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        tracing::debug!(
            program = %self.program,
            action = instruction.action(),
            project = %instruction.project_id,
            "spawning collaborator"
        );
        let mut child = cmd.spawn().map_err(CollaboratorError::Spawn)?;

        if let Some(mut stdin) = child.stdin.take() {
            // A collaborator may answer without reading its input
            match write_payload(&mut stdin, &payload).await {
                Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => return Err(e.into()),
                _ => {}
            }
        }

        let output = child.wait_with_output().await?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        if !output.status.success() {
            return Err(CollaboratorError::Exited {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let mut lines = stdout.lines().map(str::trim).filter(|l| !l.is_empty());
        let reply = lines.next_back().ok_or_else(|| {
            CollaboratorError::Protocol("collaborator produced no output".to_string())
        })?;
        for chatter in lines {
            tracing::debug!(action = instruction.action(), line = chatter, "collaborator output");
        }

        serde_json::from_str(reply).map_err(|e| CollaboratorError::Protocol(e.to_string()))
    }
}

async fn write_payload(
    stdin: &mut tokio::process::ChildStdin,
    payload: &str,
) -> std::io::Result<()> {
    stdin.write_all(payload.as_bytes()).await?;
    stdin.write_all(b"\n").await?;
    stdin.shutdown().await
}
