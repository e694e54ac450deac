use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use std::{fs, thread};

use crate::transport::AgentChannel;

const POLL_INTERVAL: Duration = Duration::from_millis(20);
const MAP_INPUT_FILE: &str = "MAP.INP";
const AGENT_OUTPUT_FILE: &str = "ACT.OUT";

/// The default, subprocess-based [`AgentChannel`]: writes `MAP.INP` into
/// the agent's directory, runs the agent binary with that file as its
/// sole argument and the directory as cwd, waits up to a timeout, then
/// reads `ACT.OUT`.
pub struct JudgeProcessChannel {
    agent_paths: Vec<PathBuf>,
}

impl JudgeProcessChannel {
    pub fn new(agent_paths: Vec<PathBuf>) -> JudgeProcessChannel {
        JudgeProcessChannel { agent_paths }
    }
}

impl AgentChannel for JudgeProcessChannel {
    fn ask(&mut self, agent_index: usize, input: &str, timeout: Duration) -> String {
        let agent_path = &self.agent_paths[agent_index];
        let agent_dir = agent_path.parent().unwrap_or_else(|| Path::new("."));

        if let Err(e) = fs::write(agent_dir.join(MAP_INPUT_FILE), input) {
            log::warn!("agent {agent_index}: failed to write {MAP_INPUT_FILE}: {e}");
            return String::new();
        }

        let mut child = match Command::new(agent_path)
            .arg(MAP_INPUT_FILE)
            .current_dir(agent_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                log::warn!("agent {agent_index}: failed to spawn {}: {e}", agent_path.display());
                return String::new();
            }
        };

        let deadline = Instant::now() + timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break Some(status),
                Ok(None) if Instant::now() >= deadline => {
                    log::warn!("agent {agent_index}: timed out after {timeout:?}, killing");
                    let _ = child.kill();
                    let _ = child.wait();
                    break None;
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    log::warn!("agent {agent_index}: error waiting on child: {e}");
                    break None;
                }
            }
        };

        match status {
            Some(status) if status.success() => {}
            Some(status) => {
                log::warn!("agent {agent_index}: exited with {status}");
                return String::new();
            }
            None => return String::new(),
        }

        match fs::read_to_string(agent_dir.join(AGENT_OUTPUT_FILE)) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!("agent {agent_index}: could not read {AGENT_OUTPUT_FILE}: {e}");
                String::new()
            }
        }
    }
}
