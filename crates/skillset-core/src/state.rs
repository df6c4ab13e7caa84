use crate::error::Result;
use crate::paths;
use crate::types::Tool;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bookkeeping that survives across runs, stored at `.skillset/state.yaml`.
/// Separate from config so user settings never churn on routine commands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct State {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_tool: Option<Tool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_check: Option<DateTime<Utc>>,
}

impl State {
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = paths::state_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let state: State = serde_yaml::from_str(&data)?;
        Ok(state)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::state_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn record_install(&mut self, tool: Tool) {
        self.last_used_tool = Some(tool);
    }

    pub fn record_update_check(&mut self) {
        self.last_update_check = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_state_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let state = State::load_or_default(dir.path()).unwrap();
        assert!(state.last_used_tool.is_none());
        assert!(state.last_update_check.is_none());
    }

    #[test]
    fn roundtrip_after_install_and_update() {
        let dir = TempDir::new().unwrap();
        let mut state = State::default();
        state.record_install(Tool::Copilot);
        state.record_update_check();
        state.save(dir.path()).unwrap();

        let loaded = State::load_or_default(dir.path()).unwrap();
        assert_eq!(loaded.last_used_tool, Some(Tool::Copilot));
        assert!(loaded.last_update_check.is_some());
    }
}
