use crate::error::Result;
use crate::paths;
use crate::types::Tool;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Workspace-level settings, stored at `.skillset/config.yaml`.
/// A missing file means defaults; saving creates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_tool")]
    pub default_tool: Tool,
    /// Custom install folder overriding the tool's conventional one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_folder: Option<String>,
    #[serde(default = "default_domains")]
    pub default_domains: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub favorites: Vec<String>,
}

fn default_version() -> u32 {
    1
}

fn default_tool() -> Tool {
    Tool::ClaudeCode
}

fn default_domains() -> Vec<String> {
    vec![
        "foundation".to_string(),
        "backend".to_string(),
        "frontend".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            default_tool: default_tool(),
            default_folder: None,
            default_domains: default_domains(),
            favorites: Vec::new(),
        }
    }
}

impl Config {
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn is_favorite(&self, skill_id: &str) -> bool {
        self.favorites.iter().any(|f| f == skill_id)
    }

    /// Flip a skill's favorite status. Returns true if it is now a favorite.
    pub fn toggle_favorite(&mut self, skill_id: &str) -> bool {
        if let Some(pos) = self.favorites.iter().position(|f| f == skill_id) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(skill_id.to_string());
            true
        }
    }

    /// Apply a `config set` assignment. Domains are a comma-separated list;
    /// an empty folder value clears the override.
    pub fn set_key(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-tool" => {
                self.default_tool = value.parse()?;
            }
            "default-folder" => {
                let trimmed = value.trim();
                self.default_folder = if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                };
            }
            "default-domains" => {
                self.default_domains = value
                    .split(',')
                    .map(|d| d.trim().to_string())
                    .filter(|d| !d.is_empty())
                    .collect();
            }
            _ => return Err(crate::error::SkillsetError::InvalidConfigKey(key.to_string())),
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
