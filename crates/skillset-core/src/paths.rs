use crate::error::{Result, SkillsetError};
use crate::types::Tool;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const SKILLSET_DIR: &str = ".skillset";
pub const CONFIG_FILE: &str = ".skillset/config.yaml";
pub const STATE_FILE: &str = ".skillset/state.yaml";

pub const SKILL_FILE: &str = "SKILL.md";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn skillset_dir(root: &Path) -> PathBuf {
    root.join(SKILLSET_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn state_path(root: &Path) -> PathBuf {
    root.join(STATE_FILE)
}

/// Folder a tool's skills are installed into, honoring an optional override.
pub fn tool_folder(root: &Path, tool: Tool, folder_override: Option<&str>) -> PathBuf {
    root.join(folder_override.unwrap_or(tool.folder()))
}

/// Path a skill is installed at for the given tool.
/// Cursor keeps flat `<id>.md` rule files; the other tools use `<id>/SKILL.md`.
pub fn skill_install_path(
    root: &Path,
    tool: Tool,
    folder_override: Option<&str>,
    skill_id: &str,
) -> PathBuf {
    let folder = tool_folder(root, tool, folder_override);
    if tool.uses_flat_files() {
        folder.join(format!("{skill_id}.md"))
    } else {
        folder.join(skill_id).join(SKILL_FILE)
    }
}

// ---------------------------------------------------------------------------
// Skill id validation
// ---------------------------------------------------------------------------

static ID_RE: OnceLock<Regex> = OnceLock::new();

fn id_re() -> &'static Regex {
    ID_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

pub fn validate_skill_id(id: &str) -> Result<()> {
    if id.is_empty() || id.len() > 64 || !id_re().is_match(id) {
        return Err(SkillsetError::InvalidSkillId(id.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
