use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Tool
// ---------------------------------------------------------------------------

/// Supported AI coding assistants. Each tool reads skill files from its own
/// conventional folder in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    ClaudeCode,
    Cursor,
    Copilot,
    Other,
}

impl Tool {
    pub fn all() -> &'static [Tool] {
        &[Tool::ClaudeCode, Tool::Cursor, Tool::Copilot, Tool::Other]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tool::ClaudeCode => "claude-code",
            Tool::Cursor => "cursor",
            Tool::Copilot => "copilot",
            Tool::Other => "other",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Tool::ClaudeCode => "Claude Code",
            Tool::Cursor => "Cursor",
            Tool::Copilot => "GitHub Copilot",
            Tool::Other => "Other AI Tools",
        }
    }

    /// Default skill folder relative to the workspace root.
    /// "other" tools share the universal .claude/skills format.
    pub fn folder(self) -> &'static str {
        match self {
            Tool::ClaudeCode | Tool::Other => ".claude/skills",
            Tool::Cursor => ".cursor/rules",
            Tool::Copilot => ".github/skills",
        }
    }

    /// Cursor keeps flat rule files; the others use a SKILL.md per directory.
    pub fn uses_flat_files(self) -> bool {
        matches!(self, Tool::Cursor)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tool {
    type Err = crate::error::SkillsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claude-code" => Ok(Tool::ClaudeCode),
            "cursor" => Ok(Tool::Cursor),
            "copilot" => Ok(Tool::Copilot),
            "other" => Ok(Tool::Other),
            _ => Err(crate::error::SkillsetError::UnknownTool(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Display-name formatting
// ---------------------------------------------------------------------------

/// Format a kebab-case skill id into a Title Case display name,
/// e.g. "git-hygiene-enforcer" -> "Git Hygiene Enforcer".
pub fn format_skill_name(skill_id: &str) -> String {
    skill_id
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
