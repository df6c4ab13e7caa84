use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillsetError {
    #[error("unknown tool '{0}': expected claude-code, cursor, copilot, or other")]
    UnknownTool(String),

    #[error("unknown domain: {0}")]
    UnknownDomain(String),

    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("invalid skill id '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidSkillId(String),

    #[error("duplicate skill id in table: {0}")]
    DuplicateSkillId(String),

    #[error("invalid config key: {0}")]
    InvalidConfigKey(String),

    #[error("skill not installed: {0}")]
    NotInstalled(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkillsetError>;
