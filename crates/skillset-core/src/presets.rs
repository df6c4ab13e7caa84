use crate::error::{Result, SkillsetError};

/// A named domain combination for one-command setup.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub domains: &'static [&'static str],
}

const PRESETS: &[Preset] = &[
    Preset {
        id: "full-stack",
        name: "Full Stack Developer",
        description: "Complete setup for building full-stack applications",
        domains: &["foundation", "frontend", "backend", "database", "testing"],
    },
    Preset {
        id: "ai-focused",
        name: "AI Engineer",
        description: "Specialized setup for AI and ML engineering",
        domains: &["foundation", "ai-engineering", "backend", "performance"],
    },
    Preset {
        id: "frontend-specialist",
        name: "Frontend Specialist",
        description: "UI/UX focused development with modern frameworks",
        domains: &["foundation", "frontend", "testing", "performance"],
    },
    Preset {
        id: "backend-specialist",
        name: "Backend Specialist",
        description: "API and server-side development focus",
        domains: &["foundation", "backend", "database", "security", "testing"],
    },
    Preset {
        id: "devops-engineer",
        name: "DevOps Engineer",
        description: "Infrastructure, CI/CD, and automation focus",
        domains: &["foundation", "cicd", "database", "security", "performance"],
    },
    Preset {
        id: "enterprise-complete",
        name: "Enterprise Complete",
        description: "All domains for comprehensive enterprise development",
        domains: &[
            "foundation",
            "frontend",
            "backend",
            "ai-engineering",
            "architecture",
            "cicd",
            "database",
            "testing",
            "security",
            "performance",
        ],
    },
];

impl Preset {
    pub fn all() -> &'static [Preset] {
        PRESETS
    }

    pub fn find(id: &str) -> Result<&'static Preset> {
        PRESETS
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| SkillsetError::UnknownPreset(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn six_presets_defined() {
        assert_eq!(Preset::all().len(), 6);
    }

    #[test]
    fn find_by_id() {
        let preset = Preset::find("devops-engineer").unwrap();
        assert!(preset.domains.contains(&"cicd"));
        assert!(Preset::find("cowboy").is_err());
    }

    #[test]
    fn preset_domains_exist_in_catalog() {
        let catalog = Catalog::builtin();
        for preset in Preset::all() {
            for domain in preset.domains {
                assert!(catalog.domain(domain).is_some(), "{domain} not in catalog");
            }
        }
    }

    #[test]
    fn enterprise_covers_every_domain() {
        let preset = Preset::find("enterprise-complete").unwrap();
        assert_eq!(preset.domains.len(), Catalog::builtin().domains().len());
    }
}
