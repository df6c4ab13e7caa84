use crate::error::{Result, SkillsetError};
use crate::paths::validate_skill_id;
use crate::types::format_skill_name;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// DomainDef / SkillInfo
// ---------------------------------------------------------------------------

/// A topical grouping of skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainDef {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub skills: Vec<String>,
}

impl DomainDef {
    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }
}

/// A catalog skill flattened out of its domain, with a display name.
#[derive(Debug, Clone, Serialize)]
pub struct SkillInfo {
    pub id: String,
    pub name: String,
    pub domain: String,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CatalogFile {
    domains: Vec<DomainDef>,
}

/// The skill library: an ordered list of domains, each with an ordered skill
/// roster. Loaded once from the bundled table; immutable afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    domains: Vec<DomainDef>,
    skill_domains: HashMap<String, usize>,
}

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

const BUILTIN_CATALOG: &str = include_str!("data/catalog.yaml");

impl Catalog {
    pub fn builtin() -> &'static Catalog {
        BUILTIN
            .get_or_init(|| Self::from_yaml(BUILTIN_CATALOG).expect("bundled catalog is valid"))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::from_domains(file.domains)
    }

    /// Validate and index the domain list. A skill may belong to exactly one
    /// domain; duplicate or malformed ids fail construction.
    pub fn from_domains(domains: Vec<DomainDef>) -> Result<Self> {
        let mut skill_domains = HashMap::new();
        for (i, domain) in domains.iter().enumerate() {
            validate_skill_id(&domain.id)?;
            for skill in &domain.skills {
                validate_skill_id(skill)?;
                if skill_domains.insert(skill.clone(), i).is_some() {
                    return Err(SkillsetError::DuplicateSkillId(skill.clone()));
                }
            }
        }
        Ok(Catalog {
            domains,
            skill_domains,
        })
    }

    pub fn domains(&self) -> &[DomainDef] {
        &self.domains
    }

    pub fn domain(&self, id: &str) -> Option<&DomainDef> {
        self.domains.iter().find(|d| d.id == id)
    }

    /// Resolve a domain id, erroring with the offending id when unknown.
    pub fn require_domain(&self, id: &str) -> Result<&DomainDef> {
        self.domain(id)
            .ok_or_else(|| SkillsetError::UnknownDomain(id.to_string()))
    }

    pub fn contains_skill(&self, skill_id: &str) -> bool {
        self.skill_domains.contains_key(skill_id)
    }

    pub fn skill(&self, skill_id: &str) -> Option<SkillInfo> {
        let &i = self.skill_domains.get(skill_id)?;
        Some(SkillInfo {
            id: skill_id.to_string(),
            name: format_skill_name(skill_id),
            domain: self.domains[i].id.clone(),
        })
    }

    pub fn require_skill(&self, skill_id: &str) -> Result<SkillInfo> {
        self.skill(skill_id)
            .ok_or_else(|| SkillsetError::UnknownSkill(skill_id.to_string()))
    }

    /// All skills across all domains, in catalog order.
    pub fn all_skills(&self) -> Vec<SkillInfo> {
        self.domains
            .iter()
            .flat_map(|d| {
                d.skills.iter().map(|id| SkillInfo {
                    id: id.clone(),
                    name: format_skill_name(id),
                    domain: d.id.clone(),
                })
            })
            .collect()
    }

    pub fn skill_count(&self) -> usize {
        self.skill_domains.len()
    }

    /// Case-insensitive substring search over skill ids and display names.
    pub fn search(&self, query: &str) -> Vec<SkillInfo> {
        let needle = query.to_lowercase();
        self.all_skills()
            .into_iter()
            .filter(|s| {
                s.id.contains(&needle) || s.name.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
