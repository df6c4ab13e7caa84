use crate::error::{Result, SkillsetError};
use crate::paths::validate_skill_id;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// DependencyRecord
// ---------------------------------------------------------------------------

/// Declared relationships for one skill.
///
/// `related_to` edges are not symmetric: A listing B does not imply B lists A.
/// The table is curated that way and the asymmetry is preserved as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DependencyRecord {
    /// Skills that should logically precede this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,
    /// Skills that pair well with this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_to: Vec<String>,
    /// Skills commonly adopted after this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggests_next: Vec<String>,
}

impl DependencyRecord {
    pub fn is_empty(&self) -> bool {
        self.requires.is_empty() && self.related_to.is_empty() && self.suggests_next.is_empty()
    }
}

/// One row of the relationship table as serialized in dependencies.yaml.
/// A sequence of these keeps the table order stable through serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DependencyEntry {
    pub skill: String,
    #[serde(flatten)]
    pub record: DependencyRecord,
}

// ---------------------------------------------------------------------------
// DependencyGraph
// ---------------------------------------------------------------------------

/// Insertion-ordered mapping of skill id to its declared relationships.
///
/// Built once and never mutated. Edge targets may name skills that have no
/// entry of their own; lookups on such ids simply come back empty.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    entries: Vec<(String, DependencyRecord)>,
    index: HashMap<String, usize>,
}

static BUILTIN: OnceLock<DependencyGraph> = OnceLock::new();

const BUILTIN_TABLE: &str = include_str!("data/dependencies.yaml");

impl DependencyGraph {
    /// The bundled relationship table, parsed and validated once.
    pub fn builtin() -> &'static DependencyGraph {
        BUILTIN.get_or_init(|| {
            Self::from_yaml(BUILTIN_TABLE).expect("bundled dependency table is valid")
        })
    }

    /// Build a graph from ordered entries. Fails on duplicate or malformed
    /// skill ids; edge targets are deliberately not checked against the keys.
    pub fn from_entries(entries: Vec<DependencyEntry>) -> Result<Self> {
        let mut graph = DependencyGraph {
            entries: Vec::with_capacity(entries.len()),
            index: HashMap::with_capacity(entries.len()),
        };
        for entry in entries {
            validate_skill_id(&entry.skill)?;
            if graph.index.contains_key(&entry.skill) {
                return Err(SkillsetError::DuplicateSkillId(entry.skill));
            }
            graph.index.insert(entry.skill.clone(), graph.entries.len());
            graph.entries.push((entry.skill, entry.record));
        }
        Ok(graph)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let entries: Vec<DependencyEntry> = serde_yaml::from_str(yaml)?;
        Self::from_entries(entries)
    }

    pub fn to_yaml(&self) -> Result<String> {
        let entries: Vec<DependencyEntry> = self
            .entries
            .iter()
            .map(|(skill, record)| DependencyEntry {
                skill: skill.clone(),
                record: record.clone(),
            })
            .collect();
        Ok(serde_yaml::to_string(&entries)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The stored record for `skill_id`, or None if the table never mentions
    /// it as a key. None is an expected outcome, not an error; callers that
    /// need to distinguish "no relationships declared" from "absent" must not
    /// substitute an empty record here.
    pub fn record(&self, skill_id: &str) -> Option<&DependencyRecord> {
        self.index.get(skill_id).map(|&i| &self.entries[i].1)
    }

    /// Whether `skill_id` is a key in the table. A present entry with all
    /// three lists empty still counts.
    pub fn contains(&self, skill_id: &str) -> bool {
        self.index.contains_key(skill_id)
    }

    /// Union of requires, related_to, and suggests_next for `skill_id`,
    /// deduplicated with first occurrence winning, scanned in that fixed
    /// order. Empty when the skill has no entry.
    pub fn related_skills(&self, skill_id: &str) -> Vec<&str> {
        let Some(record) = self.record(skill_id) else {
            return Vec::new();
        };
        let mut out: Vec<&str> = Vec::new();
        for id in record
            .requires
            .iter()
            .chain(&record.related_to)
            .chain(&record.suggests_next)
        {
            if !out.contains(&id.as_str()) {
                out.push(id);
            }
        }
        out
    }

    /// Every skill whose `requires` lists `skill_id`, in table order.
    pub fn required_by(&self, skill_id: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, record)| record.requires.iter().any(|r| r == skill_id))
            .map(|(id, _)| id.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DependencyRecord)> {
        self.entries.iter().map(|(id, record)| (id.as_str(), record))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(skill: &str, record: DependencyRecord) -> DependencyEntry {
        DependencyEntry {
            skill: skill.to_string(),
            record,
        }
    }

    fn strings(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn builtin_table_loads() {
        let graph = DependencyGraph::builtin();
        assert!(graph.len() >= 40);
        assert!(graph.contains("project-scaffolder"));
    }

    #[test]
    fn record_returns_stored_value_exactly() {
        let graph = DependencyGraph::builtin();
        let record = graph.record("git-hygiene-enforcer").unwrap();
        assert_eq!(record.requires, strings(&["project-scaffolder"]));
        assert_eq!(record.related_to, strings(&["changelog-writer"]));
        assert!(record.suggests_next.is_empty());
    }

    #[test]
    fn absent_skill_is_not_found_everywhere() {
        let graph = DependencyGraph::builtin();
        assert!(graph.record("nonexistent-skill").is_none());
        assert!(!graph.contains("nonexistent-skill"));
        assert!(graph.related_skills("nonexistent-skill").is_empty());
        assert!(graph.required_by("nonexistent-skill").is_empty());
    }

    #[test]
    fn related_skills_scans_requires_then_related_then_next() {
        let graph = DependencyGraph::builtin();
        assert_eq!(
            graph.related_skills("git-hygiene-enforcer"),
            vec!["project-scaffolder", "changelog-writer"]
        );
        assert_eq!(
            graph.related_skills("project-scaffolder"),
            vec![
                "dev-environment-bootstrapper",
                "code-formatter-installer",
                "git-hygiene-enforcer",
                "docs-starter-kit",
            ]
        );
    }

    #[test]
    fn related_skills_dedups_first_occurrence() {
        let graph = DependencyGraph::from_entries(vec![entry(
            "a",
            DependencyRecord {
                requires: strings(&["b", "c"]),
                related_to: strings(&["c", "d"]),
                suggests_next: strings(&["b", "e"]),
            },
        )])
        .unwrap();
        assert_eq!(graph.related_skills("a"), vec!["b", "c", "d", "e"]);
    }

    #[test]
    fn related_skills_is_per_record_not_transitive() {
        // dev-onboarding-builder relates to codebase-summarizer, which itself
        // relates to docs-starter-kit; the union must stay within the record.
        let graph = DependencyGraph::builtin();
        assert_eq!(
            graph.related_skills("dev-onboarding-builder"),
            vec!["codebase-summarizer", "docs-starter-kit"]
        );
    }

    #[test]
    fn required_by_reverse_edges_in_table_order() {
        let graph = DependencyGraph::builtin();
        assert_eq!(graph.required_by("project-scaffolder"), vec!["git-hygiene-enforcer"]);
        assert_eq!(graph.required_by("api-designer"), vec![
            "api-documentation",
            "microservices-architect",
            "api-testing",
        ]);
        assert_eq!(graph.required_by("llm-integration"), vec![
            "rag-implementation",
            "agent-builder",
        ]);
    }

    #[test]
    fn requires_and_required_by_are_duals() {
        let graph = DependencyGraph::builtin();
        for (id, record) in graph.iter() {
            for req in &record.requires {
                assert!(
                    graph.required_by(req).contains(&id),
                    "{id} requires {req} but is missing from required_by({req})"
                );
            }
        }
        for (id, _) in graph.iter() {
            for dependent in graph.required_by(id) {
                let record = graph.record(dependent).unwrap();
                assert!(record.requires.iter().any(|r| r == id));
            }
        }
    }

    #[test]
    fn contains_is_membership_not_non_emptiness() {
        let graph = DependencyGraph::from_entries(vec![entry("bare", DependencyRecord::default())])
            .unwrap();
        assert!(graph.contains("bare"));
        assert!(graph.record("bare").unwrap().is_empty());
        assert!(graph.related_skills("bare").is_empty());
    }

    #[test]
    fn queries_are_idempotent() {
        let graph = DependencyGraph::builtin();
        assert_eq!(
            graph.related_skills("api-designer"),
            graph.related_skills("api-designer")
        );
        assert_eq!(graph.required_by("unit-testing"), graph.required_by("unit-testing"));
    }

    #[test]
    fn dangling_edge_targets_are_tolerated() {
        let graph = DependencyGraph::from_entries(vec![entry(
            "a",
            DependencyRecord {
                requires: strings(&["never-registered"]),
                ..Default::default()
            },
        )])
        .unwrap();
        assert!(!graph.contains("never-registered"));
        assert_eq!(graph.related_skills("a"), vec!["never-registered"]);
        assert_eq!(graph.required_by("never-registered"), vec!["a"]);
    }

    #[test]
    fn duplicate_keys_rejected_at_construction() {
        let result = DependencyGraph::from_entries(vec![
            entry("a", DependencyRecord::default()),
            entry("a", DependencyRecord::default()),
        ]);
        assert!(matches!(result, Err(SkillsetError::DuplicateSkillId(ref id)) if id == "a"));
    }

    #[test]
    fn malformed_ids_rejected_at_construction() {
        let result =
            DependencyGraph::from_entries(vec![entry("Not Valid", DependencyRecord::default())]);
        assert!(matches!(result, Err(SkillsetError::InvalidSkillId(_))));
    }

    #[test]
    fn yaml_roundtrip_preserves_order_and_records() {
        let graph = DependencyGraph::builtin();
        let yaml = graph.to_yaml().unwrap();
        let reparsed = DependencyGraph::from_yaml(&yaml).unwrap();
        assert_eq!(graph.len(), reparsed.len());
        for ((id_a, rec_a), (id_b, rec_b)) in graph.iter().zip(reparsed.iter()) {
            assert_eq!(id_a, id_b);
            assert_eq!(rec_a, rec_b);
        }
    }

    #[test]
    fn related_to_asymmetry_is_preserved() {
        // state-management lists react-component-builder, which does not list
        // state-management back. Curated fact; must not be "fixed".
        let graph = DependencyGraph::builtin();
        let fwd = graph.record("state-management").unwrap();
        assert!(fwd.related_to.iter().any(|s| s == "react-component-builder"));
        let back = graph.record("react-component-builder").unwrap();
        assert!(!back.related_to.iter().any(|s| s == "state-management"));
    }
}
