use crate::catalog::Catalog;
use crate::error::{Result, SkillsetError};
use crate::paths::{self, SKILL_FILE};
use crate::templates;
use crate::types::Tool;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// InstallRequest / reports
// ---------------------------------------------------------------------------

/// What to install: a tool, an optional folder override, and either whole
/// domains or an explicit skill list.
#[derive(Debug, Clone)]
pub struct InstallRequest {
    pub tool: Tool,
    pub folder: Option<String>,
    pub domains: Vec<String>,
    /// When set, install exactly these skills instead of the domain rosters.
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstallReport {
    pub tool: Tool,
    pub skills: Vec<String>,
    pub files: Vec<PathBuf>,
}

/// One skill file found in a workspace scan.
#[derive(Debug, Clone, Serialize)]
pub struct InstalledSkill {
    pub tool: Tool,
    pub skill_id: String,
    /// Path relative to the workspace root.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateReport {
    pub updated: Vec<String>,
    /// Installed files whose skill id the catalog no longer knows.
    pub skipped: Vec<String>,
}

// ---------------------------------------------------------------------------
// Install
// ---------------------------------------------------------------------------

/// Install skill templates into the workspace. Unknown domains or skills are
/// hard errors before anything is written.
pub fn install(root: &Path, catalog: &Catalog, req: &InstallRequest) -> Result<InstallReport> {
    let skill_ids = resolve_skill_ids(catalog, req)?;
    info!(tool = %req.tool, count = skill_ids.len(), "installing skills");

    let mut files = Vec::with_capacity(skill_ids.len());
    for id in &skill_ids {
        let content = templates::resolve(catalog, id)?;
        let path = paths::skill_install_path(root, req.tool, req.folder.as_deref(), id);
        crate::io::atomic_write(&path, content.as_bytes())?;
        debug!(skill = %id, path = %path.display(), "wrote skill file");
        files.push(path.strip_prefix(root).unwrap_or(&path).to_path_buf());
    }

    Ok(InstallReport {
        tool: req.tool,
        skills: skill_ids,
        files,
    })
}

/// Expand a request into a deduplicated, ordered skill id list.
fn resolve_skill_ids(catalog: &Catalog, req: &InstallRequest) -> Result<Vec<String>> {
    let mut out: Vec<String> = Vec::new();
    let mut push = |id: &str| {
        if !out.iter().any(|s| s == id) {
            out.push(id.to_string());
        }
    };

    if let Some(skills) = &req.skills {
        for id in skills {
            catalog.require_skill(id)?;
            push(id);
        }
    } else {
        for domain_id in &req.domains {
            let domain = catalog.require_domain(domain_id)?;
            for id in &domain.skills {
                push(id);
            }
        }
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Scan
// ---------------------------------------------------------------------------

/// Tool folders to scan, with claude-code and "other" collapsing onto the
/// same directory.
fn scan_folders() -> Vec<(Tool, &'static str)> {
    let mut seen: Vec<&str> = Vec::new();
    let mut out = Vec::new();
    for &tool in Tool::all() {
        if !seen.contains(&tool.folder()) {
            seen.push(tool.folder());
            out.push((tool, tool.folder()));
        }
    }
    out
}

/// All installed skill files across the conventional tool folders.
/// Missing folders are fine; results are sorted by path within each tool.
pub fn installed_skills(root: &Path) -> Result<Vec<InstalledSkill>> {
    let mut out = Vec::new();
    for (tool, folder) in scan_folders() {
        let dir = root.join(folder);
        let mut files = Vec::new();
        collect_markdown(&dir, &mut files);
        files.sort();
        for path in files {
            let skill_id = skill_id_from_path(&path);
            let rel = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            out.push(InstalledSkill {
                tool,
                skill_id,
                path: rel,
            });
        }
    }
    debug!(count = out.len(), "scanned installed skills");
    Ok(out)
}

fn collect_markdown(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_markdown(&path, out);
        } else if path.extension().is_some_and(|e| e == "md") {
            out.push(path);
        }
    }
}

/// Derive the skill id from an installed file: the directory name for
/// `<id>/SKILL.md` layouts, the file stem for flat `<id>.md` files.
fn skill_id_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if path.file_name().is_some_and(|n| n == SKILL_FILE) {
        if let Some(parent) = path.parent().and_then(|p| p.file_name()) {
            return parent.to_string_lossy().into_owned();
        }
    }
    stem
}

// ---------------------------------------------------------------------------
// Remove
// ---------------------------------------------------------------------------

/// Delete every conventional tool folder. Returns the folders removed.
pub fn remove_all(root: &Path) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for (_, folder) in scan_folders() {
        let dir = root.join(folder);
        if crate::io::remove_dir_if_exists(&dir)? {
            info!(folder, "removed skill folder");
            removed.push(PathBuf::from(folder));
        }
    }
    Ok(removed)
}

/// Delete one skill wherever it is installed. Errors if nothing matched.
pub fn remove_skill(root: &Path, skill_id: &str) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for (_, folder) in scan_folders() {
        let dir_form = root.join(folder).join(skill_id);
        if crate::io::remove_dir_if_exists(&dir_form)? {
            removed.push(PathBuf::from(folder).join(skill_id));
        }
        let flat_form = root.join(folder).join(format!("{skill_id}.md"));
        if flat_form.is_file() {
            std::fs::remove_file(&flat_form)?;
            removed.push(PathBuf::from(folder).join(format!("{skill_id}.md")));
        }
    }
    if removed.is_empty() {
        return Err(SkillsetError::NotInstalled(skill_id.to_string()));
    }
    info!(skill = skill_id, files = removed.len(), "removed skill");
    Ok(removed)
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// Re-render every installed skill from the current bundled library.
/// Files whose id the catalog no longer knows are left untouched.
pub fn update(root: &Path, catalog: &Catalog) -> Result<UpdateReport> {
    let mut report = UpdateReport {
        updated: Vec::new(),
        skipped: Vec::new(),
    };
    for installed in installed_skills(root)? {
        if !catalog.contains_skill(&installed.skill_id) {
            report.skipped.push(installed.skill_id);
            continue;
        }
        let content = templates::resolve(catalog, &installed.skill_id)?;
        crate::io::atomic_write(&root.join(&installed.path), content.as_bytes())?;
        report.updated.push(installed.skill_id);
    }
    info!(
        updated = report.updated.len(),
        skipped = report.skipped.len(),
        "updated installed skills"
    );
    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn request(tool: Tool, domains: &[&str]) -> InstallRequest {
        InstallRequest {
            tool,
            folder: None,
            domains: domains.iter().map(|s| s.to_string()).collect(),
            skills: None,
        }
    }

    #[test]
    fn install_domain_writes_skill_files() {
        let dir = TempDir::new().unwrap();
        let report = install(dir.path(), Catalog::builtin(), &request(Tool::ClaudeCode, &["security"]))
            .unwrap();
        assert_eq!(report.skills.len(), 3);
        assert!(dir
            .path()
            .join(".claude/skills/security-auditor/SKILL.md")
            .is_file());
        let content = std::fs::read_to_string(
            dir.path().join(".claude/skills/vulnerability-scanner/SKILL.md"),
        )
        .unwrap();
        assert!(content.contains("name: vulnerability-scanner"));
    }

    #[test]
    fn install_cursor_uses_flat_files() {
        let dir = TempDir::new().unwrap();
        let req = InstallRequest {
            tool: Tool::Cursor,
            folder: None,
            domains: Vec::new(),
            skills: Some(vec!["api-designer".to_string()]),
        };
        install(dir.path(), Catalog::builtin(), &req).unwrap();
        assert!(dir.path().join(".cursor/rules/api-designer.md").is_file());
    }

    #[test]
    fn install_unknown_domain_fails_before_writing() {
        let dir = TempDir::new().unwrap();
        let err = install(dir.path(), Catalog::builtin(), &request(Tool::ClaudeCode, &["cooking"]))
            .unwrap_err();
        assert!(matches!(err, SkillsetError::UnknownDomain(_)));
        assert!(!dir.path().join(".claude/skills").exists());
    }

    #[test]
    fn install_unknown_skill_fails() {
        let dir = TempDir::new().unwrap();
        let req = InstallRequest {
            tool: Tool::ClaudeCode,
            folder: None,
            domains: Vec::new(),
            skills: Some(vec!["nonexistent-skill".to_string()]),
        };
        assert!(matches!(
            install(dir.path(), Catalog::builtin(), &req),
            Err(SkillsetError::UnknownSkill(_))
        ));
    }

    #[test]
    fn install_honors_folder_override() {
        let dir = TempDir::new().unwrap();
        let req = InstallRequest {
            tool: Tool::ClaudeCode,
            folder: Some("my/skills".to_string()),
            domains: Vec::new(),
            skills: Some(vec!["unit-testing".to_string()]),
        };
        install(dir.path(), Catalog::builtin(), &req).unwrap();
        assert!(dir.path().join("my/skills/unit-testing/SKILL.md").is_file());
    }

    #[test]
    fn overlapping_domains_dedupe() {
        let catalog = Catalog::builtin();
        let req = request(Tool::ClaudeCode, &["testing", "testing"]);
        let ids = resolve_skill_ids(catalog, &req).unwrap();
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn scan_finds_installed_skills_across_tools() {
        let dir = TempDir::new().unwrap();
        install(
            dir.path(),
            Catalog::builtin(),
            &InstallRequest {
                tool: Tool::ClaudeCode,
                folder: None,
                domains: Vec::new(),
                skills: Some(vec!["unit-testing".to_string()]),
            },
        )
        .unwrap();
        install(
            dir.path(),
            Catalog::builtin(),
            &InstallRequest {
                tool: Tool::Cursor,
                folder: None,
                domains: Vec::new(),
                skills: Some(vec!["api-designer".to_string()]),
            },
        )
        .unwrap();

        let installed = installed_skills(dir.path()).unwrap();
        let ids: Vec<_> = installed.iter().map(|s| s.skill_id.as_str()).collect();
        assert!(ids.contains(&"unit-testing"));
        assert!(ids.contains(&"api-designer"));
    }

    #[test]
    fn scan_of_empty_workspace_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(installed_skills(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn remove_all_deletes_tool_folders() {
        let dir = TempDir::new().unwrap();
        install(dir.path(), Catalog::builtin(), &request(Tool::ClaudeCode, &["database"])).unwrap();
        let removed = remove_all(dir.path()).unwrap();
        assert_eq!(removed, vec![PathBuf::from(".claude/skills")]);
        assert!(!dir.path().join(".claude/skills").exists());
        // Second pass has nothing left to do.
        assert!(remove_all(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn remove_single_skill() {
        let dir = TempDir::new().unwrap();
        install(dir.path(), Catalog::builtin(), &request(Tool::ClaudeCode, &["database"])).unwrap();
        remove_skill(dir.path(), "query-optimizer").unwrap();
        assert!(!dir.path().join(".claude/skills/query-optimizer").exists());
        assert!(dir.path().join(".claude/skills/migration-manager/SKILL.md").is_file());
    }

    #[test]
    fn remove_missing_skill_errors() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            remove_skill(dir.path(), "unit-testing"),
            Err(SkillsetError::NotInstalled(_))
        ));
    }

    #[test]
    fn update_rewrites_installed_files_and_skips_unknown() {
        let dir = TempDir::new().unwrap();
        install(dir.path(), Catalog::builtin(), &request(Tool::ClaudeCode, &["testing"])).unwrap();

        // Tamper with one file and plant one the catalog does not know.
        let target = dir.path().join(".claude/skills/unit-testing/SKILL.md");
        std::fs::write(&target, "stale").unwrap();
        let stray = dir.path().join(".claude/skills/homegrown-skill/SKILL.md");
        std::fs::create_dir_all(stray.parent().unwrap()).unwrap();
        std::fs::write(&stray, "mine").unwrap();

        let report = update(dir.path(), Catalog::builtin()).unwrap();
        assert!(report.updated.iter().any(|s| s == "unit-testing"));
        assert_eq!(report.skipped, vec!["homegrown-skill".to_string()]);
        assert!(std::fs::read_to_string(&target).unwrap().contains("name: unit-testing"));
        assert_eq!(std::fs::read_to_string(&stray).unwrap(), "mine");
    }
}
