use crate::catalog::{Catalog, SkillInfo};
use crate::error::Result;
use rust_embed::RustEmbed;

/// Markdown skill templates bundled into the binary, laid out as
/// `{domain}/{skill}/SKILL.md`.
#[derive(RustEmbed)]
#[folder = "templates"]
struct TemplateAssets;

/// The bundled template for a skill, if one ships with the library.
pub fn bundled(domain_id: &str, skill_id: &str) -> Option<String> {
    let path = format!("{domain_id}/{skill_id}/SKILL.md");
    let file = TemplateAssets::get(&path)?;
    String::from_utf8(file.data.into_owned()).ok()
}

/// Generated stand-in for skills without a bundled template file.
pub fn scaffold(skill: &SkillInfo, domain_name: &str) -> String {
    format!(
        "---\nname: {id}\ndescription: {name} skill from the {domain} domain\n---\n\n\
         # {name}\n\n\
         Guidance for applying the {name} skill in this workspace.\n\n\
         ## When to use\n\n\
         Reach for this skill when the task at hand involves {lower}.\n\n\
         ## Instructions\n\n\
         1. Review the current state of the workspace before making changes.\n\
         2. Apply the {name} practices incrementally, verifying each step.\n\
         3. Record decisions that future contributors will need.\n",
        id = skill.id,
        name = skill.name,
        domain = domain_name,
        lower = skill.name.to_lowercase(),
    )
}

/// Resolve the install content for a catalog skill: the bundled template
/// when present, a generated scaffold otherwise.
pub fn resolve(catalog: &Catalog, skill_id: &str) -> Result<String> {
    let skill = catalog.require_skill(skill_id)?;
    let domain = catalog.require_domain(&skill.domain)?;
    Ok(bundled(&domain.id, &skill.id).unwrap_or_else(|| scaffold(&skill, &domain.name)))
}
