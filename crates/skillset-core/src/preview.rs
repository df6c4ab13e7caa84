use crate::catalog::Catalog;
use crate::deps::DependencyGraph;
use crate::error::Result;
use crate::templates;
use crate::types::format_skill_name;

/// Markdown block describing a skill's declared relationships, or None when
/// the skill has no record. Lines appear only for non-empty lists, so a
/// record with any declared edge always yields at least one line.
pub fn dependency_section(graph: &DependencyGraph, skill_id: &str) -> Option<String> {
    let record = graph.record(skill_id)?;

    let mut section = String::from("\n\n---\n\n## Related Skills\n\n");

    let format_list = |ids: &[String]| {
        ids.iter()
            .map(|id| format_skill_name(id))
            .collect::<Vec<_>>()
            .join(", ")
    };

    if !record.requires.is_empty() {
        section.push_str(&format!("**Prerequisites:** {}\n\n", format_list(&record.requires)));
    }
    if !record.related_to.is_empty() {
        section.push_str(&format!(
            "**Works well with:** {}\n\n",
            format_list(&record.related_to)
        ));
    }
    if !record.suggests_next.is_empty() {
        section.push_str(&format!(
            "**Suggested next:** {}\n\n",
            format_list(&record.suggests_next)
        ));
    }

    Some(section)
}

/// Full preview for a catalog skill: its template content followed by the
/// dependency section when one exists.
pub fn render(catalog: &Catalog, graph: &DependencyGraph, skill_id: &str) -> Result<String> {
    let mut content = templates::resolve(catalog, skill_id)?;
    if let Some(section) = dependency_section(graph, skill_id) {
        content.push_str(&section);
    }
    Ok(content)
}
