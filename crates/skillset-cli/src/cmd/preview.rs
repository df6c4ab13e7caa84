use crate::output::print_json;
use anyhow::Context;
use skillset_core::catalog::Catalog;
use skillset_core::deps::DependencyGraph;
use skillset_core::preview;

pub fn run(skill_id: &str, json: bool) -> anyhow::Result<()> {
    let content = preview::render(Catalog::builtin(), DependencyGraph::builtin(), skill_id)
        .with_context(|| format!("failed to preview skill '{skill_id}'"))?;

    if json {
        print_json(&serde_json::json!({
            "skill": skill_id,
            "content": content,
        }))?;
    } else {
        println!("{content}");
    }
    Ok(())
}
