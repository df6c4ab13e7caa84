use crate::output::{print_json, print_kv};
use skillset_core::deps::DependencyGraph;
use skillset_core::types::format_skill_name;

/// Show a skill's relationships. An id the table never mentions is not an
/// error; the command reports the empty result and exits cleanly.
pub fn run(skill_id: &str, json: bool) -> anyhow::Result<()> {
    let graph = DependencyGraph::builtin();
    let record = graph.record(skill_id);
    let related = graph.related_skills(skill_id);
    let required_by = graph.required_by(skill_id);

    if json {
        print_json(&serde_json::json!({
            "skill": skill_id,
            "known": record.is_some(),
            "record": record,
            "related": related,
            "required_by": required_by,
        }))?;
        return Ok(());
    }

    let Some(record) = record else {
        println!("No relationship data for '{skill_id}'");
        return Ok(());
    };

    let names = |ids: &[String]| -> String {
        if ids.is_empty() {
            "-".to_string()
        } else {
            ids.iter().map(|s| format_skill_name(s)).collect::<Vec<_>>().join(", ")
        }
    };
    let borrowed: Vec<String> = required_by.iter().map(|s| s.to_string()).collect();

    print_kv(&[
        ("Skill", format_skill_name(skill_id)),
        ("Prerequisites", names(&record.requires)),
        ("Works well with", names(&record.related_to)),
        ("Suggested next", names(&record.suggests_next)),
        ("Required by", names(&borrowed)),
    ]);
    Ok(())
}
