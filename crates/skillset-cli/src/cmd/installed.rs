use crate::output::{print_json, print_table};
use anyhow::Context;
use skillset_core::install;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let installed = install::installed_skills(root).context("failed to scan workspace")?;

    if json {
        print_json(&installed)?;
        return Ok(());
    }

    if installed.is_empty() {
        println!("No skills installed. Try: skillset init");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = installed
        .iter()
        .map(|s| {
            vec![
                s.skill_id.clone(),
                s.tool.to_string(),
                s.path.display().to_string(),
            ]
        })
        .collect();
    print_table(&["SKILL", "TOOL", "PATH"], rows);
    Ok(())
}
