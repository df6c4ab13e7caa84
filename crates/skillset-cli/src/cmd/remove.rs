use crate::output::print_json;
use anyhow::{bail, Context};
use skillset_core::install;
use std::path::Path;

pub fn run(
    root: &Path,
    skill_id: Option<&str>,
    all: bool,
    yes: bool,
    json: bool,
) -> anyhow::Result<()> {
    if all {
        // Deleting every skill folder is irreversible; require the flag.
        if !yes {
            bail!("removing all skills deletes every tool skill folder; re-run with --yes to confirm");
        }
        let removed = install::remove_all(root).context("failed to remove skills")?;
        if json {
            print_json(&removed)?;
        } else if removed.is_empty() {
            println!("Nothing to remove.");
        } else {
            for folder in &removed {
                println!("removed: {}", folder.display());
            }
        }
        return Ok(());
    }

    let Some(skill_id) = skill_id else {
        bail!("specify a skill id, or --all --yes to remove everything");
    };

    let removed = install::remove_skill(root, skill_id)
        .with_context(|| format!("failed to remove skill '{skill_id}'"))?;
    if json {
        print_json(&removed)?;
    } else {
        for path in &removed {
            println!("removed: {}", path.display());
        }
    }
    Ok(())
}
