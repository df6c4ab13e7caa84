use crate::output::print_json;
use anyhow::Context;
use skillset_core::catalog::Catalog;
use skillset_core::install;
use skillset_core::state::State;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let report = install::update(root, Catalog::builtin()).context("failed to update skills")?;

    let mut state = State::load_or_default(root)?;
    state.record_update_check();
    state.save(root).context("failed to save state")?;

    if json {
        print_json(&report)?;
        return Ok(());
    }

    if report.updated.is_empty() && report.skipped.is_empty() {
        println!("No skills installed. Try: skillset init");
        return Ok(());
    }
    println!("Updated {} skills", report.updated.len());
    for id in &report.skipped {
        println!("  skipped (not in library): {id}");
    }
    Ok(())
}
