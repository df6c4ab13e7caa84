use crate::output::print_json;
use anyhow::Context;
use skillset_core::catalog::Catalog;
use skillset_core::config::Config;
use skillset_core::install::{self, InstallRequest};
use skillset_core::state::State;
use skillset_core::types::Tool;
use std::path::Path;

pub fn run(
    root: &Path,
    skill_id: &str,
    tool: Option<&str>,
    folder: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();
    let config = Config::load_or_default(root).context("failed to load config")?;

    let tool: Tool = match tool {
        Some(s) => s.parse()?,
        None => config.default_tool,
    };
    let folder = folder.or_else(|| config.default_folder.clone());

    let report = install::install(
        root,
        catalog,
        &InstallRequest {
            tool,
            folder,
            domains: Vec::new(),
            skills: Some(vec![skill_id.to_string()]),
        },
    )
    .with_context(|| format!("failed to install skill '{skill_id}'"))?;

    let mut state = State::load_or_default(root)?;
    state.record_install(tool);
    state.save(root).context("failed to save state")?;

    if json {
        print_json(&report)?;
    } else {
        println!("Installed {} at {}", skill_id, report.files[0].display());
    }
    Ok(())
}
