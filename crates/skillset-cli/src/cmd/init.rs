use crate::output::print_json;
use anyhow::Context;
use skillset_core::catalog::Catalog;
use skillset_core::config::Config;
use skillset_core::install::{self, InstallRequest};
use skillset_core::presets::Preset;
use skillset_core::state::State;
use skillset_core::types::Tool;
use std::path::Path;

pub fn run(
    root: &Path,
    tool: Option<&str>,
    domains: &[String],
    preset: Option<&str>,
    folder: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();
    let mut config = Config::load_or_default(root).context("failed to load config")?;

    let tool: Tool = match tool {
        Some(s) => s.parse()?,
        None => config.default_tool,
    };

    let domains: Vec<String> = if let Some(preset_id) = preset {
        let preset = Preset::find(preset_id)?;
        preset.domains.iter().map(|d| d.to_string()).collect()
    } else if !domains.is_empty() {
        domains.to_vec()
    } else {
        config.default_domains.clone()
    };

    let folder = folder.or_else(|| config.default_folder.clone());

    let report = install::install(
        root,
        catalog,
        &InstallRequest {
            tool,
            folder,
            domains: domains.clone(),
            skills: None,
        },
    )
    .context("failed to install skills")?;

    // First init creates the .skillset files; later runs refresh state only.
    config.save(root).context("failed to save config")?;
    let mut state = State::load_or_default(root)?;
    state.record_install(tool);
    state.save(root).context("failed to save state")?;

    if json {
        print_json(&report)?;
        return Ok(());
    }

    println!(
        "Installed {} skills for {} ({} domains)",
        report.skills.len(),
        tool.display_name(),
        domains.len()
    );
    for file in &report.files {
        println!("  {}", file.display());
    }
    println!("\nNext: skillset installed");
    Ok(())
}
