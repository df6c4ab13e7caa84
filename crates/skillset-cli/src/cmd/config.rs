use crate::output::{print_json, print_kv};
use anyhow::Context;
use clap::Subcommand;
use skillset_core::config::Config;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the effective settings
    Show,
    /// Change a setting (default-tool, default-folder, default-domains)
    Set { key: String, value: String },
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
        ConfigSubcommand::Set { key, value } => set(root, &key, &value, json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default(root).context("failed to load config")?;

    if json {
        print_json(&config)?;
        return Ok(());
    }

    print_kv(&[
        ("default-tool", config.default_tool.to_string()),
        (
            "default-folder",
            config.default_folder.clone().unwrap_or_else(|| "(tool default)".to_string()),
        ),
        ("default-domains", config.default_domains.join(", ")),
        ("favorites", config.favorites.len().to_string()),
    ]);
    Ok(())
}

fn set(root: &Path, key: &str, value: &str, json: bool) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(root).context("failed to load config")?;
    config.set_key(key, value)?;
    config.save(root).context("failed to save config")?;

    if json {
        print_json(&config)?;
    } else {
        println!("Set {key} = {value}");
    }
    Ok(())
}
