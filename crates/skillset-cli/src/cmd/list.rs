use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use skillset_core::catalog::Catalog;
use skillset_core::config::Config;
use skillset_core::presets::Preset;
use std::path::Path;

#[derive(Subcommand)]
pub enum ListSubcommand {
    /// List the skill domains
    Domains,
    /// List skills, optionally within one domain
    Skills {
        #[arg(long)]
        domain: Option<String>,
    },
    /// List quick-setup presets
    Presets,
}

pub fn run(root: &Path, subcmd: ListSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ListSubcommand::Domains => domains(json),
        ListSubcommand::Skills { domain } => skills(root, domain.as_deref(), json),
        ListSubcommand::Presets => presets(json),
    }
}

fn domains(json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();

    if json {
        print_json(&catalog.domains())?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = catalog
        .domains()
        .iter()
        .map(|d| {
            vec![
                d.id.clone(),
                format!("{} {}", d.icon, d.name),
                d.skill_count().to_string(),
                d.description.clone(),
            ]
        })
        .collect();
    print_table(&["ID", "NAME", "SKILLS", "DESCRIPTION"], rows);
    Ok(())
}

fn skills(root: &Path, domain: Option<&str>, json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::builtin();
    let config = Config::load_or_default(root).context("failed to load config")?;

    let skills = match domain {
        Some(id) => {
            let domain = catalog.require_domain(id)?;
            domain
                .skills
                .iter()
                .filter_map(|s| catalog.skill(s))
                .collect()
        }
        None => catalog.all_skills(),
    };

    if json {
        print_json(&skills)?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = skills
        .iter()
        .map(|s| {
            vec![
                s.id.clone(),
                s.domain.clone(),
                if config.is_favorite(&s.id) { "★".to_string() } else { String::new() },
                s.name.clone(),
            ]
        })
        .collect();
    print_table(&["ID", "DOMAIN", "FAV", "NAME"], rows);
    Ok(())
}

fn presets(json: bool) -> anyhow::Result<()> {
    if json {
        let values: Vec<_> = Preset::all()
            .iter()
            .map(|p| {
                serde_json::json!({
                    "id": p.id,
                    "name": p.name,
                    "description": p.description,
                    "domains": p.domains,
                })
            })
            .collect();
        print_json(&values)?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = Preset::all()
        .iter()
        .map(|p| vec![p.id.to_string(), p.name.to_string(), p.domains.join(", ")])
        .collect();
    print_table(&["ID", "NAME", "DOMAINS"], rows);
    Ok(())
}
