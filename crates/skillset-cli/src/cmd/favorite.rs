use crate::output::print_json;
use anyhow::Context;
use skillset_core::catalog::Catalog;
use skillset_core::config::Config;
use std::path::Path;

/// With a skill id, toggle it; without one (or with --list, which clap keeps
/// mutually exclusive with an id), print the current favorites.
pub fn run(root: &Path, skill_id: Option<&str>, _list: bool, json: bool) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(root).context("failed to load config")?;

    let Some(skill_id) = skill_id else {
        if json {
            print_json(&config.favorites)?;
        } else if config.favorites.is_empty() {
            println!("No favorite skills yet.");
        } else {
            for id in &config.favorites {
                println!("{id}");
            }
        }
        return Ok(());
    };

    Catalog::builtin().require_skill(skill_id)?;
    let now_favorite = config.toggle_favorite(skill_id);
    config.save(root).context("failed to save config")?;

    if json {
        print_json(&serde_json::json!({
            "skill": skill_id,
            "favorite": now_favorite,
        }))?;
    } else if now_favorite {
        println!("Added '{skill_id}' to favorites");
    } else {
        println!("Removed '{skill_id}' from favorites");
    }
    Ok(())
}
