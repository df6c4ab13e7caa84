mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, list::ListSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skillset",
    about = "Manage AI assistant skill templates in your workspace",
    version,
    propagate_version = true
)]
struct Cli {
    /// Workspace root (default: auto-detect from .skillset/ or .git/)
    #[arg(long, global = true, env = "SKILLSET_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install skills for one or more domains into the workspace
    Init {
        /// Target AI tool (claude-code, cursor, copilot, other)
        #[arg(long)]
        tool: Option<String>,

        /// Domain to install (repeatable; default: configured domains)
        #[arg(long = "domain")]
        domains: Vec<String>,

        /// Use a named preset instead of listing domains
        #[arg(long, conflicts_with = "domains")]
        preset: Option<String>,

        /// Custom install folder overriding the tool default
        #[arg(long)]
        folder: Option<String>,
    },

    /// List available domains, skills, or presets
    List {
        #[command(subcommand)]
        subcommand: ListSubcommand,
    },

    /// List skill files installed in the workspace
    Installed,

    /// Install a single skill
    Add {
        skill_id: String,
        #[arg(long)]
        tool: Option<String>,
        #[arg(long)]
        folder: Option<String>,
    },

    /// Remove an installed skill, or all of them
    Remove {
        skill_id: Option<String>,

        /// Remove every installed skill folder
        #[arg(long, conflicts_with = "skill_id")]
        all: bool,

        /// Skip the confirmation requirement for --all
        #[arg(long)]
        yes: bool,
    },

    /// Refresh installed skills from the bundled library
    Update,

    /// Print a skill's template with its related-skills section
    Preview { skill_id: String },

    /// Search the catalog by id or name
    Search { query: String },

    /// Show a skill's relationships: prerequisites, complements, dependents
    Deps { skill_id: String },

    /// Toggle a skill's favorite status, or list favorites
    Favorite {
        skill_id: Option<String>,

        /// List current favorites
        #[arg(long, conflicts_with = "skill_id")]
        list: bool,
    },

    /// Show or change workspace settings
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init {
            tool,
            domains,
            preset,
            folder,
        } => cmd::init::run(&root, tool.as_deref(), &domains, preset.as_deref(), folder, cli.json),
        Commands::List { subcommand } => cmd::list::run(&root, subcommand, cli.json),
        Commands::Installed => cmd::installed::run(&root, cli.json),
        Commands::Add {
            skill_id,
            tool,
            folder,
        } => cmd::add::run(&root, &skill_id, tool.as_deref(), folder, cli.json),
        Commands::Remove { skill_id, all, yes } => {
            cmd::remove::run(&root, skill_id.as_deref(), all, yes, cli.json)
        }
        Commands::Update => cmd::update::run(&root, cli.json),
        Commands::Preview { skill_id } => cmd::preview::run(&skill_id, cli.json),
        Commands::Search { query } => cmd::search::run(&query, cli.json),
        Commands::Deps { skill_id } => cmd::deps::run(&skill_id, cli.json),
        Commands::Favorite { skill_id, list } => {
            cmd::favorite::run(&root, skill_id.as_deref(), list, cli.json)
        }
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
