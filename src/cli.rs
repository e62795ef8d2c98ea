//! CLI mode implementation
//!
//! Provides the command-line interface for the skill-library tools. The
//! argument structs double as MCP tool input schemas via schemars.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// skill-library CLI
#[derive(Parser)]
#[command(name = "skill-library")]
#[command(about = "Search, load, and deduplicate a local skill document collection", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Skills directory to operate on
    #[arg(long, global = true, env = "SKILL_LIBRARY_DIR", default_value = "skills")]
    pub skills_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search skills by keyword
    Search(SearchArgs),
    /// Load the full content of a skill
    Load(LoadArgs),
    /// Report exact and near-duplicate skills
    Dedup(FindDuplicatesArgs),
    /// Group skills by keyword category
    Categories(CategoriesArgs),
    /// Import skill directories from another collection
    Import(ImportArgs),
}

/// search_skill tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct SearchArgs {
    /// Keywords to search for (e.g. 'debugging', 'react patterns', 'terraform')
    #[arg(short = 'q', long)]
    #[schemars(description = "Keywords to search for (e.g. 'debugging', 'react patterns', 'terraform')")]
    pub query: String,

    /// Maximum number of results (default 20)
    #[arg(short = 'l', long)]
    #[schemars(description = "Maximum number of results (default 20)")]
    pub limit: Option<usize>,
}

/// load_skill tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct LoadArgs {
    /// Skill name or directory name (e.g. 'brainstorming', 'ai-engineer')
    #[arg(short = 'n', long)]
    #[schemars(description = "Skill name or directory name (e.g. 'brainstorming', 'ai-engineer')")]
    pub name: String,

    /// Whether to include resource files
    #[arg(long)]
    #[serde(default)]
    #[schemars(description = "Whether to include resource files")]
    pub include_resources: bool,
}

/// find_duplicates tool arguments (none)
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug, Default)]
pub struct FindDuplicatesArgs {}

/// categories command arguments (CLI only)
#[derive(Parser, Clone, Debug)]
pub struct CategoriesArgs {}

/// import command arguments (CLI only)
#[derive(Parser, Clone, Debug)]
pub struct ImportArgs {
    /// Source directory containing skill directories to import
    pub source: PathBuf,

    /// Name of the source, for logging
    #[arg(long)]
    pub source_name: Option<String>,

    /// Actually copy files (default is a dry run)
    #[arg(long)]
    pub no_dry_run: bool,
}
