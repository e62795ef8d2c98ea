//! skill-library MCP Server & CLI
//!
//! Dual-mode application:
//! - MCP Server Mode (default): Model Context Protocol server using stdio
//! - CLI Mode: Command-line utility for direct tool execution
//!
//! Implements three tools over a local skill collection:
//! - `search_skill(query, limit)` - Ranked keyword search
//! - `load_skill(name, include_resources)` - Full skill content
//! - `find_duplicates()` - Exact and near-duplicate report

mod cli;
mod error;
mod import;
mod mcp;
mod skills;
mod tools;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Detect mode: CLI if args present, MCP server otherwise
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        // CLI mode - parse arguments and execute
        run_cli_mode().await
    } else {
        // MCP server mode - default behavior
        run_mcp_mode().await
    }
}

/// Run in CLI mode
async fn run_cli_mode() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let skills_dir = cli.skills_dir;

    // Execute command
    let result: Result<String> = match cli.command {
        Some(Commands::Search(args)) => {
            let index = skills::build_index(&skills_dir).await;
            tools::search::execute_search(&index, args)
                .map(tool_text)
                .map_err(Into::into)
        }
        Some(Commands::Load(args)) => {
            let index = skills::build_index(&skills_dir).await;
            tools::load::execute_load(&index, &skills_dir, args)
                .await
                .map(tool_text)
                .map_err(Into::into)
        }
        Some(Commands::Dedup(_)) => {
            return run_dedup_cli(&skills_dir).await;
        }
        Some(Commands::Categories(_)) => {
            let index = skills::build_index(&skills_dir).await;
            Ok(format_categories(&index))
        }
        Some(Commands::Import(args)) => {
            return run_import_cli(&skills_dir, args).await;
        }
        None => {
            eprintln!("Error: No command specified. Use --help for usage information.");
            std::process::exit(1);
        }
    };

    // Handle result and exit with appropriate code
    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(get_exit_code(&e));
        }
    }
}

/// Extract the text payload of a tool result for terminal output
fn tool_text(result: mcp::ToolResult) -> String {
    result
        .content
        .first()
        .map(|c| c.text.clone())
        .unwrap_or_default()
}

/// Execute dedup command in CLI mode. Exit code 1 flags exact duplicates.
async fn run_dedup_cli(skills_dir: &std::path::Path) -> Result<()> {
    let report = skills::find_duplicates(skills_dir).await;
    println!("{}", tools::dedup::format_duplicate_report(&report));

    if !report.exact_duplicates.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

/// Execute import command in CLI mode, with a post-import duplicate check.
async fn run_import_cli(skills_dir: &std::path::Path, args: cli::ImportArgs) -> Result<()> {
    let source_name = args.source_name.clone().unwrap_or_else(|| {
        args.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    });
    info!(
        "Importing skills from {} ({}) into {}",
        args.source.display(),
        source_name,
        skills_dir.display()
    );

    let outcome = match import::import_skills(&args.source, skills_dir, !args.no_dry_run) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            let err: anyhow::Error = e.into();
            std::process::exit(get_exit_code(&err));
        }
    };
    println!("{}", import::format_outcome(&outcome));

    // A live import can introduce duplicates; check and flag them
    if !outcome.dry_run && !outcome.added.is_empty() {
        let report = skills::find_duplicates(skills_dir).await;
        if report.exact_duplicates.is_empty() {
            println!("No new exact duplicates.");
        } else {
            println!("{}", tools::dedup::format_duplicate_report(&report));
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Format the category listing for terminal output
fn format_categories(index: &skills::SearchIndex) -> String {
    let categories = skills::categories::build_categories(&index.entries);
    let mut out = String::new();
    for (category, dirs) in &categories {
        out.push_str(&format!("## {} ({})\n", category, dirs.len()));
        for dir in dirs {
            out.push_str(&format!("- {}\n", dir));
        }
        out.push('\n');
    }
    if out.is_empty() {
        out.push_str("No skills indexed.\n");
    }
    out
}

/// Map errors to exit codes
fn get_exit_code(err: &anyhow::Error) -> i32 {
    let err_str = err.to_string().to_lowercase();

    if err_str.contains("invalid") || err_str.contains("usage") {
        1 // Invalid arguments or usage error
    } else if err_str.contains("read failed") {
        2 // I/O error
    } else if err_str.contains("not found") {
        3 // Not found error
    } else if err_str.contains("import") {
        4 // Import error
    } else {
        5 // Other application errors
    }
}

/// Run in MCP server mode
async fn run_mcp_mode() -> Result<()> {
    // Initialize logging to stderr: stdout carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let skills_dir = std::env::var_os("SKILL_LIBRARY_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("skills"));

    info!("Starting skill-library MCP Server");

    // Handle stdio MCP communication
    mcp::handle_stdio(skills_dir).await?;

    Ok(())
}
