//! Load tool implementation
//!
//! Implements the `load_skill(name, include_resources)` MCP tool

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::cli::LoadArgs;
use crate::error::AppError;
use crate::mcp::{McpResponse, ServerContext, ToolResult};
use crate::skills::loader::load_skill;
use crate::skills::{search_skills, SearchIndex, SkillEntry};

/// Handle load_skill tool call
pub async fn handle_load_skill(
    id: Option<Value>,
    args: Value,
    context: &ServerContext,
) -> McpResponse {
    let load_args: LoadArgs = match serde_json::from_value(args) {
        Ok(args) => args,
        Err(e) => {
            return McpResponse::error(
                id,
                "invalid_input",
                &format!("Invalid arguments: {}", e),
            )
        }
    };

    match execute_load(&context.index, &context.skills_dir, load_args).await {
        Ok(content) => match serde_json::to_value(content) {
            Ok(value) => McpResponse::success(id, value),
            Err(e) => McpResponse::error(id, "internal_error", &e.to_string()),
        },
        Err(e) => McpResponse::error(id, e.error_code(), &e.message()),
    }
}

/// Look an entry up by directory name or frontmatter name,
/// case-insensitively.
fn find_entry<'a>(index: &'a SearchIndex, name: &str) -> Option<&'a SkillEntry> {
    index.entries.iter().find(|e| {
        e.dir_name.eq_ignore_ascii_case(name) || e.frontmatter.name.eq_ignore_ascii_case(name)
    })
}

/// Execute load tool (shared implementation for MCP and CLI)
pub async fn execute_load(
    index: &SearchIndex,
    skills_dir: &Path,
    args: LoadArgs,
) -> Result<ToolResult, AppError> {
    debug!("Load request for skill: '{}'", args.name);

    let Some(entry) = find_entry(index, &args.name) else {
        // Unknown name: fall back to fuzzy suggestions
        let suggestions = search_skills(index, &args.name, 5);
        if suggestions.is_empty() {
            return Ok(ToolResult::text(format!(
                "Skill \"{}\" not found.",
                args.name
            )));
        }
        let names: Vec<&str> = suggestions.iter().map(|r| r.name.as_str()).collect();
        return Ok(ToolResult::text(format!(
            "Skill \"{}\" not found. Did you mean: {}?",
            args.name,
            names.join(", ")
        )));
    };

    let content = load_skill(entry, skills_dir, args.include_resources).await?;
    Ok(ToolResult::text(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::build_index;
    use crate::skills::index::test_fixtures::{write_resources, write_skill};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_by_dir_name_and_by_frontmatter_name() {
        let tmp = TempDir::new().expect("tempdir");
        write_skill(tmp.path(), "brainstorm-dir", "brainstorming", "Idea generation");
        let index = build_index(tmp.path()).await;

        for name in ["brainstorm-dir", "brainstorming", "Brainstorming"] {
            let result = execute_load(
                &index,
                tmp.path(),
                LoadArgs {
                    name: name.to_string(),
                    include_resources: false,
                },
            )
            .await
            .expect("load");
            assert!(
                result.content[0].text.contains("name: brainstorming"),
                "lookup by {name:?} failed"
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_name_suggests_fuzzy_matches() {
        let tmp = TempDir::new().expect("tempdir");
        write_skill(tmp.path(), "react-patterns", "react-patterns", "React patterns");
        let index = build_index(tmp.path()).await;

        let result = execute_load(
            &index,
            tmp.path(),
            LoadArgs {
                name: "react".to_string(),
                include_resources: false,
            },
        )
        .await
        .expect("load");
        let text = &result.content[0].text;
        assert!(text.contains("not found"));
        assert!(text.contains("Did you mean: react-patterns?"));
    }

    #[tokio::test]
    async fn test_unknown_name_without_suggestions() {
        let tmp = TempDir::new().expect("tempdir");
        write_skill(tmp.path(), "react-patterns", "react-patterns", "React patterns");
        let index = build_index(tmp.path()).await;

        let result = execute_load(
            &index,
            tmp.path(),
            LoadArgs {
                name: "zzzznonexistent".to_string(),
                include_resources: false,
            },
        )
        .await
        .expect("load");
        assert_eq!(
            result.content[0].text,
            "Skill \"zzzznonexistent\" not found."
        );
    }

    #[tokio::test]
    async fn test_resources_included_on_request() {
        let tmp = TempDir::new().expect("tempdir");
        write_skill(tmp.path(), "rich", "rich", "With resources");
        write_resources(tmp.path(), "rich", &["extra.md"]);
        let index = build_index(tmp.path()).await;

        let result = execute_load(
            &index,
            tmp.path(),
            LoadArgs {
                name: "rich".to_string(),
                include_resources: true,
            },
        )
        .await
        .expect("load");
        assert!(result.content[0].text.contains("# Resource: extra.md"));
    }
}
