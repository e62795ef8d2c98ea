//! Search tool implementation
//!
//! Implements the `search_skill(query, limit)` MCP tool

use serde_json::Value;
use tracing::debug;

use crate::cli::SearchArgs;
use crate::error::AppError;
use crate::mcp::{McpResponse, ServerContext, ToolResult};
use crate::skills::{search_skills, SearchIndex, SearchResult, DEFAULT_SEARCH_LIMIT};

/// Handle search_skill tool call
pub fn handle_search_skill(id: Option<Value>, args: Value, context: &ServerContext) -> McpResponse {
    let search_args: SearchArgs = match serde_json::from_value(args) {
        Ok(args) => args,
        Err(e) => {
            return McpResponse::error(
                id,
                "invalid_input",
                &format!("Invalid arguments: {}", e),
            )
        }
    };

    match execute_search(&context.index, search_args) {
        Ok(content) => match serde_json::to_value(content) {
            Ok(value) => McpResponse::success(id, value),
            Err(e) => McpResponse::error(id, "internal_error", &e.to_string()),
        },
        Err(e) => McpResponse::error(id, e.error_code(), &e.message()),
    }
}

/// Execute search tool (shared implementation for MCP and CLI)
pub fn execute_search(index: &SearchIndex, args: SearchArgs) -> Result<ToolResult, AppError> {
    debug!("Search request for query: '{}'", args.query);

    let limit = args.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let results = search_skills(index, &args.query, limit);

    if results.is_empty() {
        return Ok(ToolResult::text(format!(
            "No skills found matching \"{}\".",
            args.query
        )));
    }

    Ok(ToolResult::text(format_search_results(
        &results, &args.query,
    )))
}

/// Format ranked search results as a markdown listing
pub fn format_search_results(results: &[SearchResult], query: &str) -> String {
    let lines: Vec<String> = results
        .iter()
        .map(|r| {
            format!(
                "- **{}** ({}){} — {}",
                r.name,
                r.dir_name,
                if r.has_resources { " [+resources]" } else { "" },
                r.description
            )
        })
        .collect();

    format!(
        "Found {} skills matching \"{}\":\n\n{}",
        results.len(),
        query,
        lines.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::build_index;
    use crate::skills::index::test_fixtures::{write_resources, write_skill};
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_search_args_parsing() {
        let args = json!({ "query": "react patterns", "limit": 5 });
        let parsed: SearchArgs = serde_json::from_value(args).unwrap();
        assert_eq!(parsed.query, "react patterns");
        assert_eq!(parsed.limit, Some(5));
    }

    #[tokio::test]
    async fn test_no_match_message() {
        let tmp = TempDir::new().expect("tempdir");
        write_skill(tmp.path(), "basic-skill", "basic-skill", "A basic skill");
        let index = build_index(tmp.path()).await;

        let result = execute_search(
            &index,
            SearchArgs {
                query: "zzzznonexistent".to_string(),
                limit: None,
            },
        )
        .expect("execute");
        assert!(result.content[0].text.contains("No skills found"));
    }

    #[tokio::test]
    async fn test_result_listing_marks_resources() {
        let tmp = TempDir::new().expect("tempdir");
        write_skill(tmp.path(), "basic-skill", "basic-skill", "A basic skill");
        write_skill(tmp.path(), "rich-skill", "rich-skill", "A skill with extras");
        write_resources(tmp.path(), "rich-skill", &["guide.md"]);
        let index = build_index(tmp.path()).await;

        let result = execute_search(
            &index,
            SearchArgs {
                query: "skill".to_string(),
                limit: None,
            },
        )
        .expect("execute");
        let text = &result.content[0].text;
        assert!(text.contains("**rich-skill** (rich-skill) [+resources]"));
        assert!(text.contains("**basic-skill** (basic-skill) —"));
    }
}
