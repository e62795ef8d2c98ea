//! Duplicate report tool implementation
//!
//! Implements the `find_duplicates()` MCP tool

use std::path::Path;

use serde_json::Value;

use crate::error::AppError;
use crate::mcp::{McpResponse, ServerContext, ToolResult};
use crate::skills::{find_duplicates, DuplicateReport};

/// Handle find_duplicates tool call
pub async fn handle_find_duplicates(
    id: Option<Value>,
    _args: Value,
    context: &ServerContext,
) -> McpResponse {
    match execute_find_duplicates(&context.skills_dir).await {
        Ok(content) => match serde_json::to_value(content) {
            Ok(value) => McpResponse::success(id, value),
            Err(e) => McpResponse::error(id, "internal_error", &e.to_string()),
        },
        Err(e) => McpResponse::error(id, e.error_code(), &e.message()),
    }
}

/// Execute duplicate detection (shared implementation for MCP and CLI)
pub async fn execute_find_duplicates(skills_dir: &Path) -> Result<ToolResult, AppError> {
    let report = find_duplicates(skills_dir).await;
    Ok(ToolResult::text(format_duplicate_report(&report)))
}

/// Format a duplicate report as a human-readable markdown summary
pub fn format_duplicate_report(report: &DuplicateReport) -> String {
    let mut out = String::new();

    if report.exact_duplicates.is_empty() {
        out.push_str("No exact duplicates found.\n");
    } else {
        out.push_str(&format!(
            "Found {} exact duplicate group(s):\n\n",
            report.exact_duplicates.len()
        ));
        for group in &report.exact_duplicates {
            let dirs: Vec<&str> = group.iter().map(|s| s.dir_name.as_str()).collect();
            out.push_str(&format!(
                "- \"{}\": {}\n",
                group[0].name,
                dirs.join(", ")
            ));
        }
    }

    out.push('\n');

    if report.near_duplicates.is_empty() {
        out.push_str("No near-duplicates found.\n");
    } else {
        out.push_str(&format!(
            "Found {} near-duplicate pair(s):\n\n",
            report.near_duplicates.len()
        ));
        for near in &report.near_duplicates {
            out.push_str(&format!(
                "- {} <-> {} ({:.0}% similar)\n",
                near.pair.0.dir_name,
                near.pair.1.dir_name,
                near.similarity * 100.0
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::index::test_fixtures::write_skill;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_clean_collection_report() {
        let tmp = TempDir::new().expect("tempdir");
        write_skill(tmp.path(), "one", "one", "completely distinct words");
        write_skill(tmp.path(), "two", "two", "nothing shared here at all");

        let result = execute_find_duplicates(tmp.path()).await.expect("execute");
        let text = &result.content[0].text;
        assert!(text.contains("No exact duplicates found."));
        assert!(text.contains("No near-duplicates found."));
    }

    #[tokio::test]
    async fn test_exact_group_listed_with_dirs() {
        let tmp = TempDir::new().expect("tempdir");
        write_skill(tmp.path(), "copy-one", "dup-skill", "Shared description text");
        write_skill(tmp.path(), "copy-two", "dup-skill", "Shared description text");

        let result = execute_find_duplicates(tmp.path()).await.expect("execute");
        let text = &result.content[0].text;
        assert!(text.contains("1 exact duplicate group(s)"));
        assert!(text.contains("\"dup-skill\": copy-one, copy-two"));
    }

    #[tokio::test]
    async fn test_near_pair_listed_with_percentage() {
        let tmp = TempDir::new().expect("tempdir");
        write_skill(
            tmp.path(),
            "first",
            "first",
            "alpha beta gamma delta epsilon zeta eta theta iota",
        );
        write_skill(
            tmp.path(),
            "second",
            "second",
            "alpha beta gamma delta epsilon zeta eta theta iota kappa",
        );

        let result = execute_find_duplicates(tmp.path()).await.expect("execute");
        let text = &result.content[0].text;
        assert!(text.contains("first <-> second (90% similar)"));
    }
}
