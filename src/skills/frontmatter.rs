//! Frontmatter extraction for SKILL.md documents
//!
//! A skill document starts with a YAML block delimited by `---` lines. A
//! missing or malformed block is a normal `None` outcome, never an error:
//! skill collections are expected to contain non-skill files.

use serde_norway::{Mapping, Value};

/// Parsed metadata header of a skill document
#[derive(Debug, Clone, PartialEq)]
pub struct SkillFrontmatter {
    /// Canonical skill name, required
    pub name: String,
    /// One-line description, empty when absent
    pub description: String,
    /// Free-form metadata map, kept only when it is a YAML mapping
    pub metadata: Option<Mapping>,
    /// Capability tags, kept only when every element is a string
    pub allowed_tools: Option<Vec<String>>,
}

/// Extract the raw YAML block between the leading `---` markers.
fn frontmatter_block(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---\n")?;
    let end = rest.find("\n---")?;
    Some(&rest[..end])
}

/// Parse the frontmatter of a skill document.
///
/// Returns `None` when the delimiter is absent, the YAML does not parse to
/// a mapping, or `name` is missing or not a string. Optional fields that do
/// not match their expected shape are dropped, not rejected.
pub fn parse_frontmatter(content: &str) -> Option<SkillFrontmatter> {
    let block = frontmatter_block(content)?;
    let parsed: Value = serde_norway::from_str(block).ok()?;

    if !parsed.is_mapping() {
        return None;
    }

    let name = parsed.get("name")?.as_str()?.to_string();

    let description = parsed
        .get("description")
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let metadata = parsed
        .get("metadata")
        .and_then(Value::as_mapping)
        .cloned();

    let allowed_tools = parsed
        .get("allowedTools")
        .and_then(Value::as_sequence)
        .and_then(|seq| {
            seq.iter()
                .map(|v| v.as_str().map(str::to_string))
                .collect::<Option<Vec<String>>>()
        });

    Some(SkillFrontmatter {
        name,
        description,
        metadata,
        allowed_tools,
    })
}
