//! Keyword-based category classification
//!
//! A fixed lookup table maps keyword hits in a skill's directory name and
//! description to a category. First matching category wins; everything
//! else lands in "Other".

use std::collections::BTreeMap;

use super::index::SkillEntry;

/// Category table. Order matters: the first category with a keyword hit
/// claims the skill.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Frontend",
        &["react", "angular", "vue", "svelte", "nextjs", "frontend", "css", "tailwind", "ui", "ux"],
    ),
    (
        "Backend",
        &["backend", "nodejs", "express", "nestjs", "fastapi", "django", "rails", "api", "rest", "graphql"],
    ),
    (
        "AI & LLM",
        &["ai", "llm", "agent", "prompt", "rag", "claude", "openai", "embedding", "ml"],
    ),
    (
        "DevOps & Infra",
        &["docker", "kubernetes", "terraform", "aws", "gcp", "azure", "deployment", "infrastructure"],
    ),
    (
        "Data & Databases",
        &["data", "database", "sql", "postgres", "mongodb", "redis", "analytics", "pipeline", "etl"],
    ),
    (
        "Security",
        &["security", "penetration", "vulnerability", "audit", "owasp", "xss", "encryption"],
    ),
    (
        "Testing",
        &["test", "tdd", "testing", "e2e", "vitest", "jest", "playwright"],
    ),
    (
        "Mobile",
        &["mobile", "react-native", "flutter", "ios", "android", "expo"],
    ),
    (
        "Automation",
        &["automation", "workflow", "n8n", "zapier", "scraping", "bot"],
    ),
    ("Python", &["python", "django", "flask", "fastapi", "pandas"]),
    ("TypeScript & JS", &["typescript", "javascript", "deno", "bun"]),
    (
        "Architecture",
        &["architecture", "microservices", "system-design", "patterns", "monorepo"],
    ),
];

/// Group indexed skills by category, keyed by category name with the
/// member directory names in index order.
pub fn build_categories(entries: &[SkillEntry]) -> BTreeMap<String, Vec<String>> {
    let mut categories: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for entry in entries {
        let text = format!("{} {}", entry.dir_name, entry.frontmatter.description).to_lowercase();

        let category = CATEGORY_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
            .map_or("Other", |(category, _)| category);

        categories
            .entry(category.to_string())
            .or_default()
            .push(entry.dir_name.clone());
    }

    categories
}

#[cfg(test)]
mod tests {
    use super::super::frontmatter::SkillFrontmatter;
    use super::*;
    use std::collections::HashSet;

    fn entry(dir_name: &str, description: &str) -> SkillEntry {
        SkillEntry {
            dir_name: dir_name.to_string(),
            frontmatter: SkillFrontmatter {
                name: dir_name.to_string(),
                description: description.to_string(),
                metadata: None,
                allowed_tools: None,
            },
            search_tokens: HashSet::new(),
            has_resources: false,
            resource_files: Vec::new(),
        }
    }

    #[test]
    fn test_keyword_hit_assigns_category() {
        let entries = vec![entry("react-hooks", "Patterns for React hooks")];
        let categories = build_categories(&entries);
        assert_eq!(categories["Frontend"], vec!["react-hooks".to_string()]);
    }

    #[test]
    fn test_first_matching_category_wins() {
        // "react" (Frontend) appears before "api" (Backend) in the table
        let entries = vec![entry("react-api-client", "react api client helpers")];
        let categories = build_categories(&entries);
        assert!(categories.contains_key("Frontend"));
        assert!(!categories.contains_key("Backend"));
    }

    #[test]
    fn test_unmatched_entries_go_to_other() {
        let entries = vec![entry("gardening", "Growing vegetables at home")];
        let categories = build_categories(&entries);
        assert_eq!(categories["Other"], vec!["gardening".to_string()]);
    }

    #[test]
    fn test_description_contributes_to_matching() {
        let entries = vec![entry("hardening", "OWASP security checklists")];
        let categories = build_categories(&entries);
        assert_eq!(categories["Security"], vec!["hardening".to_string()]);
    }
}
