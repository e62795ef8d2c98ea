//! Search index construction
//!
//! Scans a skills directory, extracts frontmatter, tokenizes names and
//! descriptions, and computes per-token IDF weights over the collection.
//! Index building is best-effort over I/O: an unreadable root yields an
//! empty index and unreadable or non-skill members are skipped.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::{debug, info};

use super::frontmatter::{parse_frontmatter, SkillFrontmatter};
use super::tokenize::tokenize;

/// One indexed skill document. Created once per index build, immutable
/// thereafter; search and dedup never mutate entries in place.
#[derive(Debug, Clone)]
pub struct SkillEntry {
    /// Directory name under the skills root
    pub dir_name: String,
    /// Parsed metadata header
    pub frontmatter: SkillFrontmatter,
    /// Union of name and description tokens, membership only
    pub search_tokens: HashSet<String>,
    /// Whether a resources/ directory with markdown files exists
    pub has_resources: bool,
    /// Markdown file names found under resources/
    pub resource_files: Vec<String>,
}

/// The queryable index: entries, IDF weights, and the document count.
/// Owned by whoever built it; search operates on a shared borrow.
#[derive(Debug, Default)]
pub struct SearchIndex {
    pub entries: Vec<SkillEntry>,
    pub idf_scores: HashMap<String, f64>,
    pub total_docs: usize,
}

/// List markdown files under `<skill_dir>/resources`, best-effort.
/// A missing or unreadable resources directory is an empty list.
async fn probe_resources(skill_dir: &Path) -> Vec<String> {
    let resource_dir = skill_dir.join("resources");
    let mut files = Vec::new();

    let Ok(mut read_dir) = tokio::fs::read_dir(&resource_dir).await else {
        return files;
    };
    while let Ok(Some(dirent)) = read_dir.next_entry().await {
        if let Some(name) = dirent.file_name().to_str() {
            if name.ends_with(".md") {
                files.push(name.to_string());
            }
        }
    }
    files.sort();
    files
}

/// List child directory names of the skills root, sorted for deterministic
/// entry order. An unreadable root yields an empty list.
async fn list_skill_dirs(skills_dir: &Path) -> Vec<String> {
    let mut dirs = Vec::new();

    let Ok(mut read_dir) = tokio::fs::read_dir(skills_dir).await else {
        return dirs;
    };
    while let Ok(Some(dirent)) = read_dir.next_entry().await {
        if let Some(name) = dirent.file_name().to_str() {
            dirs.push(name.to_string());
        }
    }
    dirs.sort();
    dirs
}

/// Build the search index over `skills_dir`.
///
/// Never fails: a missing or unreadable skills directory produces an empty
/// index, and members without valid frontmatter are silently skipped.
pub async fn build_index(skills_dir: &Path) -> SearchIndex {
    let mut entries: Vec<SkillEntry> = Vec::new();

    for dir_name in list_skill_dirs(skills_dir).await {
        let skill_dir = skills_dir.join(&dir_name);
        let skill_path = skill_dir.join("SKILL.md");

        let Ok(content) = tokio::fs::read_to_string(&skill_path).await else {
            continue;
        };

        let Some(frontmatter) = parse_frontmatter(&content) else {
            debug!("Skipping {}: no valid frontmatter", dir_name);
            continue;
        };

        let resource_files = probe_resources(&skill_dir).await;
        let has_resources = !resource_files.is_empty();

        let search_tokens: HashSet<String> = tokenize(&frontmatter.name)
            .into_iter()
            .chain(tokenize(&frontmatter.description))
            .collect();

        entries.push(SkillEntry {
            dir_name,
            frontmatter,
            search_tokens,
            has_resources,
            resource_files,
        });
    }

    // IDF pass: document frequency per token, then ln(total / df)
    let total_docs = entries.len();
    let mut doc_frequency: HashMap<&str, usize> = HashMap::new();
    for entry in &entries {
        for token in &entry.search_tokens {
            *doc_frequency.entry(token.as_str()).or_insert(0) += 1;
        }
    }

    let idf_scores = doc_frequency
        .into_iter()
        .map(|(token, df)| (token.to_string(), (total_docs as f64 / df as f64).ln()))
        .collect();

    info!("Indexed {} skills from {}", total_docs, skills_dir.display());

    SearchIndex {
        entries,
        idf_scores,
        total_docs,
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use std::fs;
    use std::path::Path;

    /// Write a minimal skill directory with the given frontmatter fields.
    pub fn write_skill(root: &Path, dir_name: &str, name: &str, description: &str) {
        let dir = root.join(dir_name);
        fs::create_dir_all(&dir).expect("create skill dir");
        let content = format!("---\nname: {name}\ndescription: {description}\n---\n\n# {name}\n");
        fs::write(dir.join("SKILL.md"), content).expect("write SKILL.md");
    }

    /// Add a resources/ directory with the given file names to a skill.
    pub fn write_resources(root: &Path, dir_name: &str, files: &[&str]) {
        let dir = root.join(dir_name).join("resources");
        fs::create_dir_all(&dir).expect("create resources dir");
        for file in files {
            fs::write(dir.join(file), format!("# {file}\n")).expect("write resource");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_fixtures::{write_resources, write_skill};
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_nonexistent_root_yields_empty_index() {
        let index = build_index(Path::new("/nonexistent/skills/root")).await;
        assert_eq!(index.total_docs, 0);
        assert!(index.entries.is_empty());
        assert!(index.idf_scores.is_empty());
    }

    #[tokio::test]
    async fn test_members_without_frontmatter_are_skipped() {
        let tmp = TempDir::new().expect("tempdir");
        write_skill(tmp.path(), "valid", "valid", "A valid skill");

        // Directory with a SKILL.md that has no header
        let plain = tmp.path().join("plain");
        std::fs::create_dir_all(&plain).expect("dir");
        std::fs::write(plain.join("SKILL.md"), "# No frontmatter here\n").expect("write");

        // Directory without any SKILL.md
        std::fs::create_dir_all(tmp.path().join("empty-dir")).expect("dir");

        // Stray file at the collection root
        std::fs::write(tmp.path().join("README.md"), "readme\n").expect("write");

        let index = build_index(tmp.path()).await;
        assert_eq!(index.total_docs, 1);
        assert_eq!(index.entries[0].dir_name, "valid");
    }

    #[tokio::test]
    async fn test_idf_rewards_rare_tokens() {
        let tmp = TempDir::new().expect("tempdir");
        // "skill" appears in 4 of 6 documents, "unit" in exactly 1
        write_skill(tmp.path(), "a", "alpha-skill", "first skill");
        write_skill(tmp.path(), "b", "beta-skill", "second skill");
        write_skill(tmp.path(), "c", "gamma", "third skill entry");
        write_skill(tmp.path(), "d", "delta", "skill metadata entry");
        write_skill(tmp.path(), "e", "epsilon", "another entry");
        write_skill(tmp.path(), "f", "zeta", "unit testing entry");

        let index = build_index(tmp.path()).await;
        assert_eq!(index.total_docs, 6);

        let idf_unit = index.idf_scores["unit"];
        let idf_skill = index.idf_scores["skill"];
        assert!(idf_unit > idf_skill);
        assert!(idf_unit >= 0.0);
        assert!(idf_skill >= 0.0);
        assert_eq!(idf_unit, (6.0f64 / 1.0).ln());
        assert_eq!(idf_skill, (6.0f64 / 4.0).ln());
    }

    #[tokio::test]
    async fn test_token_set_unions_name_and_description() {
        let tmp = TempDir::new().expect("tempdir");
        write_skill(tmp.path(), "basic-skill", "basic-skill", "Unit testing helpers");

        let index = build_index(tmp.path()).await;
        let tokens = &index.entries[0].search_tokens;
        for expected in ["basic-skill", "basic", "skill", "unit", "testing", "helpers"] {
            assert!(tokens.contains(expected), "missing token {expected}");
        }
    }

    #[tokio::test]
    async fn test_resource_probe() {
        let tmp = TempDir::new().expect("tempdir");
        write_skill(tmp.path(), "with-res", "with-res", "has resources");
        write_resources(tmp.path(), "with-res", &["guide.md", "notes.txt", "api.md"]);
        write_skill(tmp.path(), "without-res", "without-res", "no resources");

        let index = build_index(tmp.path()).await;
        let with_res = index
            .entries
            .iter()
            .find(|e| e.dir_name == "with-res")
            .expect("entry");
        assert!(with_res.has_resources);
        // Only markdown files count, sorted by name
        assert_eq!(with_res.resource_files, vec!["api.md", "guide.md"]);

        let without_res = index
            .entries
            .iter()
            .find(|e| e.dir_name == "without-res")
            .expect("entry");
        assert!(!without_res.has_resources);
        assert!(without_res.resource_files.is_empty());
    }
}
