//! Duplicate detection over a skill collection
//!
//! Exact duplicates share an identical (name, description) pair, grouped by
//! content hash. Near duplicates have Jaccard word similarity above 0.8 on
//! their descriptions. The scan is quadratic; skill collections are small
//! and this runs on demand, not per query.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;
use sha2::{Digest, Sha256};

use super::frontmatter::parse_frontmatter;

/// Identity of one scanned skill, as used in duplicate reports
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMeta {
    pub dir_name: String,
    pub name: String,
    pub description: String,
}

/// A pair of skills whose descriptions are nearly identical
#[derive(Debug, Clone, Serialize)]
pub struct NearDuplicate {
    pub pair: (SkillMeta, SkillMeta),
    pub similarity: f64,
}

/// Exact-duplicate groups and near-duplicate pairs. The two collections
/// are disjoint: an exact pair is never also reported as near.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateReport {
    pub exact_duplicates: Vec<Vec<SkillMeta>>,
    pub near_duplicates: Vec<NearDuplicate>,
}

/// Jaccard similarity of two descriptions over lowercased,
/// whitespace-split word sets. Both empty is 1, exactly one empty is 0.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let words_a: std::collections::HashSet<String> =
        a.to_lowercase().split_whitespace().map(str::to_string).collect();
    let words_b: std::collections::HashSet<String> =
        b.to_lowercase().split_whitespace().map(str::to_string).collect();

    if words_a.is_empty() && words_b.is_empty() {
        return 1.0;
    }
    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }

    let intersection = words_a.intersection(&words_b).count();
    let union = words_a.len() + words_b.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Content hash over the identity pair used for exact-duplicate grouping.
fn identity_hash(name: &str, description: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(b"\n");
    hasher.update(description.as_bytes());
    hex::encode(hasher.finalize())
}

/// Scan `skills_dir` and report exact and near duplicates.
///
/// Never fails: a missing or unreadable collection yields an empty report,
/// and members without valid frontmatter are skipped. Near-duplicate
/// similarity must be strictly greater than 0.8 to be reported.
pub async fn find_duplicates(skills_dir: &Path) -> DuplicateReport {
    let mut skills: Vec<SkillMeta> = Vec::new();

    let Ok(mut read_dir) = tokio::fs::read_dir(skills_dir).await else {
        return DuplicateReport::default();
    };

    let mut dir_names: Vec<String> = Vec::new();
    while let Ok(Some(dirent)) = read_dir.next_entry().await {
        if let Some(name) = dirent.file_name().to_str() {
            dir_names.push(name.to_string());
        }
    }
    dir_names.sort();

    for dir_name in dir_names {
        let skill_path = skills_dir.join(&dir_name).join("SKILL.md");
        let Ok(content) = tokio::fs::read_to_string(&skill_path).await else {
            continue;
        };
        let Some(fm) = parse_frontmatter(&content) else {
            continue;
        };
        skills.push(SkillMeta {
            dir_name,
            name: fm.name,
            description: fm.description,
        });
    }

    // Exact duplicates: identical name + description, grouped by hash
    let mut hash_groups: HashMap<String, Vec<SkillMeta>> = HashMap::new();
    for skill in &skills {
        hash_groups
            .entry(identity_hash(&skill.name, &skill.description))
            .or_default()
            .push(skill.clone());
    }

    let mut exact_duplicates: Vec<Vec<SkillMeta>> = hash_groups
        .into_values()
        .filter(|group| group.len() > 1)
        .collect();
    exact_duplicates.sort_by(|a, b| a[0].dir_name.cmp(&b[0].dir_name));

    // Near duplicates: Jaccard word similarity > 0.8 on descriptions
    let mut near_duplicates: Vec<NearDuplicate> = Vec::new();
    for i in 0..skills.len() {
        for j in (i + 1)..skills.len() {
            let a = &skills[i];
            let b = &skills[j];
            // Exact dupes are already reported
            if a.name == b.name && a.description == b.description {
                continue;
            }
            if a.description.is_empty() || b.description.is_empty() {
                continue;
            }

            let similarity = jaccard_similarity(&a.description, &b.description);
            if similarity > 0.8 {
                near_duplicates.push(NearDuplicate {
                    pair: (a.clone(), b.clone()),
                    similarity: (similarity * 100.0).round() / 100.0,
                });
            }
        }
    }

    DuplicateReport {
        exact_duplicates,
        near_duplicates,
    }
}
