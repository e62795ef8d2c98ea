//! Skill content loading
//!
//! Reads the full SKILL.md of an indexed entry, optionally inlining its
//! markdown resource files.

use std::path::Path;

use tracing::debug;

use crate::error::AppError;

use super::index::SkillEntry;

/// Load the full content of a skill.
///
/// With `include_resources`, each markdown resource is appended in sorted
/// order under a `# Resource:` heading. A vanished resources directory is
/// silent; a missing SKILL.md is an error, since the entry claimed one.
pub async fn load_skill(
    entry: &SkillEntry,
    skills_dir: &Path,
    include_resources: bool,
) -> Result<String, AppError> {
    let skill_path = skills_dir.join(&entry.dir_name).join("SKILL.md");
    let mut content = tokio::fs::read_to_string(&skill_path)
        .await
        .map_err(|_| AppError::NotFound(format!("Skill file missing: {}", skill_path.display())))?;

    if include_resources && entry.has_resources {
        let resource_dir = skills_dir.join(&entry.dir_name).join("resources");
        // resource_files is already sorted by the index build
        for file in &entry.resource_files {
            match tokio::fs::read_to_string(resource_dir.join(file)).await {
                Ok(resource_content) => {
                    content.push_str(&format!(
                        "\n\n---\n\n# Resource: {}\n\n{}",
                        file, resource_content
                    ));
                }
                Err(e) => {
                    debug!("Skipping unreadable resource {}: {}", file, e);
                }
            }
        }
    }

    Ok(content)
}
