//! Skill collection engine: frontmatter extraction, tokenization,
//! index building, ranked search, duplicate detection, and the
//! collaborator-level loader and category table.

pub mod categories;
pub mod dedup;
pub mod frontmatter;
pub mod index;
pub mod loader;
pub mod search;
pub mod tokenize;

pub use dedup::{find_duplicates, DuplicateReport};
pub use index::{build_index, SearchIndex, SkillEntry};
pub use search::{search_skills, SearchResult, DEFAULT_SEARCH_LIMIT};
