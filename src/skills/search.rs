//! Keyword search over the skill index
//!
//! IDF-weighted token overlap with substring fallback, exact-phrase
//! bonuses for name and description hits, normalized by the number of
//! query tokens that matched so unmatched words never dilute a result.

use serde::Serialize;

use super::index::SearchIndex;
use super::tokenize::tokenize_query;

/// Query words carrying no search signal. Closed set; a query made
/// entirely of stop-words still searches on its original tokens.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "build", "write", "create", "use", "using", "when", "this", "for", "from",
    "with", "that", "are", "has", "its", "was", "will", "your", "you", "is", "it", "in", "on",
    "of", "to", "be", "by", "at", "as", "and", "help", "need", "want", "how", "do", "can", "me",
    "i", "my", "show", "about", "what", "should", "please",
];

/// A ranked search hit. A projection of the matched entry, holding no
/// reference back into the index.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub name: String,
    pub dir_name: String,
    pub description: String,
    pub score: f64,
    pub has_resources: bool,
}

/// Default number of results returned by [`search_skills`].
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Search the index with a free-text query.
///
/// Returns at most `limit` results sorted by descending score, each score
/// rounded to two decimals. An empty or fully unmatched query returns an
/// empty list. `limit` is taken as-is; `0` yields an empty list.
pub fn search_skills(index: &SearchIndex, query: &str, limit: usize) -> Vec<SearchResult> {
    let raw_tokens = tokenize_query(query);
    if raw_tokens.is_empty() {
        return Vec::new();
    }

    // Filter stop-words, but keep all if every token is a stop-word
    let filtered: Vec<&String> = raw_tokens
        .iter()
        .filter(|t| !STOP_WORDS.contains(&t.as_str()))
        .collect();
    let meaningful: Vec<&String> = if filtered.is_empty() {
        raw_tokens.iter().collect()
    } else {
        filtered
    };

    // De-duplicate query tokens so repeated words cannot inflate the score
    let mut query_tokens: Vec<&str> = Vec::new();
    for token in meaningful {
        if !query_tokens.contains(&token.as_str()) {
            query_tokens.push(token.as_str());
        }
    }

    let query_lower = query.to_lowercase();

    // Tokens never seen in any document are treated as very rare
    let default_idf = ((index.total_docs.max(1) + 1) as f64).ln();

    let mut results: Vec<SearchResult> = Vec::new();

    for entry in &index.entries {
        let mut score = 0.0;
        let mut matched_tokens = 0usize;

        for qt in &query_tokens {
            let idf_weight = index.idf_scores.get(*qt).copied().unwrap_or(default_idf);
            let mut best_token_score = 0.0f64;

            for st in &entry.search_tokens {
                if st == qt {
                    best_token_score = best_token_score.max(idf_weight);
                } else if qt.len() >= 2 && st.len() >= 2 && (st.contains(qt) || qt.contains(st.as_str())) {
                    best_token_score = best_token_score.max(idf_weight * 0.5);
                }
            }

            if best_token_score > 0.0 {
                matched_tokens += 1;
            }
            score += best_token_score;
        }

        // Exact phrase bonuses
        if entry.frontmatter.name.to_lowercase().contains(&query_lower) {
            score += 2.0;
        }
        if entry
            .frontmatter
            .description
            .to_lowercase()
            .contains(&query_lower)
        {
            score += 1.0;
        }

        // Normalize by matched token count: unmatched tokens don't dilute
        score /= matched_tokens.max(1) as f64;

        if score >= 0.5 {
            results.push(SearchResult {
                name: entry.frontmatter.name.clone(),
                dir_name: entry.dir_name.clone(),
                description: entry.frontmatter.description.clone(),
                score: (score * 100.0).round() / 100.0,
                has_resources: entry.has_resources,
            });
        }
    }

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(limit);
    results
}
