//! Keyword frequency ranking over listing text.
//!
//! Feeds the dashboard's "most wanted skills" panel: concatenate the
//! summaries, normalize, drop filler words, count what remains.

use std::collections::HashMap;

/// Words so common in job ads that counting them tells you nothing.
pub const STOPWORDS: &[&str] = &[
    "and", "or", "the", "a", "to", "of", "in", "for", "with", "on", "at", "as", "you", "we", "our",
    "your", "an", "is", "are", "will", "be", "team", "role", "experience", "work", "working",
    "ability", "skills", "required", "responsible", "including",
];

/// Returns the `limit` most frequent keywords across `texts`, descending
/// by count. Ties keep the order in which the tokenizer first saw the
/// token, so the ranking is deterministic for a fixed input.
///
/// Normalization: lowercase, then every character outside `a-z`,
/// whitespace and `+` becomes a space. The `+` is kept on purpose so
/// tokens like `c++` survive the punctuation sweep. Tokens of length
/// two or less and stopwords are discarded before counting.
pub fn top_keywords<S: AsRef<str>>(texts: &[S], limit: usize) -> Vec<(String, usize)> {
    let joined = texts
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let normalized: String = joined
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_whitespace() || c == '+' {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for token in normalized.split_whitespace() {
        if token.len() <= 2 || STOPWORDS.contains(&token) {
            continue;
        }
        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            first_seen.push(token);
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = first_seen
        .into_iter()
        .map(|token| (token.to_string(), counts[token]))
        .collect();
    // Stable sort: equal counts stay in first-occurrence order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_sample_summary() {
        let input = ["Strong SaaS sales and growth experience required"];
        let ranked = top_keywords(&input, 5);
        // "and", "experience", "required" are stopwords; the rest stay
        // in tokenizer order at count 1.
        assert_eq!(
            ranked,
            vec![
                ("strong".to_string(), 1),
                ("saas".to_string(), 1),
                ("sales".to_string(), 1),
                ("growth".to_string(), 1),
            ]
        );
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let ranked = top_keywords(&[] as &[&str], 10);
        assert!(ranked.is_empty());
    }

    #[test]
    fn keeps_c_plus_plus() {
        let ranked = top_keywords(&["C++ developer"], 5);
        assert!(ranked.contains(&("c++".to_string(), 1)));
    }

    #[test]
    fn counts_across_strings_and_sorts_descending() {
        let input = ["python and sql", "python developer", "sql or python"];
        let ranked = top_keywords(&input, 10);
        assert_eq!(ranked[0], ("python".to_string(), 3));
        assert_eq!(ranked[1], ("sql".to_string(), 2));
        // Frequencies never increase along the ranking.
        for pair in ranked.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn never_returns_stopwords_or_short_tokens() {
        let input = ["The team will be working on ML and AI for our clients"];
        let ranked = top_keywords(&input, 50);
        for (token, _) in &ranked {
            assert!(token.len() > 2, "short token {token:?} leaked through");
            assert!(
                !STOPWORDS.contains(&token.as_str()),
                "stopword {token:?} leaked through"
            );
        }
        // "ml"/"ai" are too short, the rest of the sentence is stopwords.
        assert_eq!(ranked, vec![("clients".to_string(), 1)]);
    }

    #[test]
    fn punctuation_and_digits_become_separators() {
        let ranked = top_keywords(&["kubernetes, docker; kubernetes/terraform 2024"], 10);
        assert_eq!(ranked[0], ("kubernetes".to_string(), 2));
        assert!(ranked.contains(&("docker".to_string(), 1)));
        assert!(ranked.contains(&("terraform".to_string(), 1)));
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn limit_larger_than_vocabulary_returns_everything() {
        let ranked = top_keywords(&["rust rust golang"], 100);
        assert_eq!(
            ranked,
            vec![("rust".to_string(), 2), ("golang".to_string(), 1)]
        );
    }

    #[test]
    fn ranking_is_idempotent() {
        let input = ["Senior C++ engineer, embedded systems, embedded Linux"];
        assert_eq!(top_keywords(&input, 5), top_keywords(&input, 5));
    }
}
