use std::collections::HashSet;

use once_cell::sync::Lazy;

use super::models::EngineSettings;

/// Fixed English stop-word list. Small and deterministic on purpose; tests
/// pin its contents so a silent edit cannot shift scores.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "about", "above", "after", "again", "all", "an", "and", "any", "are", "as", "at", "be",
        "been", "before", "being", "below", "between", "both", "but", "by", "can", "did", "do",
        "does", "doing", "down", "during", "each", "few", "for", "from", "further", "had", "has",
        "have", "having", "he", "her", "here", "hers", "him", "his", "how", "if", "in", "into",
        "is", "it", "its", "just", "me", "more", "most", "my", "no", "nor", "not", "now", "of",
        "off", "on", "once", "only", "or", "other", "our", "out", "over", "own", "same", "she",
        "should", "so", "some", "such", "than", "that", "the", "their", "them", "then", "there",
        "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "very",
        "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
        "will", "with", "you", "your",
    ]
    .into_iter()
    .collect()
});

/// Lazily yields normalized terms from `text` in order of first appearance,
/// duplicates retained. Runs of non-alphanumeric characters act as
/// separators; tokens are lowercased, then dropped if shorter than the
/// configured minimum or (optionally) on the stop-word list. Calling the
/// function again restarts the pass.
pub fn tokenize<'a>(
    text: &'a str,
    settings: &'a EngineSettings,
) -> impl Iterator<Item = String> + 'a {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|raw| !raw.is_empty())
        .map(|raw| raw.to_lowercase())
        .filter(move |token| token.chars().count() >= settings.min_token_chars)
        .filter(move |token| !settings.filter_stop_words || !STOP_WORDS.contains(token.as_str()))
}
