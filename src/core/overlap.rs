use super::models::{OverlapEntry, TermVector};

/// Ranks the terms weighted above zero in both documents by the product of
/// their per-document weights, descending. Equal products fall back to
/// ascending term order so the output is stable across runs. Returns at most
/// `k` entries, never padded.
pub fn top_overlap(
    resume_vector: &TermVector,
    jd_vector: &TermVector,
    k: usize,
) -> Vec<OverlapEntry> {
    let mut entries: Vec<OverlapEntry> = resume_vector
        .iter()
        .filter_map(|(term, &resume_tf_idf)| {
            jd_vector.get(term).map(|&jd_tf_idf| OverlapEntry {
                term: term.clone(),
                resume_tf_idf,
                jd_tf_idf,
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        let product_a = a.resume_tf_idf * a.jd_tf_idf;
        let product_b = b.resume_tf_idf * b.jd_tf_idf;
        product_b
            .total_cmp(&product_a)
            .then_with(|| a.term.cmp(&b.term))
    });
    entries.truncate(k);

    entries
}
