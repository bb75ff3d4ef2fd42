use std::collections::BTreeMap;

use super::models::TermVector;

/// The corpus is always the pair {resume, job description}.
const CORPUS_SIZE: f64 = 2.0;

/// Raw term occurrence counts for one document, plus the token total the
/// frequencies are normalized by.
#[derive(Debug, Clone, Default)]
pub struct DocumentCounts {
    pub counts: BTreeMap<String, usize>,
    pub total_tokens: usize,
}

pub fn count_terms(tokens: impl Iterator<Item = String>) -> DocumentCounts {
    let mut counts = BTreeMap::new();
    let mut total_tokens = 0;
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
        total_tokens += 1;
    }

    DocumentCounts {
        counts,
        total_tokens,
    }
}

/// Smoothed idf over the two-document corpus: `ln((1 + N) / (1 + df)) + 1`.
/// Strictly positive for every df in {1, 2}, so stored weights never
/// collapse to zero for terms the document actually contains.
fn idf(document_frequency: usize) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + document_frequency as f64)).ln() + 1.0
}

/// Builds the tf-idf vector for each document over the union vocabulary.
/// Pure and deterministic: the BTreeMap vocabulary is walked in sorted term
/// order, and a term absent from a document is simply not stored there.
pub fn build_vectors(resume: &DocumentCounts, jd: &DocumentCounts) -> (TermVector, TermVector) {
    let mut resume_vector = TermVector::new();
    let mut jd_vector = TermVector::new();

    let vocabulary: BTreeMap<&String, usize> = resume
        .counts
        .keys()
        .chain(jd.counts.keys())
        .map(|term| {
            let df = resume.counts.contains_key(term) as usize
                + jd.counts.contains_key(term) as usize;
            (term, df)
        })
        .collect();

    for (term, df) in vocabulary {
        let weight = idf(df);
        if let Some(&count) = resume.counts.get(term) {
            if resume.total_tokens > 0 {
                let tf = count as f64 / resume.total_tokens as f64;
                resume_vector.insert(term.clone(), tf * weight);
            }
        }
        if let Some(&count) = jd.counts.get(term) {
            if jd.total_tokens > 0 {
                let tf = count as f64 / jd.total_tokens as f64;
                jd_vector.insert(term.clone(), tf * weight);
            }
        }
    }

    (resume_vector, jd_vector)
}
