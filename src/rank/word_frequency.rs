//! Word-frequency ranking pass: literal token-overlap counts.

use std::collections::HashMap;

use crate::corpus::TextPublication;
use crate::rank::{rank_of, QueryMode};
use crate::similarity::word_overlap_score;

/// Rank every publication by raw token-overlap counts.
///
/// For each publication and each of its query-keys, the scored phrase set is
/// the configured phrasings for that key with the key itself appended. A key
/// without an entry in `phrasings` is still scored, against the key alone.
pub fn word_frequency_ranks(
    publications: &[TextPublication],
    phrasings: &HashMap<String, Vec<String>>,
    mode: QueryMode,
) -> Vec<usize> {
    log::info!(
        "Computing word-frequency {} ranks over {} publications",
        mode.label(),
        publications.len()
    );

    let mut ranks = Vec::new();
    for (index, publication) in publications.iter().enumerate() {
        log::debug!("Scoring publication {}/{}", index + 1, publications.len());

        let keys: &[String] = match mode {
            QueryMode::Tags => &publication.tags,
            QueryMode::Titles => std::slice::from_ref(&publication.title),
        };

        for key in keys {
            let mut phrases = phrasings.get(key).cloned().unwrap_or_default();
            phrases.push(key.clone());

            let frequency = word_overlap_score(&phrases, &publication.text);
            let candidates: Vec<usize> = publications
                .iter()
                .map(|candidate| word_overlap_score(&phrases, &candidate.text))
                .collect();

            ranks.push(rank_of(&frequency, &candidates));
        }
    }

    log::info!("Computed {} word-frequency {} ranks", ranks.len(), mode.label());
    ranks
}
