//! Vector-based ranking pass: cosine similarity against query vectors.

use std::collections::HashMap;

use crate::corpus::Publication;
use crate::error::Result;
use crate::rank::{rank_of, MissingKeyPolicy, QueryMode};
use crate::similarity::cosine_similarity;

/// Rank every publication against queries derived from its own metadata.
///
/// For each publication and each of its query-keys present in
/// `query_vectors`, computes the publication's cosine similarity to the
/// query vector, every publication's similarity to the same vector, and the
/// target's rank among them. The target's own score is part of the
/// candidate list, so its rank is bounded by the publication count.
///
/// Keys absent from the table are handled according to `policy`.
pub fn vector_ranks(
    publications: &[Publication],
    query_vectors: &HashMap<String, Vec<f64>>,
    mode: QueryMode,
    policy: MissingKeyPolicy,
) -> Result<Vec<usize>> {
    log::info!(
        "Computing {} ranks over {} publications",
        mode.label(),
        publications.len()
    );

    let mut ranks = Vec::new();
    for (index, publication) in publications.iter().enumerate() {
        log::debug!("Ranking publication {}/{}", index + 1, publications.len());

        let keys: &[String] = match mode {
            QueryMode::Tags => &publication.tags,
            QueryMode::Titles => std::slice::from_ref(&publication.title),
        };

        for key in keys {
            let Some(query_vector) = query_vectors.get(key) else {
                match policy {
                    MissingKeyPolicy::SkipKey => continue,
                    MissingKeyPolicy::SkipItem => break,
                }
            };

            let similarity = cosine_similarity(&publication.embedding, query_vector)?;

            let mut candidates = Vec::with_capacity(publications.len());
            for candidate in publications {
                candidates.push(cosine_similarity(query_vector, &candidate.embedding)?);
            }

            ranks.push(rank_of(&similarity, &candidates));
        }
    }

    log::info!("Computed {} {} ranks", ranks.len(), mode.label());
    Ok(ranks)
}
