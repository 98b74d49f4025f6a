// nearest-compromised-password lookup

use crate::index::CorpusIndex;

/// outcome of matching one password against the corpus. owned by a single
/// analysis request; never cached or shared across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityResult {
    /// globally nearest corpus entry (None only for an empty corpus)
    pub nearest: Option<String>,
    /// exact edit distance to that entry
    pub distance: Option<usize>,
    /// true if the distance is within the configured risk threshold
    pub within_threshold: bool,
}

/// find the nearest compromised password and whether it is close enough to
/// count as a risk. the bounded query runs first so the index can prune;
/// if nothing lies within the threshold, an unbounded fallback still
/// reports the global nearest so the response always carries a distance.
pub fn find_nearest(password: &str, index: &CorpusIndex, threshold: usize) -> SimilarityResult {
    if let Some(hit) = index.query_within(password, threshold) {
        return SimilarityResult {
            nearest: Some(hit.entry),
            distance: Some(hit.distance),
            within_threshold: true,
        };
    }

    match index.nearest(password) {
        Some(hit) => SimilarityResult {
            nearest: Some(hit.entry),
            distance: Some(hit.distance),
            within_threshold: false,
        },
        None => SimilarityResult {
            nearest: None,
            distance: None,
            within_threshold: false,
        },
    }
}
