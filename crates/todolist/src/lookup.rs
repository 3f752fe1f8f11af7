//! Title suggestions for lookups that found nothing.
//!
//! Title lookups themselves are exact, including case. When one fails, the
//! closest existing title is offered so callers can report "did you mean ...?".

use strsim::levenshtein;

/// Maximum Levenshtein distance to consider a title as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Finds the best matching title from a list of candidates using Levenshtein distance.
///
/// Distance is measured case-insensitively, so a title differing only in case
/// is the closest possible suggestion. Candidates byte-equal to the query are
/// skipped since an exact lookup would already have found them. Ties go to the
/// earliest candidate.
pub(crate) fn find_similar_title<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<&'a str> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = candidates
        .filter(|title| !title.is_empty() && *title != query)
        .map(|title| (title, levenshtein(&query_lower, &title.to_lowercase())))
        .min_by_key(|(_, d)| *d)?;

    if best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_similar_title_typo() {
        let titles = ["Buy milk", "Clean room", "Go to the gym"];
        assert_eq!(
            find_similar_title("Buy mlk", titles.iter().copied()),
            Some("Buy milk")
        );
    }

    #[test]
    fn test_find_similar_title_case_only_difference() {
        let titles = ["Buy milk"];
        assert_eq!(
            find_similar_title("BUY MILK", titles.iter().copied()),
            Some("Buy milk")
        );
    }

    #[test]
    fn test_find_similar_title_skips_byte_equal() {
        let titles = ["Buy milk"];
        assert_eq!(find_similar_title("Buy milk", titles.iter().copied()), None);

        // Another candidate can still be suggested next to an exact one
        let titles = ["Buy milk", "buy milk"];
        assert_eq!(
            find_similar_title("Buy milk", titles.iter().copied()),
            Some("buy milk")
        );
    }

    #[test]
    fn test_find_similar_title_too_far() {
        let titles = ["Buy milk", "Clean room"];
        assert_eq!(
            find_similar_title("Walk the dog", titles.iter().copied()),
            None
        );
    }

    #[test]
    fn test_find_similar_title_no_candidates() {
        assert_eq!(find_similar_title("anything", std::iter::empty()), None);
    }

    #[test]
    fn test_find_similar_title_skips_empty() {
        let titles = ["", "ab"];
        assert_eq!(find_similar_title("a", titles.iter().copied()), Some("ab"));
    }

    #[test]
    fn test_find_similar_title_tie_prefers_first() {
        let titles = ["cat", "car"];
        assert_eq!(find_similar_title("ca", titles.iter().copied()), Some("cat"));
    }
}
