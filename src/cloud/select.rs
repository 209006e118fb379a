use serde::{Deserialize, Serialize};

use super::term::TermFrequency;

/// A selected term with its count and assigned font-size class.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RankedTerm {
    pub term: String,
    pub count: u32,
    pub weight: u32,
}

/// The top-N slice of a frequency map, alphabetically ordered, together with
/// the smallest and largest count among the selected terms.
///
/// The min/max pair travels with the selection so that weight scaling never
/// has to look anything up elsewhere; both are 0 when the selection is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub terms: Vec<(String, u32)>,
    pub min_count: u32,
    pub max_count: u32,
}

impl Selection {
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Select the `requested` most frequent terms of `freq`.
///
/// Two total orderings are applied in sequence, each as a plain sort key:
/// - selection order: count descending, ties broken by term ascending so the
///   cut at the boundary is deterministic
/// - output order: term ascending
///
/// Term keys are lowercase, so the alphabetical orderings are
/// case-insensitive by construction. `requested >= freq.term_num()` selects
/// everything; `requested == 0` or an empty map yields an empty selection.
pub fn select_top(freq: &TermFrequency, requested: usize) -> Selection {
    let mut terms: Vec<(String, u32)> = freq
        .term_count_vector_ref_str()
        .into_iter()
        .map(|(term, count)| (term.to_string(), count))
        .collect();

    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    terms.truncate(requested);
    terms.sort_by(|a, b| a.0.cmp(&b.0));

    let min_count = terms.iter().map(|&(_, c)| c).min().unwrap_or(0);
    let max_count = terms.iter().map(|&(_, c)| c).max().unwrap_or(0);

    Selection {
        terms,
        min_count,
        max_count,
    }
}
