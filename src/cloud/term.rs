use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::tokenizer::{SeparatorSet, Token};

/// TermFrequency
/// Tracks how often each term occurs within a single document.
/// Terms are folded to lowercase before counting, so every distinct
/// lowercase word appears exactly once as a key.
///
/// # Examples
/// ```
/// use tag_cloud::{SeparatorSet, TermFrequency};
/// let seps = SeparatorSet::default();
/// let mut freq = TermFrequency::new();
/// freq.add_text("Tag tag, TAG!", &seps);
/// assert_eq!(freq.term_count("tag"), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_counts: IndexMap<String, u32>,
    total_term_count: u64,
}

/// Building the counts
impl TermFrequency {
    pub fn new() -> Self {
        TermFrequency {
            term_counts: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Count one occurrence of `term`.
    /// The term is lowercased before it is used as a key.
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_counts.entry(term.to_lowercase()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// Tokenize `text` with `separators` and count every word run.
    /// Separator runs are discarded. One forward pass, no backtracking.
    pub fn add_text(&mut self, text: &str, separators: &SeparatorSet) -> &mut Self {
        for token in separators.tokens(text) {
            if let Token::Word(word) = token {
                self.add_term(word);
            }
        }
        self
    }

    /// Reset all counts.
    #[inline]
    pub fn clear(&mut self) {
        self.term_counts.clear();
        self.total_term_count = 0;
    }
}

/// Reading the counts
impl TermFrequency {
    /// Occurrences of `term` (0 if absent). `term` must be lowercase.
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        *self.term_counts.get(term).unwrap_or(&0)
    }

    /// Number of distinct terms.
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_counts.len()
    }

    /// Sum of all counts.
    #[inline]
    pub fn total_term_count(&self) -> u64 {
        self.total_term_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_counts.is_empty()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_counts.contains_key(term)
    }

    /// Count of the most frequent term, 0 when empty.
    #[inline]
    pub fn most_frequent_term_count(&self) -> u32 {
        self.term_counts.values().copied().max().unwrap_or(0)
    }

    /// All (term, count) pairs in insertion order.
    #[inline]
    pub fn term_count_vector_ref_str(&self) -> Vec<(&str, u32)> {
        self.term_counts
            .iter()
            .map(|(term, &count)| (term.as_str(), count))
            .collect()
    }

    /// All (term, count) pairs sorted by descending count.
    #[inline]
    pub fn sorted_frequency_vector(&self) -> Vec<(String, u32)> {
        let mut term_list: Vec<(String, u32)> = self
            .term_counts
            .iter()
            .map(|(term, &count)| (term.clone(), count))
            .collect();
        term_list.sort_by(|a, b| b.1.cmp(&a.1));
        term_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_is_folded_before_counting() {
        let seps = SeparatorSet::default();
        let mut freq = TermFrequency::new();
        freq.add_text("Tag, tag! TAG?", &seps);
        assert_eq!(freq.term_num(), 1);
        assert_eq!(freq.term_count("tag"), 3);
        assert_eq!(freq.total_term_count(), 3);
        assert!(freq.contains_term("tag"));
        assert!(!freq.contains_term("Tag"));
    }

    #[test]
    fn separator_only_text_counts_nothing() {
        let seps = SeparatorSet::default();
        let mut freq = TermFrequency::new();
        freq.add_text(" .,!? \t\n", &seps);
        assert!(freq.is_empty());
        assert_eq!(freq.total_term_count(), 0);
        assert_eq!(freq.most_frequent_term_count(), 0);
    }

    #[test]
    fn counts_are_exact_over_a_whole_document() {
        let seps = SeparatorSet::default();
        let mut freq = TermFrequency::new();
        freq.add_text("the cat sat on the mat. THE CAT ran.", &seps);
        assert_eq!(freq.term_count("the"), 3);
        assert_eq!(freq.term_count("cat"), 2);
        assert_eq!(freq.term_count("sat"), 1);
        assert_eq!(freq.term_count("on"), 1);
        assert_eq!(freq.term_count("mat"), 1);
        assert_eq!(freq.term_count("ran"), 1);
        assert_eq!(freq.term_num(), 6);
        assert_eq!(freq.total_term_count(), 9);
        assert_eq!(freq.most_frequent_term_count(), 3);
    }

    #[test]
    fn sorted_frequency_vector_is_descending() {
        let seps = SeparatorSet::default();
        let mut freq = TermFrequency::new();
        freq.add_text("a a a b b c", &seps);
        let sorted = freq.sorted_frequency_vector();
        for pair in sorted.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        assert_eq!(sorted[0], ("a".to_string(), 3));
    }

    #[test]
    fn clear_resets_everything() {
        let mut freq = TermFrequency::new();
        freq.add_term("word").add_term("word");
        freq.clear();
        assert!(freq.is_empty());
        assert_eq!(freq.total_term_count(), 0);
    }
}
