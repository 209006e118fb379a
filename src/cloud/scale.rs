use super::select::{RankedTerm, Selection};

/// The largest font-size class a term can receive.
pub const MAX_WEIGHT: u32 = 48;
/// The class used when every selected term has the same count.
pub const DEFAULT_WEIGHT: u32 = 19;

/// Map each selected term's count to a font-size class in `[0, MAX_WEIGHT]`
/// by linear interpolation between the selection's min and max counts.
///
/// Pure function of the selection; it carries no state across documents and
/// is simply recomputed when the selection changes. An empty selection yields
/// an empty vector, so the degenerate min == max == 0 case never divides.
pub fn weigh(selection: &Selection) -> Vec<RankedTerm> {
    selection
        .terms
        .iter()
        .map(|(term, count)| RankedTerm {
            term: term.clone(),
            count: *count,
            weight: weight_for(*count, selection.min_count, selection.max_count),
        })
        .collect()
}

/// Font-size class for one count.
///
/// Widened to u64 for the multiply so `MAX_WEIGHT * (count - min)` cannot
/// overflow; the division floors.
#[inline]
pub fn weight_for(count: u32, min_count: u32, max_count: u32) -> u32 {
    if min_count == max_count {
        return DEFAULT_WEIGHT;
    }
    let scaled = (MAX_WEIGHT as u64 * count.saturating_sub(min_count) as u64)
        / (max_count - min_count) as u64;
    (scaled as u32).min(MAX_WEIGHT)
}
