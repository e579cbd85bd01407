// src/core/blocks.rs

use std::collections::BTreeMap;

/// Longest run of consecutive seat numbers within any single row.
///
/// Per row: sort ascending, one pass tracking current/best run length.
/// A gap resets the run to 1, so an isolated seat still counts as a run
/// of 1. A row that collected at least one seat therefore yields >= 1;
/// an empty row yields 0, as does an empty map.
pub fn largest_contiguous_block(rows: &BTreeMap<String, Vec<i64>>) -> usize {
    let mut largest = 0;
    for seats in rows.values() {
        if seats.is_empty() {
            continue;
        }
        let mut seq = seats.clone();
        seq.sort_unstable();

        let mut current = 1;
        let mut best = 1;
        for pair in seq.windows(2) {
            if pair[1] == pair[0] + 1 {
                current += 1;
                best = best.max(current);
            } else {
                current = 1;
            }
        }
        largest = largest.max(best);
    }
    largest
}
