use std::collections::HashMap;

use crate::domain::model::IndexPair;

/// Finds two distinct positions in `nums` whose values sum to `target`.
///
/// Single left-to-right scan keeping a map from "value still needed to
/// complete a pair" to the position that recorded the need. Returns the pair
/// at the first position whose value satisfies an earlier need; `None` when
/// no pair sums to `target`, which is a normal outcome rather than an error.
pub fn find_index_pair(nums: &[i64], target: i64) -> Option<IndexPair> {
    let mut needed: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (i, &value) in nums.iter().enumerate() {
        match needed.get(&value) {
            // A duplicate value may only match a position distinct from the
            // current one.
            Some(&recorded) if recorded != i => {
                return Some(IndexPair {
                    first: i,
                    second: recorded,
                });
            }
            _ => {}
        }
        needed.insert(target - value, i);
    }

    None
}
