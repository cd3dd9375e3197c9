use serde::{Deserialize, Serialize};

use crate::utils::error::Result;

/// Zero-based positions of two elements answering a pair-sum query.
///
/// `first` is the later position (where the scan found the match), `second`
/// the earlier one that recorded the need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexPair {
    pub first: usize,
    pub second: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PairSumReport {
    pub target: i64,
    pub indices: Option<IndexPair>,
}

impl PairSumReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionCompareReport {
    pub v1: String,
    pub v2: String,
    /// -1, 0 or 1.
    pub ordering: i32,
}

impl VersionCompareReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
