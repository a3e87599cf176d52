//! Tag values keyed by their compressed weight.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::TagSet;
use crate::swp::compress_word;

/// Original tag value plus its tie-break total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedTag {
    pub value: String,
    pub total: u64,
}

/// `"<kind>_<reduced>"` → tag value.
pub type CompressedTagMap = BTreeMap<String, CompressedTag>;

/// Compress every `(kind, value)` pair into a `"<kind>_<reduced>"` key.
///
/// Pairs are applied in iteration order, so on a key collision the last
/// pair wins.
pub fn build_compressed_map<I, K, V>(tags: I) -> CompressedTagMap
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut compressed = CompressedTagMap::new();
    for (kind, value) in tags {
        let value = value.as_ref();
        let weight = compress_word(value);
        compressed.insert(
            format!("{}_{}", kind.as_ref(), weight.reduced),
            CompressedTag {
                value: value.to_string(),
                total: weight.total,
            },
        );
    }
    compressed
}

impl TagSet {
    /// Compressed map of this tag set.
    pub fn compressed(&self) -> CompressedTagMap {
        build_compressed_map(self.iter().map(|(kind, value)| (kind.as_str(), value)))
    }
}
