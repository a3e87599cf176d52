//! Per-bucket weight aggregation.

use std::collections::BTreeMap;

use serde::Serialize;

use super::types::{FileRecord, PhaseBucket, ProjectScan};
use crate::swp::digit_reduce;
use crate::tags::TagSet;

/// Aggregated weight of one phase bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhaseWeight {
    /// Sum of the masses of every file in the bucket.
    pub mass: u64,
    /// `digit_reduce(mass)`.
    pub reduced: u8,
    /// Tags per file path, only for files carrying at least one tag.
    pub tags: BTreeMap<String, TagSet>,
}

/// Weights for all four buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhaseWeights {
    buckets: BTreeMap<PhaseBucket, PhaseWeight>,
}

impl PhaseWeights {
    pub fn get(&self, bucket: PhaseBucket) -> &PhaseWeight {
        // Every bucket is inserted by calculate_phase_weights.
        &self.buckets[&bucket]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PhaseBucket, &PhaseWeight)> {
        self.buckets.iter().map(|(bucket, weight)| (*bucket, weight))
    }

    /// Mass summed across buckets.
    pub fn total_mass(&self) -> u64 {
        self.buckets.values().map(|w| w.mass).sum()
    }
}

/// Sum file masses per bucket and reduce each sum to a digit.
pub fn calculate_phase_weights(records: &[FileRecord]) -> PhaseWeights {
    let mut buckets: BTreeMap<PhaseBucket, PhaseWeight> = PhaseBucket::ALL
        .into_iter()
        .map(|bucket| (bucket, PhaseWeight::default()))
        .collect();

    for record in records {
        let weight = buckets.entry(record.bucket).or_default();
        weight.mass += record.compression.mass;
        if !record.tags.is_empty() {
            weight.tags.insert(record.path.clone(), record.tags.clone());
        }
    }
    for weight in buckets.values_mut() {
        weight.reduced = digit_reduce(weight.mass);
    }

    PhaseWeights { buckets }
}

impl ProjectScan {
    pub fn weights(&self) -> PhaseWeights {
        calculate_phase_weights(&self.files)
    }
}
