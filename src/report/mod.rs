//! Ranked profile reports over a byte count map.
//!
//! Hot fields are the paths that occupy the most payload bytes; they are
//! the primary targets when trimming a schema or questioning a payload's
//! size. The report schema is versioned to allow future evolution.

use crate::counter::ByteCountMap;
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};

/// A single hot field: one path and its share of the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotField {
    /// Dotted path of the field (e.g., "favoriteNumber.long")
    pub path: String,

    /// Bytes occupied by this path
    pub bytes: u64,

    /// Percentage of the total payload
    pub percentage: f64,
}

/// Top-level profile structure for report consumers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ByteProfile {
    /// Schema version for compatibility checking
    pub version: String,

    /// Total bytes attributed by the counting pass
    pub total_bytes: u64,

    /// Top paths, ranked by byte count (descending)
    pub hot_fields: Vec<HotField>,

    /// Timestamp when the profile was generated
    pub generated_at: String,
}

/// Builds a ranked profile of the `top_n` most expensive paths.
///
/// Ties keep decode order (the sort is stable), so repeated runs over
/// the same map rank identically.
pub fn to_profile(counts: &ByteCountMap, top_n: usize) -> ByteProfile {
    let total_bytes = counts.total_bytes();
    debug!("ranking {} paths (top {top_n})", counts.len());

    let mut ranked: Vec<(String, u64)> = counts
        .iter()
        .map(|(path, bytes)| (path.to_string(), bytes))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let hot_fields = ranked
        .into_iter()
        .take(top_n)
        .map(|(path, bytes)| HotField {
            path,
            bytes,
            percentage: if total_bytes > 0 {
                (bytes as f64 / total_bytes as f64) * 100.0
            } else {
                0.0
            },
        })
        .collect();

    ByteProfile {
        version: SCHEMA_VERSION.to_string(),
        total_bytes,
        hot_fields,
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Serializes a profile to pretty-printed JSON (for report consumers and
/// tests; writing it anywhere is the caller's business).
pub fn profile_to_string(profile: &ByteProfile) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(profile)
}

/// Byte distribution statistics
///
/// Returned from [`byte_distribution`].
#[derive(Debug, Clone, Default)]
pub struct ByteDistribution {
    /// Total bytes across all entries
    pub total_bytes: u64,

    /// Number of recorded paths
    pub entry_count: usize,

    /// Mean bytes per entry
    pub mean_bytes_per_entry: u64,

    /// Median bytes per entry
    pub median_bytes_per_entry: u64,

    /// Bytes occupied by the top 10% of entries
    pub top_10_percent_bytes: u64,

    /// Percentage of total bytes in the top 10%
    pub top_10_percent_percentage: f64,
}

impl ByteDistribution {
    /// Returns true if the top 10% of entries occupy more than 80% of
    /// the payload - a strong hint that one or two fields dominate.
    pub fn is_highly_concentrated(&self) -> bool {
        self.top_10_percent_percentage > 80.0
    }

    /// Human-readable one-liner for logging.
    pub fn summary(&self) -> String {
        format!(
            "Total: {} bytes | Entries: {} | Mean: {} | Median: {} | Top 10%: {:.1}%",
            self.total_bytes,
            self.entry_count,
            self.mean_bytes_per_entry,
            self.median_bytes_per_entry,
            self.top_10_percent_percentage
        )
    }
}

/// Calculates byte distribution statistics across the map's entries.
pub fn byte_distribution(counts: &ByteCountMap) -> ByteDistribution {
    if counts.is_empty() {
        return ByteDistribution::default();
    }

    let mut weights: Vec<u64> = counts.iter().map(|(_, bytes)| bytes).collect();
    weights.sort_unstable_by(|a, b| b.cmp(a));

    let total: u64 = weights.iter().sum();
    let count = weights.len();
    let mean = total / count as u64;
    let median = weights[count / 2];

    let top_10_percent_count = (count as f64 * 0.1).ceil() as usize;
    let top_10_percent_bytes: u64 = weights.iter().take(top_10_percent_count).sum();

    ByteDistribution {
        total_bytes: total,
        entry_count: count,
        mean_bytes_per_entry: mean,
        median_bytes_per_entry: median,
        top_10_percent_bytes,
        top_10_percent_percentage: if total > 0 {
            (top_10_percent_bytes as f64 / total as f64) * 100.0
        } else {
            0.0
        },
    }
}
