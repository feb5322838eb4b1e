//! Search volume buckets and their weights

use std::str::FromStr;

/// Monthly search volume range as reported by the keyword planner.
///
/// `Unspecified` stands in for keywords without planner data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeBucket {
    Unspecified,
    UpTo10,
    UpTo100,
    UpTo1K,
    UpTo10K,
    UpTo100K,
    UpTo1M,
    UpTo10M,
}

/// Label that is not one of the known buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBucket(pub String);

impl VolumeBucket {
    pub const ALL: [VolumeBucket; 8] = [
        VolumeBucket::Unspecified,
        VolumeBucket::UpTo10,
        VolumeBucket::UpTo100,
        VolumeBucket::UpTo1K,
        VolumeBucket::UpTo10K,
        VolumeBucket::UpTo100K,
        VolumeBucket::UpTo1M,
        VolumeBucket::UpTo10M,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            VolumeBucket::Unspecified => "1.0",
            VolumeBucket::UpTo10 => "1 - 10",
            VolumeBucket::UpTo100 => "10 - 100",
            VolumeBucket::UpTo1K => "100 - 1K",
            VolumeBucket::UpTo10K => "1K - 10K",
            VolumeBucket::UpTo100K => "10K - 100K",
            VolumeBucket::UpTo1M => "100K - 1M",
            VolumeBucket::UpTo10M => "1M - 10M",
        }
    }

    /// Weight used by `potential`; mid-range volumes weigh the most.
    pub const fn weight(self) -> f64 {
        match self {
            VolumeBucket::Unspecified => 1.0,
            VolumeBucket::UpTo10 => 0.5,
            VolumeBucket::UpTo100 => 1.0,
            VolumeBucket::UpTo1K => 3.0,
            VolumeBucket::UpTo10K => 3.0,
            VolumeBucket::UpTo100K => 2.0,
            VolumeBucket::UpTo1M => 1.0,
            VolumeBucket::UpTo10M => 0.5,
        }
    }

    /// Bucket for an optional cell; a missing value is `Unspecified`.
    pub fn from_cell(value: Option<&str>) -> Result<Self, UnknownBucket> {
        match value {
            None => Ok(VolumeBucket::Unspecified),
            Some(label) => label.parse(),
        }
    }
}

impl FromStr for VolumeBucket {
    type Err = UnknownBucket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if let Some(bucket) = Self::ALL.into_iter().find(|b| b.label() == label) {
            return Ok(bucket);
        }
        // the default written back as a number ("1", "1.0")
        match label.parse::<f64>() {
            Ok(v) if v == 1.0 => Ok(VolumeBucket::Unspecified),
            _ => Err(UnknownBucket(s.to_string())),
        }
    }
}
