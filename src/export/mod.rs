//! CSV outputs: the scored keyword table and the rank-tracker import

pub mod merged;
pub mod rank_tracking;

pub use merged::{read_merged, write_merged};
pub use rank_tracking::{write_rank_tracking, RankTrackingOptions};
