pub mod filter;
pub mod stats;
pub mod summary;

pub use filter::filter_by_context;
pub use stats::{hit_stats, zone_counts, HitStats};
pub use summary::{summary_matrix, SummaryCell, SummaryRow};
