// Resume completeness: how much of the record has been filled in.

pub mod completeness;

pub use completeness::{completeness_percentage, compute_completeness_report, CompletenessReport};
