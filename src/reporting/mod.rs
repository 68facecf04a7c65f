pub mod formatter;
pub mod pathology;
pub mod summary;

pub use pathology::{PathologyPredicate, PATHOLOGY_PREDICATES};
pub use summary::{
    remaining_scans, Dashboard, PathologyCount, PathologySummary, QualityTrend, SummaryReporter,
};
