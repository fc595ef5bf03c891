//! Statistics snapshot type.

use serde::{Deserialize, Serialize};

/// Aggregate counts computed over an entire resource collection.
///
/// The `additional` metric is resource-specific **by design**:
///
/// - for students it is the count enrolled since the first calendar day of
///   the current month;
/// - for courses it is the raw size of the enrollment collection.
///
/// Callers must not assume a uniform meaning across resource types.
///
/// Snapshots are recomputed on demand, never cached; every statistics call
/// reflects the collection at request time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    /// Total number of records in the collection.
    pub total: usize,
    /// Records whose status is exactly `"Active"`.
    pub active: usize,
    /// Records whose status is exactly `"Inactive"`.
    pub inactive: usize,
    /// The resource-specific extra metric (see type docs).
    pub additional: usize,
}
