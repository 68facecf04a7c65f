use serde::Serialize;
use tracing::debug;
use crate::db::ReportStore;
use crate::errors::EchoError;
use super::pathology::{summary_sql, PATHOLOGY_PREDICATES};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathologyCount {
    pub label: &'static str,
    pub count: u64,
}

/// Counts per abnormality, in the fixed predicate order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathologySummary {
    entries: Vec<PathologyCount>,
}

impl PathologySummary {
    pub(crate) fn from_counts(entries: Vec<PathologyCount>) -> Self {
        Self { entries }
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries.iter().find(|e| e.label == label).map(|e| e.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathologyCount> {
        self.entries.iter()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }
}

/// Number of reports of one quality category in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityTrend {
    /// `YYYY-MM`.
    pub month: String,
    pub quality: Option<String>,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub completed: u64,
    pub target: u64,
    pub remaining: u64,
    pub pathology: PathologySummary,
    pub quality_trends: Vec<QualityTrend>,
}

/// Scans still needed to reach `target` once `completed` are logged.
pub fn remaining_scans(completed: u64, target: u64) -> u64 {
    target.saturating_sub(completed)
}

/// Read-only aggregates over every stored report.
pub struct SummaryReporter<'a> {
    store: &'a ReportStore,
}

impl<'a> SummaryReporter<'a> {
    pub fn new(store: &'a ReportStore) -> Self {
        Self { store }
    }

    pub fn pathology_summary(&self) -> Result<PathologySummary, EchoError> {
        let conn = self.store.connect()?;
        let counts: Vec<i64> = conn
            .query_row(&summary_sql(), [], |row| {
                (0..PATHOLOGY_PREDICATES.len()).map(|i| row.get::<_, i64>(i)).collect()
            })
            .map_err(|e| EchoError::Storage(format!("Pathology summary failed: {}", e)))?;

        let entries = PATHOLOGY_PREDICATES
            .iter()
            .zip(counts)
            .map(|(p, count)| PathologyCount { label: p.label, count: count.max(0) as u64 })
            .collect();
        Ok(PathologySummary::from_counts(entries))
    }

    /// Report counts grouped by month of creation and quality, oldest month
    /// first. Order within a month is whatever SQLite yields.
    pub fn quality_trends(&self) -> Result<Vec<QualityTrend>, EchoError> {
        let conn = self.store.connect()?;
        let mut stmt = conn
            .prepare(
                "SELECT strftime('%Y-%m', date_created) AS month, scan_quality, COUNT(*) \
                 FROM reports GROUP BY month, scan_quality ORDER BY month",
            )
            .map_err(|e| EchoError::Storage(format!("Query failed: {}", e)))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(QualityTrend {
                    month: row.get::<_, Option<String>>(0)?.unwrap_or_else(|| "unknown".to_string()),
                    quality: row.get(1)?,
                    count: row.get::<_, i64>(2)?.max(0) as u64,
                })
            })
            .map_err(|e| EchoError::Storage(format!("Query error: {}", e)))?;

        let mut trends = Vec::new();
        for row in rows {
            trends.push(row.map_err(|e| EchoError::Storage(format!("Row error: {}", e)))?);
        }
        debug!(groups = trends.len(), "Computed quality trends");
        Ok(trends)
    }

    /// Scans still needed to reach `target`, never negative.
    pub fn scans_remaining(&self, target: u64) -> Result<u64, EchoError> {
        Ok(remaining_scans(self.store.count()?, target))
    }

    pub fn dashboard(&self, target: u64) -> Result<Dashboard, EchoError> {
        let completed = self.store.count()?;
        Ok(Dashboard {
            completed,
            target,
            remaining: remaining_scans(completed, target),
            pathology: self.pathology_summary()?,
            quality_trends: self.quality_trends()?,
        })
    }
}
