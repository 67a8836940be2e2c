// src/reports/mod.rs
//
// Read-only report catalog over appointments. Every report takes the pool
// handle, runs exactly one statement and returns its rows in query order.
// The connection goes back to the pool when the fetch future completes,
// error or not.

use sqlx::{postgres::PgRow, FromRow, PgPool};
use thiserror::Error;

use crate::models::{DepartmentWorkload, NoShowBreakdown, Overview, PeakHour, ProcessingTime};

mod queries;

// ─────────────────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    PeakHours,
    DepartmentalWorkload,
    NoShowAnalysis,
    ProcessingTimes,
    Overview,
}

impl Report {
    pub const ALL: [Report; 5] = [
        Report::PeakHours,
        Report::DepartmentalWorkload,
        Report::NoShowAnalysis,
        Report::ProcessingTimes,
        Report::Overview,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Report::PeakHours => "peak_hours",
            Report::DepartmentalWorkload => "departmental_workload",
            Report::NoShowAnalysis => "no_show_analysis",
            Report::ProcessingTimes => "processing_times",
            Report::Overview => "overview",
        }
    }

    /// Route the report is served on.
    pub fn path(self) -> String {
        format!("/api/{}", self.name())
    }

    fn sql(self) -> &'static str {
        match self {
            Report::PeakHours => queries::PEAK_HOURS,
            Report::DepartmentalWorkload => queries::DEPARTMENTAL_WORKLOAD,
            Report::NoShowAnalysis => queries::NO_SHOW_ANALYSIS,
            Report::ProcessingTimes => queries::PROCESSING_TIMES,
            Report::Overview => queries::OVERVIEW,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{report}: database unavailable: {source}")]
    Unavailable {
        report: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("{report}: query failed: {source}")]
    Query {
        report: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl ReportError {
    fn new(report: Report, source: sqlx::Error) -> Self {
        let report = report.name();
        match source {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => ReportError::Unavailable { report, source },
            other => ReportError::Query { report, source: other },
        }
    }

    pub fn report(&self) -> &'static str {
        match self {
            ReportError::Unavailable { report, .. } | ReportError::Query { report, .. } => report,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reports
// ─────────────────────────────────────────────────────────────────────────────

async fn fetch<T>(report: Report, pool: &PgPool) -> Result<Vec<T>, ReportError>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let rows = sqlx::query_as::<_, T>(report.sql())
        .fetch_all(pool)
        .await
        .map_err(|e| ReportError::new(report, e))?;
    tracing::debug!(report = report.name(), rows = rows.len(), "report fetched");
    Ok(rows)
}

/// Bookings per hour of day, ascending by hour.
pub async fn peak_hours(pool: &PgPool) -> Result<Vec<PeakHour>, ReportError> {
    fetch(Report::PeakHours, pool).await
}

/// Status counts per department, ascending by department id.
pub async fn departmental_workload(pool: &PgPool) -> Result<Vec<DepartmentWorkload>, ReportError> {
    fetch(Report::DepartmentalWorkload, pool).await
}

/// No-show counts per age bracket and gender, ordered by `(age_group, gender)`.
pub async fn no_show_analysis(pool: &PgPool) -> Result<Vec<NoShowBreakdown>, ReportError> {
    fetch(Report::NoShowAnalysis, pool).await
}

/// Average appointment time of day in minutes for completed appointments,
/// per service, ordered by `service_id`.
pub async fn processing_times(pool: &PgPool) -> Result<Vec<ProcessingTime>, ReportError> {
    fetch(Report::ProcessingTimes, pool).await
}

/// Always exactly one row; counts are zero on an empty table.
pub async fn overview(pool: &PgPool) -> Result<Vec<Overview>, ReportError> {
    fetch(Report::Overview, pool).await
}
