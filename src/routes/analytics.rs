// src/routes/analytics.rs

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, MethodRouter},
    Json,
};
use serde::Serialize;

use crate::{
    models::{DepartmentWorkload, NoShowBreakdown, Overview, PeakHour, ProcessingTime},
    reports::{self, Report, ReportError},
    AppState,
};
use super::internal_error;

type ReportResult<T> = Result<Json<Vec<T>>, (StatusCode, String)>;

pub fn handler(report: Report) -> MethodRouter<AppState> {
    match report {
        Report::PeakHours => get(peak_hours),
        Report::DepartmentalWorkload => get(departmental_workload),
        Report::NoShowAnalysis => get(no_show_analysis),
        Report::ProcessingTimes => get(processing_times),
        Report::Overview => get(overview),
    }
}

fn respond<T: Serialize>(res: Result<Vec<T>, ReportError>) -> ReportResult<T> {
    match res {
        Ok(rows) => Ok(Json(rows)),
        Err(e) => {
            tracing::error!(report = e.report(), error = %e, "report failed");
            Err(internal_error(e))
        }
    }
}

/// GET /api/peak_hours
pub async fn peak_hours(State(state): State<AppState>) -> ReportResult<PeakHour> {
    respond(reports::peak_hours(&state.pool).await)
}

/// GET /api/departmental_workload
pub async fn departmental_workload(
    State(state): State<AppState>,
) -> ReportResult<DepartmentWorkload> {
    respond(reports::departmental_workload(&state.pool).await)
}

/// GET /api/no_show_analysis
pub async fn no_show_analysis(
    State(state): State<AppState>,
) -> ReportResult<NoShowBreakdown> {
    respond(reports::no_show_analysis(&state.pool).await)
}

/// GET /api/processing_times
pub async fn processing_times(
    State(state): State<AppState>,
) -> ReportResult<ProcessingTime> {
    respond(reports::processing_times(&state.pool).await)
}

/// GET /api/overview
pub async fn overview(State(state): State<AppState>) -> ReportResult<Overview> {
    respond(reports::overview(&state.pool).await)
}
