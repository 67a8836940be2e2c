// src/models/mod.rs
//
// One struct per report row. Field names are the JSON keys the dashboard reads.

use serde::Serialize;
use sqlx::FromRow;

// ───────────────────────────────────────
// Booking volume
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct PeakHour {
    pub hour: i32,
    pub booking_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct DepartmentWorkload {
    pub department_name: String,
    pub pending: i64,
    pub completed: i64,
    pub cancelled: i64,
    pub no_show: i64,
    pub total: i64,
}

// ───────────────────────────────────────
// Attendance & timing
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct NoShowBreakdown {
    pub age_group: String,
    pub gender: Option<String>, // nullable column
    pub no_show_count: i64,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ProcessingTime {
    pub service_id: Option<i64>, // appointments.service_id is nullable
    pub avg_processing_minutes: f64,
}

// ───────────────────────────────────────
// Summary
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Overview {
    pub total_appointments: i64,
    pub completed: i64,
    pub no_show: i64,
    pub cancelled: i64,
}
