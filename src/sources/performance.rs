//! Performance source wire format.
//!
//! The performance evaluation view consumes one row per employee plus a
//! `summary_stats` object. The same shape is produced from a locally computed
//! [`PeriodReport`] so both can be rendered by the same table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeId, PeriodReport, PeriodSummary, SummaryStats};

/// One employee row of the performance evaluation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceRow {
    /// Employee id.
    pub emp_id: EmployeeId,
    /// Employee display name.
    pub employee_name: String,
    /// Job position, when known.
    #[serde(default)]
    pub position: Option<String>,
    /// Present (including overtime) days in the period.
    pub total_present_days: u32,
    /// Late days in the period.
    pub total_late_days: u32,
    /// Absent days in the period.
    pub total_absent_days: u32,
    /// Leave days in the period.
    pub total_leave_days: u32,
}

impl PerformanceRow {
    /// Builds a row from a computed summary.
    pub fn from_summary(
        emp_id: EmployeeId,
        employee_name: String,
        summary: &PeriodSummary,
    ) -> Self {
        Self {
            emp_id,
            employee_name,
            position: None,
            total_present_days: summary.present_days,
            total_late_days: summary.late_days,
            total_absent_days: summary.absent_days,
            total_leave_days: summary.leave_days,
        }
    }
}

/// The `summary_stats` object of the performance response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStatsRow {
    /// Average present days.
    pub avg_present_days: Decimal,
    /// Average late days.
    pub avg_late_days: Decimal,
    /// Average absent days.
    pub avg_absent_days: Decimal,
    /// Average leave days.
    pub avg_leave_days: Decimal,
}

impl From<SummaryStats> for SummaryStatsRow {
    fn from(stats: SummaryStats) -> Self {
        Self {
            avg_present_days: stats.avg_present_days,
            avg_late_days: stats.avg_late_days,
            avg_absent_days: stats.avg_absent_days,
            avg_leave_days: stats.avg_leave_days,
        }
    }
}

/// The full performance response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceResponse {
    /// Employee rows ordered by id.
    pub records: Vec<PerformanceRow>,
    /// Fleet-wide averages.
    pub summary_stats: SummaryStatsRow,
}

impl From<&PeriodReport> for PerformanceResponse {
    fn from(report: &PeriodReport) -> Self {
        let records = report
            .summaries
            .iter()
            .map(|(id, summary)| {
                let name = report
                    .employee_names
                    .get(id)
                    .cloned()
                    .unwrap_or_else(|| id.to_string());
                PerformanceRow::from_summary(id.clone(), name, summary)
            })
            .collect();

        Self {
            records,
            summary_stats: report.summary_stats.into(),
        }
    }
}
