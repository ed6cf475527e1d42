//! Dashboard view identifiers.

use serde::{Deserialize, Serialize};

/// The dashboard views that page, poll and filter attendance data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    /// Daily attendance tracking table.
    Attendance,
    /// Performance evaluation summary over a date range.
    Performance,
    /// Payroll listing.
    Payroll,
    /// Generate-payroll listing.
    GeneratePayroll,
    /// Month calendar with events.
    Calendar,
}

impl ViewKind {
    /// The configuration key of the view.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Attendance => "attendance",
            ViewKind::Performance => "performance",
            ViewKind::Payroll => "payroll",
            ViewKind::GeneratePayroll => "generate_payroll",
            ViewKind::Calendar => "calendar",
        }
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
