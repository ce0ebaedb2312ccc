use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    HalfDay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceDay {
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Per-status day counts for one employee and month.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[schema(example = json!({
    "employee_name": "Emma Watson",
    "month": 1,
    "year": 2024,
    "present": 18,
    "absent": 2,
    "half_day": 2
}))]
pub struct AttendanceSummary {
    pub employee_name: String,
    pub month: u32,
    pub year: i32,
    pub present: usize,
    pub absent: usize,
    pub half_day: usize,
}

impl AttendanceSummary {
    pub fn from_days(employee_name: &str, month: u32, year: i32, days: &[AttendanceDay]) -> Self {
        let count = |status| days.iter().filter(|d| d.status == status).count();

        Self {
            employee_name: employee_name.to_string(),
            month,
            year,
            present: count(AttendanceStatus::Present),
            absent: count(AttendanceStatus::Absent),
            half_day: count(AttendanceStatus::HalfDay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_day_uses_kebab_case() {
        let json = serde_json::to_value(AttendanceStatus::HalfDay).unwrap();
        assert_eq!(json, serde_json::json!("half-day"));
    }

    #[test]
    fn counts_each_status() {
        let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let days = vec![
            AttendanceDay { date: date(1), status: AttendanceStatus::Present },
            AttendanceDay { date: date(2), status: AttendanceStatus::Absent },
            AttendanceDay { date: date(3), status: AttendanceStatus::HalfDay },
            AttendanceDay { date: date(4), status: AttendanceStatus::Present },
        ];

        let summary = AttendanceSummary::from_days("Emma Watson", 1, 2024, &days);
        assert_eq!((summary.present, summary.absent, summary.half_day), (2, 1, 1));
    }
}
