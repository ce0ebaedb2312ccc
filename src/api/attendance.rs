use actix_web::{HttpResponse, Responder};

use crate::fixtures::{self, ATTENDANCE_DAYS};
use crate::model::attendance::{AttendanceDay, AttendanceSummary};

/// Attendance summary shown by the calendar widget
#[utoipa::path(
    get,
    path = "/api/attendance/summary",
    responses(
        (status = 200, description = "Present/absent/half-day counts", body = AttendanceSummary)
    ),
    tag = "Directory"
)]
pub async fn attendance_summary() -> impl Responder {
    HttpResponse::Ok().json(fixtures::attendance_summary())
}

#[utoipa::path(
    get,
    path = "/api/attendance/days",
    responses(
        (status = 200, description = "Day-by-day attendance", body = [AttendanceDay])
    ),
    tag = "Directory"
)]
pub async fn attendance_days() -> impl Responder {
    HttpResponse::Ok().json(&*ATTENDANCE_DAYS)
}
