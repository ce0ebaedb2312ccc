use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": "INT001",
    "candidate_name": "Priya Sharma",
    "job_title": "Senior Backend Engineer",
    "interviewer": "Robert Taylor",
    "scheduled_at": "2024-01-22T10:00:00",
    "round": "Technical",
    "status": "scheduled"
}))]
pub struct Interview {
    #[schema(example = "INT001")]
    pub id: String,
    pub candidate_name: String,
    pub job_title: String,
    pub interviewer: String,
    #[schema(example = "2024-01-22T10:00:00", format = "date-time", value_type = String)]
    pub scheduled_at: NaiveDateTime,
    #[schema(example = "Technical")]
    pub round: String,
    pub status: InterviewStatus,
}
