use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum JobStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": "JOB001",
    "title": "Senior Backend Engineer",
    "department": "Engineering",
    "location": "Remote",
    "openings": 2,
    "status": "open"
}))]
pub struct JobOpening {
    #[schema(example = "JOB001")]
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub openings: u32,
    pub status: JobStatus,
}

impl JobOpening {
    pub fn is_open(&self) -> bool {
        self.status == JobStatus::Open
    }
}
