use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CandidateStage {
    Applied,
    Screening,
    Interview,
    Offer,
    Hired,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": "CAND001",
    "name": "Priya Sharma",
    "applied_role": "Senior Backend Engineer",
    "stage": "interview",
    "email": "priya.sharma@mail.com",
    "phone": "+1-345-678-9001",
    "experience_years": 7
}))]
pub struct Candidate {
    #[schema(example = "CAND001")]
    pub id: String,
    pub name: String,
    /// title of the job opening applied to
    pub applied_role: String,
    pub stage: CandidateStage,
    pub email: String,
    pub phone: String,
    pub experience_years: u32,
}
