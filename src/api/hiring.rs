use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::fixtures::{CANDIDATES, INTERVIEWS, JOB_OPENINGS};
use crate::model::{
    candidate::{Candidate, CandidateStage},
    interview::{Interview, InterviewStatus},
    job_opening::{JobOpening, JobStatus},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CandidateQuery {
    /// Filter by pipeline stage
    pub stage: Option<CandidateStage>,
    /// Filter by the role applied to (case-insensitive)
    pub role: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/candidates",
    params(CandidateQuery),
    responses(
        (status = 200, description = "Sample candidates", body = [Candidate])
    ),
    tag = "Hiring"
)]
pub async fn list_candidates(query: web::Query<CandidateQuery>) -> impl Responder {
    let candidates: Vec<&Candidate> = CANDIDATES
        .iter()
        .filter(|c| query.stage.is_none_or(|s| c.stage == s))
        .filter(|c| {
            query
                .role
                .as_deref()
                .is_none_or(|r| c.applied_role.eq_ignore_ascii_case(r.trim()))
        })
        .collect();

    HttpResponse::Ok().json(candidates)
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct JobQuery {
    /// open or closed
    pub status: Option<JobStatus>,
}

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(JobQuery),
    responses(
        (status = 200, description = "Sample job openings", body = [JobOpening])
    ),
    tag = "Hiring"
)]
pub async fn list_jobs(query: web::Query<JobQuery>) -> impl Responder {
    let jobs: Vec<&JobOpening> = JOB_OPENINGS
        .iter()
        .filter(|j| query.status.is_none_or(|s| j.status == s))
        .collect();

    HttpResponse::Ok().json(jobs)
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InterviewQuery {
    pub status: Option<InterviewStatus>,
}

#[utoipa::path(
    get,
    path = "/api/interviews",
    params(InterviewQuery),
    responses(
        (status = 200, description = "Sample interviews ordered by time", body = [Interview])
    ),
    tag = "Hiring"
)]
pub async fn list_interviews(query: web::Query<InterviewQuery>) -> impl Responder {
    let mut interviews: Vec<&Interview> = INTERVIEWS
        .iter()
        .filter(|i| query.status.is_none_or(|s| i.status == s))
        .collect();
    interviews.sort_by_key(|i| i.scheduled_at);

    HttpResponse::Ok().json(interviews)
}
