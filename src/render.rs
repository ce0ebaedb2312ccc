//! Picks the presentation widget for an assistant message.
//!
//! Dispatch is a pure lookup on `(persona, query_type, formatted_data.type)`.
//! Anything not in the table renders no widget; the reply text still shows.

use serde::Serialize;
use std::str::FromStr;
use strum_macros::EnumString;
use utoipa::ToSchema;

use crate::agent::contract::AgentPayload;
use crate::fixtures;
use crate::model::{
    attendance::AttendanceSummary,
    candidate::Candidate,
    employee::EmployeeCard,
    interview::{Interview, InterviewStatus},
    job_opening::JobOpening,
    leave_request::LeaveRecord,
    message::ChatMessage,
    persona::Persona,
};

/// How many cards a card-list widget shows.
const CARD_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
enum QueryType {
    LeaveInquiry,
    EmployeeSearch,
    AttendanceQuery,
    CandidateSearch,
    JobSearch,
    InterviewSchedule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
enum FormattedKind {
    Table,
    Card,
    Calendar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WidgetKind {
    LeaveTable,
    EmployeeCards,
    AttendanceSummary,
    CandidateCards,
    JobCards,
    InterviewTable,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Widget {
    /// Pending leave requests, each open to approve/reject
    LeaveTable { records: Vec<LeaveRecord> },
    EmployeeCards { employees: Vec<EmployeeCard> },
    AttendanceSummary { summary: AttendanceSummary },
    CandidateCards { candidates: Vec<Candidate> },
    JobCards { jobs: Vec<JobOpening> },
    InterviewTable { interviews: Vec<Interview> },
}

/// A chat message together with what a client should draw under it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RenderedMessage {
    pub message: ChatMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget: Option<Widget>,
    pub follow_up_suggestions: Vec<String>,
}

fn lookup(persona: Persona, query: QueryType, kind: FormattedKind) -> Option<WidgetKind> {
    use FormattedKind::{Calendar, Card, Table};

    match (persona, query, kind) {
        (Persona::Hr, QueryType::LeaveInquiry, Table) => Some(WidgetKind::LeaveTable),
        (Persona::Hr, QueryType::EmployeeSearch, Card) => Some(WidgetKind::EmployeeCards),
        (Persona::Hr, QueryType::AttendanceQuery, Calendar) => Some(WidgetKind::AttendanceSummary),
        (Persona::Hiring, QueryType::CandidateSearch, Card) => Some(WidgetKind::CandidateCards),
        (Persona::Hiring, QueryType::JobSearch, Card) => Some(WidgetKind::JobCards),
        (Persona::Hiring, QueryType::InterviewSchedule, Table) => Some(WidgetKind::InterviewTable),
        _ => None,
    }
}

/// Widget for `payload`, filled from fixtures and the session's leave records.
pub fn dispatch(persona: Persona, payload: &AgentPayload, leave_records: &[LeaveRecord]) -> Option<Widget> {
    let query = QueryType::from_str(payload.query_type()?).ok()?;
    let kind = FormattedKind::from_str(payload.formatted_type()?).ok()?;

    let widget = match lookup(persona, query, kind)? {
        WidgetKind::LeaveTable => Widget::LeaveTable {
            records: leave_records.iter().filter(|r| r.is_pending()).cloned().collect(),
        },
        WidgetKind::EmployeeCards => Widget::EmployeeCards {
            employees: fixtures::EMPLOYEES.iter().take(CARD_LIMIT).cloned().collect(),
        },
        WidgetKind::AttendanceSummary => Widget::AttendanceSummary {
            summary: fixtures::attendance_summary(),
        },
        WidgetKind::CandidateCards => Widget::CandidateCards {
            candidates: fixtures::CANDIDATES.iter().take(CARD_LIMIT).cloned().collect(),
        },
        WidgetKind::JobCards => Widget::JobCards {
            jobs: fixtures::JOB_OPENINGS.iter().filter(|j| j.is_open()).cloned().collect(),
        },
        WidgetKind::InterviewTable => Widget::InterviewTable {
            interviews: fixtures::INTERVIEWS
                .iter()
                .filter(|i| i.status == InterviewStatus::Scheduled)
                .cloned()
                .collect(),
        },
    };

    Some(widget)
}

pub fn render_message(persona: Persona, message: &ChatMessage, leave_records: &[LeaveRecord]) -> RenderedMessage {
    let payload = message.parsed_data.as_ref();

    RenderedMessage {
        message: message.clone(),
        widget: payload.and_then(|p| dispatch(persona, p, leave_records)),
        follow_up_suggestions: payload
            .map(AgentPayload::follow_up_suggestions)
            .unwrap_or_default(),
    }
}
