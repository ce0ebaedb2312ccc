use crate::agent::contract::AgentRequest;
use crate::api::chat::ChatInput;
use crate::api::session::{CreateSession, SessionCreated};
use crate::model::{
    attendance::{AttendanceDay, AttendanceStatus, AttendanceSummary},
    candidate::{Candidate, CandidateStage},
    employee::EmployeeCard,
    interview::{Interview, InterviewStatus},
    job_opening::{JobOpening, JobStatus},
    leave_request::{LeaveAction, LeaveRecord, LeaveStatus},
    message::{ChatMessage, MessageRole},
    persona::{Persona, PersonaProfile},
};
use crate::render::{RenderedMessage, Widget};
use crate::session::{ConfirmDialog, LeaveFilters, SessionView};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HR Assistant Dashboard API",
        version = "1.0.0",
        description = r#"
## HR & Hiring Assistant Dashboards

State and logic behind two chat-driven dashboards: the **HR assistant** and the
**Hiring assistant**. Each dashboard instance is a session seeded with sample
records.

### 🔹 Key Features
- **Chat relay**
  - Messages are forwarded to the external agent with the persona's `agent_id`
  - The agent's structured reply picks the widget drawn under the message
- **Leave approval**
  - Approve/reject opens a confirmation dialog; confirm applies it in memory
- **Filters**
  - Department and status filters drive the recent activity panel
- **Sample directory**
  - Employees, attendance, candidates, job openings and interviews

### 📦 Response Format
- JSON everywhere; errors answer `{"message": "..."}`
- Widgets carry a `widget` tag: `leave_table`, `employee_cards`,
  `attendance_summary`, `candidate_cards`, `job_cards`, `interview_table`

---
Built with **Rust**, **Actix Web**, **reqwest**, **moka** and **Utoipa**.
"#,
    ),
    paths(
        crate::api::session::create_session,
        crate::api::session::get_session,
        crate::api::session::delete_session,
        crate::api::session::list_messages,

        crate::api::chat::send_message,

        crate::api::leave_request::leave_list,
        crate::api::leave_request::recent_activity,
        crate::api::leave_request::set_filters,
        crate::api::leave_request::approve_leave,
        crate::api::leave_request::reject_leave,
        crate::api::leave_request::confirm_action,
        crate::api::leave_request::cancel_action,

        crate::api::employee::list_employees,
        crate::api::employee::list_departments,
        crate::api::attendance::attendance_summary,
        crate::api::attendance::attendance_days,

        crate::api::hiring::list_candidates,
        crate::api::hiring::list_jobs,
        crate::api::hiring::list_interviews
    ),
    components(
        schemas(
            CreateSession,
            SessionCreated,
            SessionView,
            Persona,
            PersonaProfile,
            ChatInput,
            AgentRequest,
            ChatMessage,
            MessageRole,
            RenderedMessage,
            Widget,
            ConfirmDialog,
            LeaveFilters,
            LeaveRecord,
            LeaveStatus,
            LeaveAction,
            EmployeeCard,
            AttendanceDay,
            AttendanceStatus,
            AttendanceSummary,
            Candidate,
            CandidateStage,
            JobOpening,
            JobStatus,
            Interview,
            InterviewStatus
        )
    ),
    tags(
        (name = "Session", description = "Dashboard session APIs"),
        (name = "Chat", description = "Agent relay APIs"),
        (name = "Leave", description = "Leave approval and filter APIs"),
        (name = "Directory", description = "Sample employee and attendance data"),
        (name = "Hiring", description = "Sample hiring data"),
    )
)]
pub struct ApiDoc;
