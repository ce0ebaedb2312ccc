use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::dialog::ConfirmDialog;
use crate::agent::{AgentError, contract::AgentResponse};
use crate::error::AppError;
use crate::fixtures;
use crate::model::{
    leave_request::{LeaveAction, LeaveRecord, LeaveStatus},
    message::ChatMessage,
    persona::{Persona, PersonaProfile},
};
use crate::render::{RenderedMessage, render_message};

/// Reply shown when the agent could not be reached or answered garbage.
pub const FALLBACK_REPLY: &str = "Error processing request. Please try again.";

/// How many filtered leave records the recent activity panel shows.
const RECENT_ACTIVITY_LIMIT: usize = 3;

#[derive(Debug, Display, PartialEq)]
pub enum DashboardError {
    #[display(fmt = "Message must not be empty")]
    EmptyMessage,
    #[display(fmt = "A request is already being processed")]
    Busy,
    #[display(fmt = "Leave request {} not found", _0)]
    LeaveNotFound(String),
    #[display(fmt = "Leave request {} already processed", _0)]
    AlreadyProcessed(String),
    #[display(fmt = "No action is waiting for confirmation")]
    NothingToConfirm,
    #[display(fmt = "Leave actions are not available on the {} dashboard", _0)]
    LeaveUnavailable(Persona),
}

impl From<DashboardError> for AppError {
    fn from(e: DashboardError) -> Self {
        let message = e.to_string();
        match e {
            DashboardError::EmptyMessage | DashboardError::LeaveUnavailable(_) => AppError::BadRequest(message),
            DashboardError::LeaveNotFound(_) => AppError::NotFound(message),
            DashboardError::Busy | DashboardError::AlreadyProcessed(_) | DashboardError::NothingToConfirm => {
                AppError::Conflict(message)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaveFilters {
    /// Department name; empty or missing means all departments
    #[schema(example = "Engineering", nullable = true)]
    #[serde(default)]
    pub department: Option<String>,
    /// Statuses to keep; empty means all
    #[serde(default)]
    pub statuses: Vec<LeaveStatus>,
}

impl LeaveFilters {
    fn department(&self) -> Option<&str> {
        self.department.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }
}

/// Everything one dashboard instance holds in memory.
#[derive(Debug)]
pub struct DashboardState {
    persona: Persona,
    messages: Vec<ChatMessage>,
    leave_records: Vec<LeaveRecord>,
    dialog: ConfirmDialog,
    filters: LeaveFilters,
    loading: bool,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionView {
    #[schema(example = "1b4e28ba-2fa1-11d2-883f-0016d3cca427")]
    pub session_id: String,
    pub persona: Persona,
    pub profile: PersonaProfile,
    pub loading: bool,
    pub messages: Vec<RenderedMessage>,
    pub dialog: ConfirmDialog,
    pub filters: LeaveFilters,
    pub recent_activity: Vec<LeaveRecord>,
    #[schema(format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}

impl DashboardState {
    pub fn new(persona: Persona) -> Self {
        Self {
            persona,
            messages: Vec::new(),
            leave_records: fixtures::LEAVE_RECORDS.clone(),
            dialog: ConfirmDialog::Closed,
            filters: LeaveFilters::default(),
            loading: false,
            created_at: Utc::now(),
        }
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn leave_records(&self) -> &[LeaveRecord] {
        &self.leave_records
    }

    pub fn dialog(&self) -> &ConfirmDialog {
        &self.dialog
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /* =========================
    Chat relay
    ========================= */

    /// Records the user's message and marks the session busy. Blank input is
    /// rejected without touching state, so no agent call follows it.
    pub fn begin_chat(&mut self, input: &str) -> Result<(), DashboardError> {
        if input.trim().is_empty() {
            return Err(DashboardError::EmptyMessage);
        }
        if self.loading {
            return Err(DashboardError::Busy);
        }

        self.messages.push(ChatMessage::user(input));
        self.loading = true;
        Ok(())
    }

    /// Appends exactly one assistant message for the agent outcome and clears
    /// the busy flag.
    pub fn finish_chat(&mut self, outcome: Result<AgentResponse, AgentError>) -> RenderedMessage {
        let message = match outcome {
            Ok(response) => {
                let content = response.reply_text();
                ChatMessage::assistant_with_data(content, response.into_parsed_data())
            }
            Err(e) => {
                error!(error = %e, persona = %self.persona, "Error calling agent");
                ChatMessage::assistant(FALLBACK_REPLY)
            }
        };

        self.loading = false;
        self.messages.push(message);
        self.render_last()
    }

    /// Closes a chat whose agent call will never complete, for example when
    /// the request was dropped mid-flight. Does nothing if no chat is open.
    pub fn abandon_chat(&mut self) {
        if !self.loading {
            return;
        }

        warn!(persona = %self.persona, "Agent call abandoned before a reply arrived");
        self.loading = false;
        self.messages.push(ChatMessage::assistant(FALLBACK_REPLY));
    }

    fn render_last(&self) -> RenderedMessage {
        let last = self.messages.len() - 1;
        render_message(self.persona, &self.messages[last], &self.leave_records)
    }

    pub fn rendered_messages(&self) -> Vec<RenderedMessage> {
        self.messages
            .iter()
            .map(|m| render_message(self.persona, m, &self.leave_records))
            .collect()
    }

    /* =========================
    Leave approval
    ========================= */

    fn ensure_leave_actions(&self) -> Result<(), DashboardError> {
        match self.persona {
            Persona::Hr => Ok(()),
            other => Err(DashboardError::LeaveUnavailable(other)),
        }
    }

    /// Opens the confirmation dialog for a pending record, replacing any
    /// dialog already open.
    pub fn request_action(&mut self, record_id: &str, action: LeaveAction) -> Result<&ConfirmDialog, DashboardError> {
        self.ensure_leave_actions()?;

        let record = self
            .leave_records
            .iter()
            .find(|r| r.id == record_id)
            .ok_or_else(|| DashboardError::LeaveNotFound(record_id.to_string()))?;

        if !record.is_pending() {
            return Err(DashboardError::AlreadyProcessed(record_id.to_string()));
        }

        self.dialog = ConfirmDialog::open(action, record);
        Ok(&self.dialog)
    }

    /// Applies the action waiting in the dialog and closes it.
    pub fn confirm(&mut self) -> Result<RenderedMessage, DashboardError> {
        self.ensure_leave_actions()?;

        let (action, record_id, employee_name) = match std::mem::take(&mut self.dialog) {
            ConfirmDialog::Open { action, record_id, leave_details, .. } => {
                (action, record_id, leave_details.employee_name)
            }
            ConfirmDialog::Closed => return Err(DashboardError::NothingToConfirm),
        };

        let status = action.resulting_status();
        for record in self.leave_records.iter_mut().filter(|r| r.id == record_id) {
            record.status = status;
        }

        info!(record_id = %record_id, status = %status, "Leave request updated");

        self.messages.push(ChatMessage::assistant(format!(
            "Leave request for {employee_name} has been {status} successfully."
        )));
        Ok(self.render_last())
    }

    pub fn cancel(&mut self) {
        self.dialog = ConfirmDialog::Closed;
    }

    /* =========================
    Filters
    ========================= */

    pub fn filters(&self) -> &LeaveFilters {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: LeaveFilters) {
        self.filters = filters;
    }

    pub fn filtered_leaves(&self) -> Vec<LeaveRecord> {
        let department_names = self.filters.department().map(fixtures::employee_names_in);

        self.leave_records
            .iter()
            .filter(|r| {
                department_names
                    .as_ref()
                    .is_none_or(|names| names.iter().any(|n| *n == r.employee_name))
            })
            .filter(|r| self.filters.statuses.is_empty() || self.filters.statuses.contains(&r.status))
            .cloned()
            .collect()
    }

    pub fn recent_activity(&self) -> Vec<LeaveRecord> {
        let mut leaves = self.filtered_leaves();
        leaves.truncate(RECENT_ACTIVITY_LIMIT);
        leaves
    }

    pub fn view(&self, session_id: &str) -> SessionView {
        SessionView {
            session_id: session_id.to_string(),
            persona: self.persona,
            profile: self.persona.profile(),
            loading: self.loading,
            messages: self.rendered_messages(),
            dialog: self.dialog.clone(),
            filters: self.filters.clone(),
            recent_activity: self.recent_activity(),
            created_at: self.created_at,
        }
    }
}
