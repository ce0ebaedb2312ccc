use serde::Serialize;
use utoipa::ToSchema;

use crate::model::leave_request::{LeaveAction, LeaveRecord};

/// Confirmation step in front of every approve/reject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ConfirmDialog {
    #[default]
    Closed,
    Open {
        action: LeaveAction,
        record_id: String,
        /// Copy of the record taken when the dialog opened
        leave_details: LeaveRecord,
        prompt: String,
    },
}

impl ConfirmDialog {
    pub fn open(action: LeaveAction, record: &LeaveRecord) -> Self {
        ConfirmDialog::Open {
            action,
            record_id: record.id.clone(),
            leave_details: record.clone(),
            prompt: format!(
                "Are you sure you want to {} the leave request for {}?",
                action, record.employee_name
            ),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ConfirmDialog::Open { .. })
    }
}
