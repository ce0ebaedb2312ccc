use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

/// What the reviewer wants to do with a pending request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveAction {
    Approve,
    Reject,
}

impl LeaveAction {
    /// Status a record ends up in once the action is confirmed.
    pub fn resulting_status(self) -> LeaveStatus {
        match self {
            LeaveAction::Approve => LeaveStatus::Approved,
            LeaveAction::Reject => LeaveStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": "LEAVE001",
    "employee_name": "Emma Watson",
    "leave_type": "Annual Leave",
    "start_date": "2024-01-15",
    "end_date": "2024-01-17",
    "status": "pending",
    "days": 3
}))]
pub struct LeaveRecord {
    #[schema(example = "LEAVE001")]
    pub id: String,
    /// employee the leave belongs to, matched by name only
    #[schema(example = "Emma Watson")]
    pub employee_name: String,
    #[schema(example = "Annual Leave")]
    pub leave_type: String,
    #[schema(example = "2024-01-15", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2024-01-17", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
    #[schema(example = 3)]
    pub days: u32,
}

impl LeaveRecord {
    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_maps_to_terminal_status() {
        assert_eq!(LeaveAction::Approve.resulting_status(), LeaveStatus::Approved);
        assert_eq!(LeaveAction::Reject.resulting_status(), LeaveStatus::Rejected);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_value(LeaveStatus::Approved).unwrap();
        assert_eq!(json, serde_json::json!("approved"));
        assert_eq!(LeaveStatus::Rejected.to_string(), "rejected");
    }
}
