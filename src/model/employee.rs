use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": "EMP001",
        "name": "Emma Watson",
        "designation": "HR Manager",
        "department": "Human Resources",
        "email": "emma.watson@company.com",
        "phone": "+1-234-567-8901",
        "leave_balance": 12
    })
)]
pub struct EmployeeCard {
    #[schema(example = "EMP001")]
    pub id: String,

    #[schema(example = "Emma Watson")]
    pub name: String,

    #[schema(example = "HR Manager")]
    pub designation: String,

    #[schema(example = "Human Resources")]
    pub department: String,

    #[schema(example = "emma.watson@company.com")]
    pub email: String,

    #[schema(example = "+1-234-567-8901")]
    pub phone: String,

    /// Remaining leave days, when known
    #[schema(example = 12, nullable = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_balance: Option<u32>,
}

impl EmployeeCard {
    pub fn in_department(&self, department: &str) -> bool {
        self.department.eq_ignore_ascii_case(department)
    }
}
