use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::fixtures::{DEPARTMENTS, EMPLOYEES};
use crate::model::employee::EmployeeCard;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeQuery {
    /// Filter by department (case-insensitive)
    pub department: Option<String>,
    /// Search by name or email
    pub search: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/employees",
    params(EmployeeQuery),
    responses(
        (status = 200, description = "Sample employee cards", body = [EmployeeCard])
    ),
    tag = "Directory"
)]
pub async fn list_employees(query: web::Query<EmployeeQuery>) -> impl Responder {
    let department = query.department.as_deref().map(str::trim).filter(|d| !d.is_empty());
    let search = query
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    debug!(?department, ?search, "Listing employees");

    let employees: Vec<&EmployeeCard> = EMPLOYEES
        .iter()
        .filter(|e| department.is_none_or(|d| e.in_department(d)))
        .filter(|e| {
            search.as_deref().is_none_or(|s| {
                e.name.to_lowercase().contains(s) || e.email.to_lowercase().contains(s)
            })
        })
        .collect();

    HttpResponse::Ok().json(employees)
}

/// Department options for the filter panel
#[utoipa::path(
    get,
    path = "/api/departments",
    responses(
        (status = 200, description = "Department names", body = [String], example = json!([
            "Human Resources", "Engineering", "Product", "Analytics",
            "Design", "Operations", "Marketing", "Finance"
        ]))
    ),
    tag = "Directory"
)]
pub async fn list_departments() -> impl Responder {
    HttpResponse::Ok().json(DEPARTMENTS)
}
