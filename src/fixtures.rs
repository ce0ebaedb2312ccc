//! Hand-authored sample records every dashboard session starts from.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;

use crate::model::{
    attendance::{AttendanceDay, AttendanceStatus, AttendanceSummary},
    candidate::{Candidate, CandidateStage},
    employee::EmployeeCard,
    interview::{Interview, InterviewStatus},
    job_opening::{JobOpening, JobStatus},
    leave_request::{LeaveRecord, LeaveStatus},
};

/// Department options in the order the filter panel lists them.
pub const DEPARTMENTS: [&str; 8] = [
    "Human Resources",
    "Engineering",
    "Product",
    "Analytics",
    "Design",
    "Operations",
    "Marketing",
    "Finance",
];

/// Whose attendance the summary widget shows.
pub const ATTENDANCE_EMPLOYEE: &str = "Emma Watson";
pub const ATTENDANCE_MONTH: u32 = 1;
pub const ATTENDANCE_YEAR: i32 = 2024;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn employee(
    id: &str,
    name: &str,
    designation: &str,
    department: &str,
    phone_suffix: u32,
    leave_balance: u32,
) -> EmployeeCard {
    let email = format!("{}@company.com", name.to_lowercase().replace(' ', "."));
    EmployeeCard {
        id: id.to_string(),
        name: name.to_string(),
        designation: designation.to_string(),
        department: department.to_string(),
        email,
        phone: format!("+1-234-567-{phone_suffix}"),
        leave_balance: Some(leave_balance),
    }
}

pub static EMPLOYEES: Lazy<Vec<EmployeeCard>> = Lazy::new(|| {
    vec![
        employee("EMP001", "Emma Watson", "HR Manager", "Human Resources", 8901, 12),
        employee("EMP002", "John Smith", "Software Engineer", "Engineering", 8902, 15),
        employee("EMP003", "Sarah Johnson", "Product Manager", "Product", 8903, 10),
        employee("EMP004", "Michael Chen", "Data Analyst", "Analytics", 8904, 14),
        employee("EMP005", "Lisa Rodriguez", "Designer", "Design", 8905, 13),
        employee("EMP006", "David Kim", "QA Engineer", "Engineering", 8906, 11),
        employee("EMP007", "Angela Martinez", "Operations Manager", "Operations", 8907, 9),
        employee("EMP008", "Robert Taylor", "Backend Engineer", "Engineering", 8908, 16),
        employee("EMP009", "Jennifer Lee", "Marketing Manager", "Marketing", 8909, 12),
        employee("EMP010", "Thomas Wilson", "Finance Analyst", "Finance", 8910, 10),
    ]
});

fn leave(id: &str, employee_name: &str, leave_type: &str, start: NaiveDate, end: NaiveDate, days: u32) -> LeaveRecord {
    LeaveRecord {
        id: id.to_string(),
        employee_name: employee_name.to_string(),
        leave_type: leave_type.to_string(),
        start_date: start,
        end_date: end,
        status: LeaveStatus::Pending,
        days,
    }
}

pub static LEAVE_RECORDS: Lazy<Vec<LeaveRecord>> = Lazy::new(|| {
    vec![
        leave("LEAVE001", "Emma Watson", "Annual Leave", date(2024, 1, 15), date(2024, 1, 17), 3),
        leave("LEAVE002", "John Smith", "Sick Leave", date(2024, 1, 20), date(2024, 1, 20), 1),
        leave("LEAVE003", "Sarah Johnson", "Annual Leave", date(2024, 2, 5), date(2024, 2, 9), 5),
        leave("LEAVE004", "Michael Chen", "Personal Leave", date(2024, 1, 25), date(2024, 1, 26), 2),
        leave("LEAVE005", "Lisa Rodriguez", "Annual Leave", date(2024, 3, 10), date(2024, 3, 14), 5),
    ]
});

pub static ATTENDANCE_DAYS: Lazy<Vec<AttendanceDay>> = Lazy::new(|| {
    use AttendanceStatus::{Absent, HalfDay, Present};

    let statuses = [
        Present, Present, Absent, Present, HalfDay, Present, Present, Present, Absent, Present,
        Present, Present, Present, Present, Present, Present, Present, HalfDay, Present, Present,
        Present, Present,
    ];

    statuses
        .into_iter()
        .zip(1..)
        .map(|(status, day)| AttendanceDay {
            date: date(ATTENDANCE_YEAR, ATTENDANCE_MONTH, day),
            status,
        })
        .collect()
});

pub fn attendance_summary() -> AttendanceSummary {
    AttendanceSummary::from_days(
        ATTENDANCE_EMPLOYEE,
        ATTENDANCE_MONTH,
        ATTENDANCE_YEAR,
        &ATTENDANCE_DAYS,
    )
}

fn candidate(
    id: &str,
    name: &str,
    applied_role: &str,
    stage: CandidateStage,
    phone_suffix: u32,
    experience_years: u32,
) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: name.to_string(),
        applied_role: applied_role.to_string(),
        stage,
        email: format!("{}@mail.com", name.to_lowercase().replace(' ', ".")),
        phone: format!("+1-345-678-{phone_suffix}"),
        experience_years,
    }
}

pub static CANDIDATES: Lazy<Vec<Candidate>> = Lazy::new(|| {
    use CandidateStage::{Applied, Offer, Rejected, Screening};

    vec![
        candidate("CAND001", "Priya Sharma", "Senior Backend Engineer", CandidateStage::Interview, 9001, 7),
        candidate("CAND002", "Daniel Brooks", "Product Designer", Screening, 9002, 4),
        candidate("CAND003", "Mei Tanaka", "Data Scientist", Offer, 9003, 5),
        candidate("CAND004", "Carlos Alvarez", "Senior Backend Engineer", Applied, 9004, 8),
        candidate("CAND005", "Hannah Fischer", "Marketing Specialist", CandidateStage::Interview, 9005, 3),
        candidate("CAND006", "Omar Haddad", "Financial Controller", Rejected, 9006, 10),
    ]
});

fn job(id: &str, title: &str, department: &str, location: &str, openings: u32, status: JobStatus) -> JobOpening {
    JobOpening {
        id: id.to_string(),
        title: title.to_string(),
        department: department.to_string(),
        location: location.to_string(),
        openings,
        status,
    }
}

pub static JOB_OPENINGS: Lazy<Vec<JobOpening>> = Lazy::new(|| {
    vec![
        job("JOB001", "Senior Backend Engineer", "Engineering", "Remote", 2, JobStatus::Open),
        job("JOB002", "Product Designer", "Design", "New York", 1, JobStatus::Open),
        job("JOB003", "Data Scientist", "Analytics", "San Francisco", 1, JobStatus::Open),
        job("JOB004", "Marketing Specialist", "Marketing", "Chicago", 1, JobStatus::Open),
        job("JOB005", "Financial Controller", "Finance", "New York", 1, JobStatus::Closed),
    ]
});

fn interview(
    id: &str,
    candidate_name: &str,
    job_title: &str,
    interviewer: &str,
    scheduled_at: NaiveDateTime,
    round: &str,
    status: InterviewStatus,
) -> Interview {
    Interview {
        id: id.to_string(),
        candidate_name: candidate_name.to_string(),
        job_title: job_title.to_string(),
        interviewer: interviewer.to_string(),
        scheduled_at,
        round: round.to_string(),
        status,
    }
}

pub static INTERVIEWS: Lazy<Vec<Interview>> = Lazy::new(|| {
    use InterviewStatus::{Cancelled, Completed, Scheduled};

    vec![
        interview("INT001", "Priya Sharma", "Senior Backend Engineer", "Robert Taylor", at(date(2024, 1, 22), 10, 0), "Technical", Scheduled),
        interview("INT002", "Hannah Fischer", "Marketing Specialist", "Jennifer Lee", at(date(2024, 1, 23), 14, 30), "Hiring Manager", Scheduled),
        interview("INT003", "Mei Tanaka", "Data Scientist", "Michael Chen", at(date(2024, 1, 12), 11, 0), "Final", Completed),
        interview("INT004", "Daniel Brooks", "Product Designer", "Lisa Rodriguez", at(date(2024, 1, 24), 9, 0), "Portfolio Review", Scheduled),
        interview("INT005", "Omar Haddad", "Financial Controller", "Thomas Wilson", at(date(2024, 1, 10), 15, 0), "Technical", Cancelled),
    ]
});

/// Names of the employees working in `department` (case-insensitive).
pub fn employee_names_in(department: &str) -> Vec<&'static str> {
    EMPLOYEES
        .iter()
        .filter(|e| e.in_department(department))
        .map(|e| e.name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_match_the_sample_page() {
        assert_eq!(EMPLOYEES.len(), 10);
        assert_eq!(EMPLOYEES[0].email, "emma.watson@company.com");
        assert_eq!(EMPLOYEES[9].phone, "+1-234-567-8910");
        assert_eq!(LEAVE_RECORDS.len(), 5);
        assert!(LEAVE_RECORDS.iter().all(LeaveRecord::is_pending));
    }

    #[test]
    fn january_attendance_counts() {
        let summary = attendance_summary();
        assert_eq!(ATTENDANCE_DAYS.len(), 22);
        assert_eq!(ATTENDANCE_DAYS[21].date, date(2024, 1, 22));
        assert_eq!((summary.present, summary.absent, summary.half_day), (18, 2, 2));
        assert_eq!(summary.employee_name, "Emma Watson");
    }

    #[test]
    fn department_lookup_ignores_case() {
        assert_eq!(
            employee_names_in("engineering"),
            vec!["John Smith", "David Kim", "Robert Taylor"]
        );
        assert!(employee_names_in("Legal").is_empty());
    }

    #[test]
    fn every_employee_department_is_a_filter_option() {
        assert!(EMPLOYEES.iter().all(|e| DEPARTMENTS.iter().any(|d| *d == e.department)));
    }
}
