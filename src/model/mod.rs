pub mod attendance;
pub mod candidate;
pub mod employee;
pub mod interview;
pub mod job_opening;
pub mod leave_request;
pub mod message;
pub mod persona;
