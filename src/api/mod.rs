pub mod attendance;
pub mod chat;
pub mod employee;
pub mod hiring;
pub mod leave_request;
pub mod session;
