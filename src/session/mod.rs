pub mod dashboard;
pub mod dialog;
pub mod store;

pub use dashboard::{DashboardError, DashboardState, LeaveFilters, SessionView};
pub use dialog::ConfirmDialog;
pub use store::{PendingChat, SessionStore, SharedSession};
