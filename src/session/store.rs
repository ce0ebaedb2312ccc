use moka::future::Cache;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, error};
use uuid::Uuid;

use super::dashboard::DashboardState;
use crate::agent::{AgentError, contract::AgentResponse};
use crate::config::Config;
use crate::error::AppError;
use crate::model::persona::Persona;
use crate::render::RenderedMessage;

/// One dashboard's state. The lock is never held across an `.await`.
pub type SharedSession = Arc<Mutex<DashboardState>>;

/// In-memory dashboard sessions keyed by id. Idle sessions expire, the same
/// way a reloaded page forgets its state.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Cache<String, SharedSession>,
}

impl SessionStore {
    pub fn new(max_capacity: u64, idle: Duration) -> Self {
        Self {
            sessions: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_idle(idle)
                .build(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.session_capacity, Duration::from_secs(config.session_idle_secs))
    }

    /// Seeds a fresh session from the fixtures.
    pub async fn create(&self, persona: Persona) -> (String, SharedSession) {
        let id = Uuid::new_v4().to_string();
        let session = Arc::new(Mutex::new(DashboardState::new(persona)));

        self.sessions.insert(id.clone(), session.clone()).await;
        debug!(session_id = %id, persona = %persona, "Session created");

        (id, session)
    }

    pub async fn get(&self, id: &str) -> Result<SharedSession, AppError> {
        self.sessions
            .get(id)
            .await
            .ok_or_else(|| AppError::NotFound("Session not found".to_string()))
    }

    /// Returns true when a session was dropped.
    pub async fn remove(&self, id: &str) -> bool {
        self.sessions.remove(id).await.is_some()
    }
}

pub fn lock(session: &SharedSession) -> Result<MutexGuard<'_, DashboardState>, AppError> {
    session.lock().map_err(|e| {
        error!(error = %e, "Session state poisoned");
        AppError::Internal
    })
}

/// A chat turn waiting on the agent. If it is dropped before `finish`, for
/// example because the client disconnected, the session's loading flag is
/// cleared and the fallback reply recorded so the session stays usable.
pub struct PendingChat {
    session: SharedSession,
    finished: bool,
}

impl PendingChat {
    /// Records the user message and marks the session as loading.
    pub fn begin(session: SharedSession, input: &str) -> Result<(Self, Persona), AppError> {
        let persona = {
            let mut state = lock(&session)?;
            state.begin_chat(input)?;
            state.persona()
        };

        Ok((Self { session, finished: false }, persona))
    }

    pub fn finish(mut self, outcome: Result<AgentResponse, AgentError>) -> Result<RenderedMessage, AppError> {
        self.finished = true;
        Ok(lock(&self.session)?.finish_chat(outcome))
    }
}

impl Drop for PendingChat {
    fn drop(&mut self) {
        if self.finished {
            return;
        }

        match self.session.lock() {
            Ok(mut state) => state.abandon_chat(),
            Err(e) => error!(error = %e, "Session state poisoned while abandoning chat"),
        }
    }
}
