// src/session/mod.rs — Per-session conversational state

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Messages kept per session before the oldest is evicted.
pub const HISTORY_CAPACITY: usize = 10;

/// How much risk the user says they can stomach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

/// Conversational state for one session id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    pub session_id: String,
    /// Coins the user has asked about, oldest first. Append-only.
    pub favorite_coins: Vec<String>,
    /// Raw user inputs, oldest first, at most [`HISTORY_CAPACITY`].
    pub history: Vec<String>,
    pub risk_tolerance: RiskTolerance,
    pub last_activity: DateTime<Utc>,
}

impl SessionContext {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            favorite_coins: Vec::new(),
            history: Vec::new(),
            risk_tolerance: RiskTolerance::default(),
            last_activity: Utc::now(),
        }
    }

    /// Record a message: push, evict past capacity (oldest first), refresh
    /// the activity timestamp.
    pub fn push_history(&mut self, message: &str) {
        self.history.push(message.to_string());
        if self.history.len() > HISTORY_CAPACITY {
            self.history.remove(0);
        }
        self.last_activity = Utc::now();
    }
}

/// Session lookup and mutation seam. A persistent implementation (redis,
/// sqlite) can replace the in-memory store without touching dispatch logic.
///
/// `get_or_create` hands out the per-session lock; the orchestrator holds it
/// for a whole turn, which serializes same-session mutation. Cross-session
/// access needs no coordination.
pub trait SessionStore: Send + Sync {
    fn get_or_create(&self, session_id: &str) -> Arc<Mutex<SessionContext>>;

    /// Append a message to the context's history. This is the write-through
    /// point for persistent implementations.
    fn append_history(&self, ctx: &mut SessionContext, message: &str);
}

/// Process-local session store. Sessions are created lazily on first access
/// and live for the process lifetime; expiry is a collaborator concern.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<SessionContext>>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get_or_create(&self, session_id: &str) -> Arc<Mutex<SessionContext>> {
        if let Ok(sessions) = self.sessions.read() {
            if let Some(session) = sessions.get(session_id) {
                return session.clone();
            }
        }

        let mut sessions = match self.sessions.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(SessionContext::new(session_id))))
            .clone()
    }

    fn append_history(&self, ctx: &mut SessionContext, message: &str) {
        ctx.push_history(message);
    }
}
