use chrono::{DateTime, Utc};

use crate::model::Role;

/// All errors that can occur outside the infallible filter and bracket views.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LeagueError {
    /// No user is signed in, or the session was invalidated.
    #[error("not signed in")]
    NotAuthenticated,

    /// The session outlived its time-to-live.
    #[error("session expired at {expired_at}")]
    SessionExpired { expired_at: DateTime<Utc> },

    /// The signed-in user lacks the role required for the operation.
    #[error("role {role} may not access {context}")]
    Forbidden { role: Role, context: &'static str },

    /// A match breaks one of the bracket data-model invariants.
    #[error("invalid match {id}: {reason}")]
    InvalidMatch { id: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, LeagueError>;
