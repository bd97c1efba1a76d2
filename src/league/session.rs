use chrono::{DateTime, Duration, Utc};
use tracing::warn;

use crate::error::{LeagueError, Result};
use crate::model::{Role, Session};

impl Session {
    /// Nobody signed in.
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            role: Role::Viewer,
            issued_at: None,
            expires_at: None,
            invalidated: false,
        }
    }

    /// A session for `user_id`, valid for `ttl` from `issued_at`.
    pub fn sign_in(
        user_id: impl Into<String>,
        role: Role,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            user_id: Some(user_id.into()),
            role,
            issued_at: Some(issued_at),
            expires_at: issued_at.checked_add_signed(ttl),
            invalidated: false,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.issued_at
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Signs out. The session stays inert from then on.
    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.check(now).is_ok()
    }

    pub fn is_admin(&self, now: DateTime<Utc>) -> bool {
        self.is_active(now) && self.role == Role::Admin
    }

    /// Gate for back-office operations.
    pub fn require_admin(&self, now: DateTime<Utc>) -> Result<&Self> {
        self.require_role(Role::Admin, "the admin back-office", now)
    }

    pub(crate) fn require_role(
        &self,
        role: Role,
        context: &'static str,
        now: DateTime<Utc>,
    ) -> Result<&Self> {
        self.check(now)?;
        if self.role != role {
            warn!(user_id = ?self.user_id, role = %self.role, context, "access denied");
            return Err(LeagueError::Forbidden {
                role: self.role,
                context,
            });
        }
        Ok(self)
    }

    fn check(&self, now: DateTime<Utc>) -> Result<()> {
        if self.invalidated || self.user_id.is_none() {
            return Err(LeagueError::NotAuthenticated);
        }
        match self.expires_at {
            Some(expired_at) if now >= expired_at => {
                Err(LeagueError::SessionExpired { expired_at })
            }
            // An unrepresentable expiry never elapses.
            _ => Ok(()),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}
