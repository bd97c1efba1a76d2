use chrono::{DateTime, Utc};
use tracing::instrument;

use crate::error::Result;
use crate::league;
use crate::model::*;

/// The back-office entry point.
///
/// `AdminConsole` holds the caller's [`Session`] and exposes the search and
/// bracket views, each gated on the admin role at `now`.
///
/// # Examples
///
/// ```
/// # fn example() -> league_core::Result<()> {
/// use chrono::{Duration, Utc};
/// use league_core::{AdminConsole, FilterConfig, FilterQuery, Record, Role, Session};
///
/// let now = Utc::now();
/// let session = Session::sign_in("u-1", Role::Admin, now, Duration::hours(8));
/// let console = AdminConsole::new(session);
///
/// let teams = vec![Record::new().with("name", "AS Garde").with("city", "Kaédi")];
/// let found = console.filter(
///     &teams,
///     &FilterConfig::teams(),
///     &FilterQuery::text("garde"),
///     now,
/// )?;
/// assert_eq!(found.len(), 1);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdminConsole {
    session: Session,
}

impl AdminConsole {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Replace the held session, e.g. after signing in again.
    pub fn set_session(&mut self, session: Session) {
        self.session = session;
    }

    pub fn sign_out(&mut self) {
        self.session.invalidate();
    }

    /// Filter a collection for a back-office list screen.
    #[instrument(skip(self, records, config))]
    pub fn filter<'a, T: Fields>(
        &self,
        records: &'a [T],
        config: &FilterConfig,
        query: &FilterQuery,
        now: DateTime<Utc>,
    ) -> Result<Vec<&'a T>> {
        self.session.require_admin(now)?;
        Ok(league::search::filter(records, config, query))
    }

    /// Count matches for a back-office list header.
    #[instrument(skip(self, records, config))]
    pub fn count<T: Fields>(
        &self,
        records: &[T],
        config: &FilterConfig,
        query: &FilterQuery,
        now: DateTime<Utc>,
    ) -> Result<usize> {
        self.session.require_admin(now)?;
        Ok(league::search::count(records, config, query))
    }

    /// Per-round progress of the cup, rounds `1..=rounds` always present.
    #[instrument(skip(self, matches))]
    pub fn bracket_summary(
        &self,
        matches: &[Match],
        rounds: u32,
        now: DateTime<Utc>,
    ) -> Result<BracketSummary> {
        self.session.require_admin(now)?;
        Ok(league::bracket::summarize_rounds(matches, rounds))
    }
}
