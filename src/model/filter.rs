use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which fields of a collection are searched as text and which are read as dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub search_fields: Vec<String>,
    pub date_fields: Vec<String>,
}

impl FilterConfig {
    pub fn new<S, D>(search_fields: S, date_fields: D) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            search_fields: search_fields.into_iter().map(Into::into).collect(),
            date_fields: date_fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Text-only configuration.
    pub fn text<S>(search_fields: S) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self::new(search_fields, std::iter::empty::<String>())
    }

    /// News articles listed in the back-office.
    pub fn news() -> Self {
        Self::new(["title", "summary", "content", "author"], ["published_at", "created_at"])
    }

    /// Club directory.
    pub fn teams() -> Self {
        Self::new(["name", "short_name", "city", "stadium", "coach"], ["founded_at"])
    }

    /// Rosters.
    pub fn players() -> Self {
        Self::new(["name", "position", "nationality", "team", "number"], ["birth_date"])
    }

    /// League and cup fixtures.
    pub fn matches() -> Self {
        Self::new(["home_team", "away_team", "venue", "competition"], ["kickoff_at"])
    }

    /// Shop catalogue.
    pub fn products() -> Self {
        Self::new(["name", "description", "category", "price"], ["created_at"])
    }

    /// Shop orders.
    pub fn orders() -> Self {
        Self::new(
            ["reference", "customer_name", "customer_phone", "status", "items"],
            ["created_at", "delivered_at"],
        )
    }
}

/// Inclusive range of calendar dates. A missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    pub fn since(start: NaiveDate) -> Self {
        Self::new(Some(start), None)
    }

    pub fn until(end: NaiveDate) -> Self {
        Self::new(None, Some(end))
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

/// Free-text query plus optional date range, as typed into a back-office search bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterQuery {
    pub text: String,
    pub range: DateRange,
}

impl FilterQuery {
    pub fn new(text: impl Into<String>, range: DateRange) -> Self {
        Self {
            text: text.into(),
            range,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, DateRange::default())
    }

    pub fn range(range: DateRange) -> Self {
        Self::new(String::new(), range)
    }

    /// The query text as typed, `None` when it is empty or only whitespace.
    pub fn needle(&self) -> Option<&str> {
        Some(self.text.as_str()).filter(|t| !t.trim().is_empty())
    }

    /// `true` when the query filters nothing out.
    pub fn is_noop(&self) -> bool {
        self.needle().is_none() && self.range.is_unbounded()
    }
}
