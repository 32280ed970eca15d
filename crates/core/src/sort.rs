//! Sort state of an entity list view.
//!
//! A list view keeps its ordering in the `sort` query parameter as
//! `<field>,<asc|desc>`. [`SortState::initialize`] reads it back (falling back
//! to a default on anything malformed), [`SortState::toggle`] applies a column
//! header click, and [`SortState::to_query`] produces the canonical query
//! string the address bar must show once the view has synchronized.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the query parameter that carries the sort state.
pub const SORT_PARAM: &str = "sort";

/// Errors produced when parsing a sort parameter.
///
/// [`SortState::initialize`] swallows these and falls back to the default;
/// they exist so callers that care can tell why a value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortParseError {
    #[error("sort value must be `<field>,<direction>`: {0:?}")]
    MissingSeparator(String),
    #[error("sort field is empty")]
    EmptyField,
    #[error("invalid sort field: {0:?}")]
    InvalidField(String),
    #[error("invalid sort direction: {0:?}")]
    InvalidDirection(String),
}

/// Ordering direction of a sorted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// The other direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Query-string form (`asc` / `desc`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Ascending)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Descending)
        } else {
            Err(SortParseError::InvalidDirection(s.to_string()))
        }
    }
}

/// Field and direction a list is ordered by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

impl SortState {
    /// Create a sort state.
    #[must_use]
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Ascending order on `field`.
    #[must_use]
    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    /// Derive the sort state from a location's query string.
    ///
    /// The leading `?` is optional and other parameters are ignored; only the
    /// first `sort` parameter counts. A missing or malformed value yields
    /// ascending order on `default_field`.
    #[must_use]
    pub fn initialize(query: &str, default_field: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == SORT_PARAM)
            .and_then(|(_, value)| value.parse().ok())
            .unwrap_or_else(|| Self::ascending(default_field))
    }

    /// State after the user clicks the header of `clicked_field`.
    ///
    /// The direction flips whether or not the field changes; switching to a
    /// new column does not reset to ascending.
    #[must_use]
    pub fn toggle(&self, clicked_field: &str) -> Self {
        Self::new(clicked_field, self.direction.flipped())
    }

    /// Whether the list is ordered by `field`.
    #[must_use]
    pub fn is_sorted_by(&self, field: &str) -> bool {
        self.field == field
    }

    /// Value of the `sort` parameter, e.g. `status,desc`.
    #[must_use]
    pub fn to_param(&self) -> String {
        format!("{},{}", self.field, self.direction)
    }

    /// Canonical query string, e.g. `?sort=status,desc`.
    #[must_use]
    pub fn to_query(&self) -> String {
        format!("?{SORT_PARAM}={}", self.to_param())
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.direction)
    }
}

impl FromStr for SortState {
    type Err = SortParseError;

    /// Parse a `sort` parameter value (`<field>,<direction>`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s
            .split_once(',')
            .ok_or_else(|| SortParseError::MissingSeparator(s.to_string()))?;
        if direction.contains(',') {
            return Err(SortParseError::MissingSeparator(s.to_string()));
        }
        if field.is_empty() {
            return Err(SortParseError::EmptyField);
        }
        if !is_valid_field(field) {
            return Err(SortParseError::InvalidField(field.to_string()));
        }
        Ok(Self::new(field, direction.parse()?))
    }
}

/// Field names are property paths: ASCII alphanumerics, `_` and `.`.
fn is_valid_field(field: &str) -> bool {
    field
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}
