//! Route-derived todo filter.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Todo;

/// Which subset of the list the rendering layer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    /// Derive the filter from the current route.
    ///
    /// Only the last non-empty path segment counts, so `/active`, `#/active`
    /// and `active` all select [`TodoFilter::Active`]. Unknown segments fall
    /// back to [`TodoFilter::All`].
    pub fn from_route(route: &str) -> Self {
        let without_query = route.split('?').next().unwrap_or("");
        let path = match without_query.split_once('#') {
            Some((_, fragment)) if !fragment.is_empty() => fragment,
            Some((base, _)) => base,
            None => without_query,
        };
        let segment = path.split('/').filter(|s| !s.is_empty()).last().unwrap_or("");

        match segment {
            "active" => TodoFilter::Active,
            "completed" => TodoFilter::Completed,
            _ => TodoFilter::All,
        }
    }

    /// Canonical route for this filter.
    pub fn as_route(&self) -> &'static str {
        match self {
            TodoFilter::All => "/",
            TodoFilter::Active => "/active",
            TodoFilter::Completed => "/completed",
        }
    }

    /// Whether a todo is shown under this filter.
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => todo.is_active(),
            TodoFilter::Completed => todo.completed,
        }
    }
}

impl fmt::Display for TodoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TodoFilter::All => "All",
            TodoFilter::Active => "Active",
            TodoFilter::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}
