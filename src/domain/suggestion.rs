//! Ranked, advisory results handed back to the ticket workflow.

use serde::Serialize;

use crate::domain::types::{CategoryId, DepartmentId, StaffId};

/// A reference record recognized in free text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchResult<Id> {
    pub id: Id,
    pub display_name: String,
    /// Confidence in `[0.10, 1.0]`.
    pub score: f64,
}

/// Departments and staff recognized in one piece of text.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RecognizedEntities {
    pub departments: Vec<MatchResult<DepartmentId>>,
    pub personnel: Vec<MatchResult<StaffId>>,
}

/// A recommended ticket category.
///
/// Scores from different strategies live on different scales and are only
/// comparable within one result list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategorySuggestion {
    pub id: CategoryId,
    pub name: String,
    pub score: f64,
}

/// Sort descending by score. Ties keep their input order.
pub(crate) fn sort_by_score_desc<T, F>(items: &mut [T], score: F)
where
    F: Fn(&T) -> f64,
{
    items.sort_by(|a, b| score(b).total_cmp(&score(a)));
}
