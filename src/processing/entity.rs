//! Department and staff recognition in free-text ticket descriptions.
//!
//! Verbatim containment of the full name is checked first and short-circuits
//! with a perfect score. Partial and stemmed scoring is the fallback for
//! paraphrased or inflected mentions.

use std::collections::BTreeSet;

use crate::MATCH_THRESHOLD;
use crate::domain::department::Department;
use crate::domain::staff::Staff;
use crate::domain::suggestion::{MatchResult, RecognizedEntities, sort_by_score_desc};
use crate::domain::types::{DepartmentId, StaffId};
use crate::repository::{DepartmentReader, RepositoryResult, StaffReader};
use crate::text::normalizer;
use crate::text::stemmer::{MIN_TOKEN_CHARS, tokenize};

const COVERAGE_WEIGHT: f64 = 0.6;
const STEM_OVERLAP_WEIGHT: f64 = 0.4;

const FULL_NAME_SCORE: f64 = 1.0;
const BOTH_NAMES_SCORE: f64 = 0.9;
const FIRST_NAME_SCORE: f64 = 0.6;
const LAST_NAME_SCORE: f64 = 0.5;

/// Score one department name against already normalized text.
fn score_department(normalized_text: &str, text_stems: &BTreeSet<String>, name: &str) -> f64 {
    let normalized_name = normalizer::lower(name.trim());
    if normalized_name.is_empty() {
        return 0.0;
    }
    if normalized_text.contains(&normalized_name) {
        return 1.0;
    }

    let parts: Vec<&str> = normalized_name
        .split_whitespace()
        .filter(|part| part.chars().count() >= MIN_TOKEN_CHARS)
        .collect();
    let coverage = if parts.is_empty() {
        0.0
    } else {
        let found = parts
            .iter()
            .filter(|part| normalized_text.contains(*part))
            .count();
        found as f64 / parts.len() as f64
    };

    let name_stems: BTreeSet<String> = tokenize(&normalized_name).into_iter().collect();
    let stem_overlap = if name_stems.is_empty() {
        0.0
    } else {
        name_stems.intersection(text_stems).count() as f64 / name_stems.len() as f64
    };

    COVERAGE_WEIGHT * coverage + STEM_OVERLAP_WEIGHT * stem_overlap
}

/// Score one staff member against already normalized text.
fn score_staff(normalized_text: &str, staff: &Staff) -> f64 {
    let first = normalizer::lower(staff.first_name.trim());
    let last = normalizer::lower(staff.last_name.trim());
    let full = normalizer::lower(&staff.full_name());

    if !first.is_empty() && !last.is_empty() && normalized_text.contains(&full) {
        return FULL_NAME_SCORE;
    }

    let has_first = !first.is_empty() && normalized_text.contains(&first);
    let has_last = !last.is_empty() && normalized_text.contains(&last);

    match (has_first, has_last) {
        (true, true) => BOTH_NAMES_SCORE,
        (true, false) => FIRST_NAME_SCORE,
        (false, true) => LAST_NAME_SCORE,
        (false, false) => 0.0,
    }
}

fn rank_departments(text: &str, departments: Vec<Department>) -> Vec<MatchResult<DepartmentId>> {
    let normalized_text = normalizer::lower(text);
    let text_stems: BTreeSet<String> = tokenize(&normalized_text).into_iter().collect();

    let mut matches: Vec<_> = departments
        .into_iter()
        .filter_map(|department| {
            let score = score_department(&normalized_text, &text_stems, &department.name);
            (score >= MATCH_THRESHOLD).then(|| MatchResult {
                id: department.id,
                display_name: department.name,
                score,
            })
        })
        .collect();

    sort_by_score_desc(&mut matches, |item| item.score);
    matches
}

fn rank_staff(text: &str, staff: Vec<Staff>) -> Vec<MatchResult<StaffId>> {
    let normalized_text = normalizer::lower(text);

    let mut matches: Vec<_> = staff
        .into_iter()
        .filter_map(|member| {
            let score = score_staff(&normalized_text, &member);
            (score >= MATCH_THRESHOLD).then(|| MatchResult {
                id: member.id,
                display_name: member.full_name(),
                score,
            })
        })
        .collect();

    sort_by_score_desc(&mut matches, |item| item.score);
    matches
}

/// Departments the text is probably about, best first.
///
/// Lookup failures propagate; blank text yields an empty list without a
/// lookup.
pub async fn recognize_departments<R>(
    text: &str,
    repo: &R,
) -> RepositoryResult<Vec<MatchResult<DepartmentId>>>
where
    R: DepartmentReader,
{
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let departments = repo.list_departments().await?;
    let total = departments.len();
    let matches = rank_departments(text, departments);
    log::debug!("Recognized {} of {total} departments", matches.len());
    Ok(matches)
}

/// Staff members the text probably mentions, best first.
pub async fn recognize_personnel<R>(
    text: &str,
    repo: &R,
) -> RepositoryResult<Vec<MatchResult<StaffId>>>
where
    R: StaffReader,
{
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let staff = repo.list_staff().await?;
    let total = staff.len();
    let matches = rank_staff(text, staff);
    log::debug!("Recognized {} of {total} staff members", matches.len());
    Ok(matches)
}

/// Run department and staff recognition concurrently.
pub async fn recognize_entities<R>(text: &str, repo: &R) -> RepositoryResult<RecognizedEntities>
where
    R: DepartmentReader + StaffReader,
{
    let (departments, personnel) = futures::try_join!(
        recognize_departments(text, repo),
        recognize_personnel(text, repo)
    )?;

    Ok(RecognizedEntities {
        departments,
        personnel,
    })
}
