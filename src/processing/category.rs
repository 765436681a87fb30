use std::collections::BTreeSet;

use serde::Serialize;

use crate::MAX_CATEGORY_SUGGESTIONS;
use crate::domain::category::Category;
use crate::domain::suggestion::{CategorySuggestion, sort_by_score_desc};
use crate::processing::lexicon::{SIMPLE_TOPICS, TECHNICAL_TOPICS, TechnicalTopic, count_hits};
use crate::repository::CategoryReader;
use crate::text::keywords::{extract_keywords, jaccard};
use crate::text::normalizer;

/// Merged score per technical-lexicon hit.
pub const TECHNICAL_HIT_WEIGHT: f64 = 20.0;

/// Multiplier lifting a similarity score onto the technical-hit scale.
pub const SIMILARITY_WEIGHT: f64 = 100.0;

/// Hits of one technical-lexicon bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TechnicalMatch {
    pub topic: TechnicalTopic,
    pub hits: usize,
}

fn ticket_text(title: &str, description: &str) -> String {
    format!("{title} {description}")
}

fn suggestion(category: &Category, score: f64) -> CategorySuggestion {
    CategorySuggestion {
        id: category.id,
        name: category.name.clone(),
        score,
    }
}

/// Buckets of the technical lexicon found in `text`, most hits first.
pub fn match_technical_terms(text: &str) -> Vec<TechnicalMatch> {
    let folded = normalizer::fold(text);

    let mut matches: Vec<TechnicalMatch> = TECHNICAL_TOPICS
        .iter()
        .filter_map(|&topic| {
            let hits = count_hits(&folded, topic.terms());
            (hits > 0).then_some(TechnicalMatch { topic, hits })
        })
        .collect();

    matches.sort_by(|a, b| b.hits.cmp(&a.hits));
    matches
}

/// Highest exact-Jaccard category; the earliest one wins ties.
fn best_by_similarity(
    keywords: &BTreeSet<String>,
    categories: &[Category],
) -> Option<CategorySuggestion> {
    let mut best: Option<(&Category, f64)> = None;
    for category in categories {
        let score = jaccard(keywords, &category.keyword_profile());
        if score > best.map_or(0.0, |(_, current)| current) {
            best = Some((category, score));
        }
    }
    best.map(|(category, score)| suggestion(category, score))
}

/// Single best category by keyword-set similarity with title and
/// description.
///
/// Returns `None` when nothing overlaps or the categories cannot be read.
pub async fn suggest_category_similarity<R>(
    title: &str,
    description: &str,
    repo: &R,
) -> Option<CategorySuggestion>
where
    R: CategoryReader,
{
    let keywords = extract_keywords(&ticket_text(title, description));
    if keywords.is_empty() {
        return None;
    }

    let categories = match repo.list_categories().await {
        Ok(categories) => categories,
        Err(error) => {
            log::warn!("Failed to list categories for similarity suggestion: {error:?}");
            return None;
        }
    };

    best_by_similarity(&keywords, &categories)
}

/// Join technical buckets onto live categories and append the similarity
/// pick.
///
/// A bucket maps to the first category whose folded name contains the
/// bucket's keyword. Buckets whose keyword matches no category are dropped.
fn merge_hybrid(
    technical: &[TechnicalMatch],
    categories: &[Category],
    best_similar: Option<CategorySuggestion>,
) -> Vec<CategorySuggestion> {
    let mut merged: Vec<CategorySuggestion> = Vec::with_capacity(technical.len() + 1);

    for matched in technical {
        let keyword = matched.topic.category_keyword();
        let Some(category) = categories
            .iter()
            .find(|category| normalizer::fold(&category.name).contains(keyword))
        else {
            log::debug!(
                "No category name contains {keyword:?}; dropping {:?}",
                matched.topic
            );
            continue;
        };

        if merged.iter().any(|item| item.id == category.id) {
            continue;
        }
        merged.push(suggestion(category, matched.hits as f64 * TECHNICAL_HIT_WEIGHT));
    }

    if let Some(best) = best_similar {
        if !merged.iter().any(|item| item.id == best.id) {
            merged.push(CategorySuggestion {
                score: best.score * SIMILARITY_WEIGHT,
                ..best
            });
        }
    }

    sort_by_score_desc(&mut merged, |item| item.score);
    merged.truncate(MAX_CATEGORY_SUGGESTIONS);
    merged
}

/// Recommend up to three categories, preferring explicit technical terms.
///
/// Without technical hits this is the similarity suggestion alone. Failures
/// degrade to an empty list.
pub async fn suggest_categories_hybrid<R>(
    title: &str,
    description: &str,
    repo: &R,
) -> Vec<CategorySuggestion>
where
    R: CategoryReader,
{
    let technical = match_technical_terms(&ticket_text(title, description));
    if technical.is_empty() {
        return suggest_category_similarity(title, description, repo)
            .await
            .into_iter()
            .collect();
    }

    let (categories, best_similar) = futures::join!(
        repo.list_categories(),
        suggest_category_similarity(title, description, repo)
    );

    let categories = match categories {
        Ok(categories) => categories,
        Err(error) => {
            log::warn!("Failed to list categories for hybrid suggestion: {error:?}");
            return Vec::new();
        }
    };

    let merged = merge_hybrid(&technical, &categories, best_similar);
    log::debug!(
        "Hybrid suggestion: technical_buckets={}, suggested={}",
        technical.len(),
        merged.len()
    );
    merged
}

/// Recommend categories from an in-memory list without keyword data.
///
/// Falls back to the first category when text is present but matches no
/// bucket. Blank text or an empty list yields nothing.
pub fn suggest_categories_simple(text: &str, categories: &[Category]) -> Vec<CategorySuggestion> {
    let Some(first) = categories.first() else {
        return Vec::new();
    };
    if text.trim().is_empty() {
        return Vec::new();
    }

    let folded = normalizer::fold(text);
    let mut counts: Vec<(&Category, usize)> = Vec::new();

    for topic in SIMPLE_TOPICS {
        let hits = count_hits(&folded, topic.terms());
        if hits == 0 {
            continue;
        }

        let fragment = topic.display_fragment();
        let Some(category) = categories
            .iter()
            .find(|category| normalizer::lower(&category.name).contains(fragment))
        else {
            continue;
        };

        match counts.iter_mut().find(|(seen, _)| seen.id == category.id) {
            Some((_, count)) => *count += hits,
            None => counts.push((category, hits)),
        }
    }

    if counts.is_empty() {
        return vec![suggestion(first, 0.0)];
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(MAX_CATEGORY_SUGGESTIONS)
        .map(|(category, count)| suggestion(category, count as f64))
        .collect()
}
