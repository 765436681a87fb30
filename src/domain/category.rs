use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::types::CategoryId;
use crate::text::keywords::extract_keywords;
use crate::text::normalizer;

/// Ticket category together with its curated keyword associations.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub curated_keywords: BTreeSet<String>,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            curated_keywords: BTreeSet::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.curated_keywords
            .extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Keyword set used for similarity scoring.
    ///
    /// Union of the curated keywords (lowercased), the words of the name and
    /// the words of the description.
    pub fn keyword_profile(&self) -> BTreeSet<String> {
        let mut profile: BTreeSet<String> = self
            .curated_keywords
            .iter()
            .map(|keyword| normalizer::lower(keyword.trim()))
            .filter(|keyword| !keyword.is_empty())
            .collect();
        profile.extend(extract_keywords(&self.name));
        if let Some(description) = &self.description {
            profile.extend(extract_keywords(description));
        }
        profile
    }
}
