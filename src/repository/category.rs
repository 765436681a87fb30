use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::category::Category;
use crate::models::category::{Category as DbCategory, CategoryKeyword};
use crate::repository::{CategoryReader, DieselRepository, RepositoryError, RepositoryResult};

#[async_trait]
impl CategoryReader for DieselRepository {
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        self.read(|conn| {
            use crate::schema::{categories, category_keywords};

            let rows = categories::table
                .order(categories::id.asc())
                .select(DbCategory::as_select())
                .load::<DbCategory>(conn)?;

            let keyword_rows = category_keywords::table
                .select(CategoryKeyword::as_select())
                .load::<CategoryKeyword>(conn)?;

            let mut keywords: HashMap<i32, BTreeSet<String>> = HashMap::new();
            for row in keyword_rows {
                keywords
                    .entry(row.category_id)
                    .or_default()
                    .insert(row.keyword);
            }

            rows.into_iter()
                .map(|row| {
                    let curated = keywords.remove(&row.id).unwrap_or_default();
                    row.into_domain(curated)
                })
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| RepositoryError::ValidationError(err.to_string()))
        })
        .await
    }
}
