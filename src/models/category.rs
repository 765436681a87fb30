use std::collections::BTreeSet;

use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::types::{CategoryId, TypeConstraintError};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::category_keywords)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryKeyword {
    pub id: i32,
    pub category_id: i32,
    pub keyword: String,
}

impl Category {
    /// Attach the curated keywords loaded separately for this row.
    pub fn into_domain(
        self,
        curated_keywords: BTreeSet<String>,
    ) -> Result<DomainCategory, TypeConstraintError> {
        Ok(DomainCategory {
            id: CategoryId::new(self.id)?,
            name: self.name,
            description: self.description,
            curated_keywords,
        })
    }
}
