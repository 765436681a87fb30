use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::staff::Staff;
use crate::models::staff::Staff as DbStaff;
use crate::repository::{DieselRepository, RepositoryError, RepositoryResult, StaffReader};

#[async_trait]
impl StaffReader for DieselRepository {
    async fn list_staff(&self) -> RepositoryResult<Vec<Staff>> {
        self.read(|conn| {
            use crate::schema::staff;

            let result = staff::table
                .order(staff::id.asc())
                .select(DbStaff::as_select())
                .load::<DbStaff>(conn)?;

            result
                .into_iter()
                .map(Staff::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| RepositoryError::ValidationError(err.to_string()))
        })
        .await
    }
}
