use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::department::Department;
use crate::models::department::Department as DbDepartment;
use crate::repository::{DepartmentReader, DieselRepository, RepositoryError, RepositoryResult};

#[async_trait]
impl DepartmentReader for DieselRepository {
    async fn list_departments(&self) -> RepositoryResult<Vec<Department>> {
        self.read(|conn| {
            use crate::schema::departments;

            let result = departments::table
                .order(departments::id.asc())
                .select(DbDepartment::as_select())
                .load::<DbDepartment>(conn)?;

            result
                .into_iter()
                .map(Department::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| RepositoryError::ValidationError(err.to_string()))
        })
        .await
    }
}
