use diesel::prelude::*;

use crate::domain::department::Department as DomainDepartment;
use crate::domain::types::{DepartmentId, TypeConstraintError};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::departments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Department {
    pub id: i32,
    pub name: String,
}

impl TryFrom<Department> for DomainDepartment {
    type Error = TypeConstraintError;

    fn try_from(row: Department) -> Result<Self, Self::Error> {
        Ok(Self {
            id: DepartmentId::new(row.id)?,
            name: row.name,
        })
    }
}
