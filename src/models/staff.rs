use diesel::prelude::*;

use crate::domain::staff::Staff as DomainStaff;
use crate::domain::types::{StaffId, TypeConstraintError};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::staff)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Staff {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl TryFrom<Staff> for DomainStaff {
    type Error = TypeConstraintError;

    fn try_from(row: Staff) -> Result<Self, Self::Error> {
        Ok(Self {
            id: StaffId::new(row.id)?,
            first_name: row.first_name,
            last_name: row.last_name,
        })
    }
}
