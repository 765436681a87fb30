use serde::Serialize;

use crate::domain::types::DepartmentId;

/// Organizational department as owned by the reference store.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}
