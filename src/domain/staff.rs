use serde::Serialize;

use crate::domain::types::StaffId;

/// Staff member as owned by the reference store.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Staff {
    pub id: StaffId,
    pub first_name: String,
    pub last_name: String,
}

impl Staff {
    /// "first last", trimmed when either part is missing.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}
