//! In-memory reader used by unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::category::Category;
use crate::domain::department::Department;
use crate::domain::staff::Staff;
use crate::domain::types::{CategoryId, DepartmentId, StaffId};
use crate::repository::{
    CategoryReader, DepartmentReader, RepositoryError, RepositoryResult, StaffReader,
};

#[derive(Default)]
pub(crate) struct FakeRepository {
    pub departments: Vec<Department>,
    pub staff: Vec<Staff>,
    pub categories: Vec<Category>,
    pub fail_departments: bool,
    pub fail_staff: bool,
    pub fail_categories: bool,
    calls: Mutex<Vec<&'static str>>,
}

impl FakeRepository {
    pub fn with_departments(departments: &[(i32, &str)]) -> Self {
        Self {
            departments: departments
                .iter()
                .map(|(id, name)| Department {
                    id: DepartmentId::new(*id).expect("valid department id"),
                    name: name.to_string(),
                })
                .collect(),
            ..Default::default()
        }
    }

    pub fn with_staff(staff: &[(i32, &str, &str)]) -> Self {
        Self {
            staff: staff
                .iter()
                .map(|(id, first, last)| Staff {
                    id: StaffId::new(*id).expect("valid staff id"),
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                })
                .collect(),
            ..Default::default()
        }
    }

    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().expect("calls mutex poisoned").push(call);
    }
}

pub(crate) fn category(id: i32, name: &str) -> Category {
    Category::new(CategoryId::new(id).expect("valid category id"), name)
}

fn injected(what: &str) -> RepositoryError {
    RepositoryError::Unexpected(format!("injected {what} failure"))
}

#[async_trait]
impl DepartmentReader for FakeRepository {
    async fn list_departments(&self) -> RepositoryResult<Vec<Department>> {
        self.record("list_departments");
        if self.fail_departments {
            return Err(injected("department"));
        }
        Ok(self.departments.clone())
    }
}

#[async_trait]
impl StaffReader for FakeRepository {
    async fn list_staff(&self) -> RepositoryResult<Vec<Staff>> {
        self.record("list_staff");
        if self.fail_staff {
            return Err(injected("staff"));
        }
        Ok(self.staff.clone())
    }
}

#[async_trait]
impl CategoryReader for FakeRepository {
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        self.record("list_categories");
        if self.fail_categories {
            return Err(injected("category"));
        }
        Ok(self.categories.clone())
    }
}
