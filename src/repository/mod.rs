use async_trait::async_trait;
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::domain::category::Category;
use crate::domain::department::Department;
use crate::domain::staff::Staff;
use crate::models::config::ClassifierConfig;

pub mod category;
pub mod department;
pub mod errors;
pub mod staff;

#[cfg(test)]
pub(crate) mod fake;

pub use errors::{RepositoryError, RepositoryResult};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Read access to the department directory.
#[async_trait]
pub trait DepartmentReader: Send + Sync {
    async fn list_departments(&self) -> RepositoryResult<Vec<Department>>;
}

/// Read access to the staff directory.
#[async_trait]
pub trait StaffReader: Send + Sync {
    async fn list_staff(&self) -> RepositoryResult<Vec<Staff>>;
}

/// Read access to ticket categories and their curated keywords.
#[async_trait]
pub trait CategoryReader: Send + Sync {
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

/// Build an r2d2 pool of SQLite connections.
pub fn establish_connection_pool(database_url: &str, max_size: u32) -> RepositoryResult<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder().max_size(max_size).build(manager)?;
    Ok(pool)
}

/// Read-only adapter over the helpdesk's reference tables.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn from_config(config: &ClassifierConfig) -> RepositoryResult<Self> {
        let pool = establish_connection_pool(&config.database_url, config.pool_size)?;
        Ok(Self::new(pool))
    }

    /// Run a blocking query on a pooled connection off the async executor.
    async fn read<T, F>(&self, query: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            query(&mut *conn)
        })
        .await?
    }
}
