//! Helpers for integration tests.
#![allow(dead_code)]

use diesel::connection::SimpleConnection;
use helpdesk_classifier::repository::{DbPool, DieselRepository, establish_connection_pool};
use tempfile::TempDir;

const SCHEMA: &str = "
CREATE TABLE departments (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL
);
CREATE TABLE staff (
    id INTEGER PRIMARY KEY NOT NULL,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL
);
CREATE TABLE categories (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    description TEXT
);
CREATE TABLE category_keywords (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    category_id INTEGER NOT NULL REFERENCES categories (id),
    keyword TEXT NOT NULL
);
";

/// Temporary SQLite database used in integration tests.
pub struct TestDb {
    database_url: String,
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    /// Empty database without any tables.
    pub fn empty() -> Self {
        init_logging();

        let dir = tempfile::tempdir().expect("Failed to create temp dir.");
        let database_url = dir
            .path()
            .join("helpdesk.db")
            .to_str()
            .expect("utf-8 path")
            .to_string();
        let pool = establish_connection_pool(&database_url, 2)
            .expect("Failed to establish SQLite connection.");
        TestDb {
            database_url,
            pool,
            _dir: dir,
        }
    }

    /// Database with the reference tables created.
    pub fn new() -> Self {
        let db = Self::empty();
        db.execute(SCHEMA);
        db
    }

    pub fn execute(&self, sql: &str) {
        let mut conn = self
            .pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.batch_execute(sql).expect("Failed to run SQL.");
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
