use super::sqlite::SqliteDatabase;
use super::Database;
use crate::error::Result;
use crate::model::{Row, Value};

/// Schema the tracker expects to find. Only loaded into private in-memory
/// databases; real databases are provisioned outside the tool.
pub const REFERENCE_SCHEMA: &str = include_str!("../../../db/schema.sql");

pub const SAMPLE_SEEDS: &str = include_str!("../../../db/seeds.sql");

/// A throwaway SQLite database living in memory, schema already applied.
pub struct InMemoryDatabase {
    inner: SqliteDatabase,
}

impl InMemoryDatabase {
    pub fn new() -> Result<Self> {
        let mut inner = SqliteDatabase::open_in_memory()?;
        inner.execute_batch(REFERENCE_SCHEMA)?;
        Ok(Self { inner })
    }

    /// Same as [`InMemoryDatabase::new`] plus the sample departments, roles and
    /// employees.
    pub fn seeded() -> Result<Self> {
        let mut db = Self::new()?;
        db.inner.execute_batch(SAMPLE_SEEDS)?;
        Ok(db)
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

impl Database for InMemoryDatabase {
    fn query(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        self.inner.query(sql, params)
    }

    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
        self.inner.execute(sql, params)
    }

    fn close(&mut self) -> Result<()> {
        self.inner.close()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::TrackerError;
    use crate::model::{NewEmployee, NewRole};
    use crate::store::queries;

    pub struct DatabaseFixture {
        pub db: InMemoryDatabase,
    }

    impl Default for DatabaseFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl DatabaseFixture {
        pub fn new() -> Self {
            Self {
                db: InMemoryDatabase::new().expect("in-memory database"),
            }
        }

        pub fn with_department(mut self, name: &str) -> Self {
            queries::insert_department(&mut self.db, name).unwrap();
            self
        }

        pub fn with_role(mut self, title: &str, salary: f64, department_id: i64) -> Self {
            let role = NewRole {
                title: title.to_string(),
                salary,
                department_id,
            };
            queries::insert_role(&mut self.db, &role).unwrap();
            self
        }

        pub fn with_employee(mut self, first_name: &str, last_name: &str, role_id: i64) -> Self {
            let employee = NewEmployee {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                role_id,
            };
            queries::insert_employee(&mut self.db, &employee).unwrap();
            self
        }

        /// The tracker never sets a manager; fixtures do it directly.
        pub fn with_managed_employee(
            mut self,
            first_name: &str,
            last_name: &str,
            role_id: i64,
            manager_id: i64,
        ) -> Self {
            self.db
                .execute(
                    "INSERT INTO employee (first_name, last_name, role_id, manager_id) VALUES (?, ?, ?, ?)",
                    &[
                        first_name.into(),
                        last_name.into(),
                        role_id.into(),
                        manager_id.into(),
                    ],
                )
                .unwrap();
            self
        }
    }

    /// Wraps a database, recording every statement and optionally failing the
    /// ones containing a given fragment.
    pub struct RecordingDatabase<D: Database> {
        inner: D,
        pub statements: Vec<String>,
        pub close_calls: usize,
        fail_on: Option<String>,
    }

    impl<D: Database> RecordingDatabase<D> {
        pub fn new(inner: D) -> Self {
            Self {
                inner,
                statements: Vec::new(),
                close_calls: 0,
                fail_on: None,
            }
        }

        pub fn failing_on(mut self, fragment: &str) -> Self {
            self.fail_on = Some(fragment.to_string());
            self
        }

        /// Number of recorded statements equal to `sql`.
        pub fn count(&self, sql: &str) -> usize {
            self.statements.iter().filter(|s| s.as_str() == sql).count()
        }

        pub fn inner_mut(&mut self) -> &mut D {
            &mut self.inner
        }

        fn record(&mut self, sql: &str) -> Result<()> {
            self.statements.push(sql.to_string());
            match &self.fail_on {
                Some(fragment) if sql.contains(fragment.as_str()) => Err(TrackerError::Store(
                    format!("injected failure for `{}`", fragment),
                )),
                _ => Ok(()),
            }
        }
    }

    impl<D: Database> Database for RecordingDatabase<D> {
        fn query(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
            self.record(sql)?;
            self.inner.query(sql, params)
        }

        fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
            self.record(sql)?;
            self.inner.execute(sql, params)
        }

        fn close(&mut self) -> Result<()> {
            self.close_calls += 1;
            self.inner.close()
        }
    }
}
