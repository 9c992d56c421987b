use crate::error::{Result, TrackerError};
use crate::model::{Row, Value};
use crate::store::Database;
use rusqlite::types::{ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params_from_iter, Connection, OpenFlags};
use std::path::Path;

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(rusqlite::types::Value::Null),
            Value::Integer(n) => ToSqlOutput::Owned(rusqlite::types::Value::Integer(*n)),
            Value::Real(n) => ToSqlOutput::Owned(rusqlite::types::Value::Real(*n)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

fn value_from_ref(value: ValueRef<'_>) -> Result<Value> {
    match value {
        ValueRef::Null => Ok(Value::Null),
        ValueRef::Integer(n) => Ok(Value::Integer(n)),
        ValueRef::Real(n) => Ok(Value::Real(n)),
        ValueRef::Text(bytes) => Ok(Value::Text(String::from_utf8_lossy(bytes).into_owned())),
        ValueRef::Blob(_) => Err(TrackerError::Store(
            "Blob columns are not supported".to_string(),
        )),
    }
}

/// SQLite-backed store. Holds the one connection for the whole session.
pub struct SqliteDatabase {
    conn: Option<Connection>,
}

impl SqliteDatabase {
    /// Opens an existing database file. A missing file is an error: the tracker
    /// never creates the schema itself.
    pub fn open<P: AsRef<Path>>(path: P, foreign_keys: bool) -> Result<Self> {
        let path = path.as_ref();
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)?;
        log::info!("Opened database {}", path.display());
        Self::from_connection(conn, foreign_keys)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?, true)
    }

    fn from_connection(conn: Connection, foreign_keys: bool) -> Result<Self> {
        if foreign_keys {
            conn.pragma_update(None, "foreign_keys", true)?;
        }
        Ok(Self { conn: Some(conn) })
    }

    /// Runs several `;`-separated statements without parameters.
    pub fn execute_batch(&mut self, sql: &str) -> Result<()> {
        self.conn()?.execute_batch(sql)?;
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.conn.is_none()
    }

    fn conn(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or(TrackerError::ConnectionClosed)
    }
}

impl Database for SqliteDatabase {
    fn query(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        log::debug!("query: {} {:?}", sql, params);
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let mut rows = stmt.query(params_from_iter(params.iter()))?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let mut record = Row::new();
            for (idx, name) in columns.iter().enumerate() {
                record.push(name.as_str(), value_from_ref(row.get_ref(idx)?)?);
            }
            records.push(record);
        }
        Ok(records)
    }

    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
        log::debug!("execute: {} {:?}", sql, params);
        let affected = self.conn()?.execute(sql, params_from_iter(params.iter()))?;
        Ok(affected as u64)
    }

    fn close(&mut self) -> Result<()> {
        let conn = self.conn.take().ok_or(TrackerError::ConnectionClosed)?;
        conn.close().map_err(|(_, e)| TrackerError::Database(e))?;
        log::info!("Closed database connection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch() -> SqliteDatabase {
        let mut db = SqliteDatabase::open_in_memory().unwrap();
        db.execute_batch("CREATE TABLE t (id INTEGER PRIMARY KEY, name TEXT, score REAL);")
            .unwrap();
        db
    }

    #[test]
    fn test_query_preserves_select_order() {
        let mut db = scratch();
        db.execute(
            "INSERT INTO t (name, score) VALUES (?, ?)",
            &["a".into(), Value::Real(1.5)],
        )
        .unwrap();

        let rows = db.query("SELECT score, name, id FROM t", &[]).unwrap();
        assert_eq!(rows.len(), 1);
        let columns: Vec<_> = rows[0].columns().collect();
        assert_eq!(columns, vec!["score", "name", "id"]);
        assert_eq!(rows[0].get("score"), Some(&Value::Real(1.5)));
    }

    #[test]
    fn test_parameters_are_bound_not_spliced() {
        let mut db = scratch();
        let hostile = "x'); DROP TABLE t; --";
        db.execute("INSERT INTO t (name) VALUES (?)", &[hostile.into()])
            .unwrap();

        let rows = db
            .query("SELECT name FROM t WHERE name = ?", &[hostile.into()])
            .unwrap();
        assert_eq!(rows[0].get_string("name").unwrap(), hostile);
    }

    #[test]
    fn test_null_round_trips() {
        let mut db = scratch();
        db.execute(
            "INSERT INTO t (name, score) VALUES (?, ?)",
            &["n".into(), Value::Null],
        )
        .unwrap();
        let rows = db.query("SELECT score FROM t", &[]).unwrap();
        assert!(rows[0].get("score").unwrap().is_null());
    }

    #[test]
    fn test_execute_reports_affected_rows() {
        let mut db = scratch();
        db.execute("INSERT INTO t (name) VALUES (?)", &["a".into()])
            .unwrap();
        db.execute("INSERT INTO t (name) VALUES (?)", &["b".into()])
            .unwrap();
        let affected = db
            .execute("UPDATE t SET score = ? WHERE name = ?", &[Value::Real(2.0), "a".into()])
            .unwrap();
        assert_eq!(affected, 1);
    }

    #[test]
    fn test_malformed_sql_is_an_error() {
        let mut db = scratch();
        assert!(matches!(
            db.query("SELECT * FROM missing_table", &[]),
            Err(TrackerError::Database(_))
        ));
    }

    #[test]
    fn test_close_releases_once() {
        let mut db = scratch();
        db.close().unwrap();
        assert!(db.is_closed());
        assert!(matches!(
            db.query("SELECT 1", &[]),
            Err(TrackerError::ConnectionClosed)
        ));
        assert!(matches!(db.close(), Err(TrackerError::ConnectionClosed)));
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = SqliteDatabase::open(dir.path().join("absent.db"), true);
        assert!(result.is_err());
    }

    #[test]
    fn test_open_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE t (id INTEGER PRIMARY KEY);")
            .unwrap();

        let mut db = SqliteDatabase::open(&path, true).unwrap();
        assert!(db.query("SELECT * FROM t", &[]).unwrap().is_empty());
    }
}
