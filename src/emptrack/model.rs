use crate::error::{Result, TrackerError};
use std::fmt;

/// A single scalar exchanged with the database, either as a positional
/// parameter or as a column value in a returned row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Real(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Real(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// A returned record: column names mapped to scalars, in select-list order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(column, value);
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.fields.push((column.into(), value.into()));
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    fn require(&self, column: &str) -> Result<&Value> {
        self.get(column)
            .ok_or_else(|| TrackerError::Store(format!("Missing column `{}`", column)))
    }

    pub fn get_i64(&self, column: &str) -> Result<i64> {
        match self.require(column)? {
            Value::Integer(n) => Ok(*n),
            other => Err(unexpected(column, "an integer", other)),
        }
    }

    /// Decimal columns come back as integers or reals depending on the stored
    /// value, and as text from drivers that keep exact decimals.
    pub fn get_f64(&self, column: &str) -> Result<f64> {
        match self.require(column)? {
            Value::Integer(n) => Ok(*n as f64),
            Value::Real(n) => Ok(*n),
            Value::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| unexpected(column, "a number", &Value::Text(s.clone()))),
            Value::Null => Err(unexpected(column, "a number", &Value::Null)),
        }
    }

    pub fn get_string(&self, column: &str) -> Result<String> {
        match self.require(column)? {
            Value::Text(s) => Ok(s.clone()),
            other => Err(unexpected(column, "text", other)),
        }
    }

    pub fn get_opt_string(&self, column: &str) -> Result<Option<String>> {
        match self.require(column)? {
            Value::Null => Ok(None),
            Value::Text(s) => Ok(Some(s.clone())),
            other => Err(unexpected(column, "text or null", other)),
        }
    }
}

fn unexpected(column: &str, expected: &str, found: &Value) -> TrackerError {
    TrackerError::Store(format!(
        "Column `{}` should hold {}, found {:?}",
        column, expected, found
    ))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

impl Department {
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.get_i64("id")?,
            name: row.get_string("name")?,
        })
    }
}

/// A role joined with the name of its department.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleListing {
    pub id: i64,
    pub title: String,
    pub department: String,
    pub salary: f64,
}

impl RoleListing {
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.get_i64("id")?,
            title: row.get_string("title")?,
            department: row.get_string("department")?,
            salary: row.get_f64("salary")?,
        })
    }
}

/// An employee joined with role, department and the manager's full name.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeListing {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub department: String,
    pub salary: f64,
    pub manager: Option<String>,
}

impl EmployeeListing {
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.get_i64("id")?,
            first_name: row.get_string("first_name")?,
            last_name: row.get_string("last_name")?,
            title: row.get_string("title")?,
            department: row.get_string("department")?,
            salary: row.get_f64("salary")?,
            manager: row.get_opt_string("manager")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRole {
    pub title: String,
    pub salary: f64,
    pub department_id: i64,
}

/// Manager is never assigned at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
}

impl NewEmployee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Records that can be laid out as table rows.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<Value>;
}

impl Tabular for Department {
    const HEADERS: &'static [&'static str] = &["id", "name"];

    fn cells(&self) -> Vec<Value> {
        vec![self.id.into(), self.name.as_str().into()]
    }
}

impl Tabular for RoleListing {
    const HEADERS: &'static [&'static str] = &["id", "title", "department", "salary"];

    fn cells(&self) -> Vec<Value> {
        vec![
            self.id.into(),
            self.title.as_str().into(),
            self.department.as_str().into(),
            self.salary.into(),
        ]
    }
}

impl Tabular for EmployeeListing {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "first_name",
        "last_name",
        "title",
        "department",
        "salary",
        "manager",
    ];

    fn cells(&self) -> Vec<Value> {
        vec![
            self.id.into(),
            self.first_name.as_str().into(),
            self.last_name.as_str().into(),
            self.title.as_str().into(),
            self.department.as_str().into(),
            self.salary.into(),
            self.manager.clone().into(),
        ]
    }
}

/// An ordered row set ready for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn from_records<T: Tabular>(records: &[T]) -> Self {
        Self {
            headers: T::HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: records.iter().map(Tabular::cells).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// All values of the named column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(self.rows.iter().filter_map(|row| row.get(idx)).collect())
    }
}
