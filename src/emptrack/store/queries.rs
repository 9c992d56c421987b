//! The statements issued by the tracker, and thin typed wrappers around them.
//!
//! Each helper is exactly one round trip. No business rules live here.

use crate::error::Result;
use crate::model::{Department, EmployeeListing, NewEmployee, NewRole, RoleListing, Row};
use crate::store::Database;

pub const SELECT_DEPARTMENTS: &str = "SELECT * FROM department ORDER BY id";

pub const SELECT_ROLES: &str = "SELECT role.id, role.title, department.name AS department, role.salary \
     FROM role \
     INNER JOIN department ON role.department_id = department.id \
     ORDER BY role.id";

// `||` yields NULL when the manager side of the LEFT JOIN is missing, which keeps
// the manager column null for employees nobody manages.
pub const SELECT_EMPLOYEES: &str = "SELECT e.id, e.first_name, e.last_name, \
     role.title, department.name AS department, role.salary, \
     m.first_name || ' ' || m.last_name AS manager \
     FROM employee e \
     LEFT JOIN employee m ON e.manager_id = m.id \
     INNER JOIN role ON e.role_id = role.id \
     INNER JOIN department ON role.department_id = department.id \
     ORDER BY e.id";

pub const SELECT_DEPARTMENT_OPTIONS: &str = "SELECT id, name FROM department ORDER BY id";

pub const SELECT_ROLE_OPTIONS: &str = "SELECT id, title FROM role ORDER BY id";

pub const SELECT_EMPLOYEE_OPTIONS: &str =
    "SELECT id, first_name || ' ' || last_name AS name FROM employee ORDER BY id";

pub const INSERT_DEPARTMENT: &str = "INSERT INTO department (name) VALUES (?)";

pub const INSERT_ROLE: &str = "INSERT INTO role (title, salary, department_id) VALUES (?, ?, ?)";

pub const INSERT_EMPLOYEE: &str =
    "INSERT INTO employee (first_name, last_name, role_id) VALUES (?, ?, ?)";

pub const UPDATE_EMPLOYEE_ROLE: &str = "UPDATE employee SET role_id = ? WHERE id = ?";

pub fn departments<D: Database>(db: &mut D) -> Result<Vec<Department>> {
    db.query(SELECT_DEPARTMENTS, &[])?
        .iter()
        .map(Department::from_row)
        .collect()
}

pub fn role_listings<D: Database>(db: &mut D) -> Result<Vec<RoleListing>> {
    db.query(SELECT_ROLES, &[])?
        .iter()
        .map(RoleListing::from_row)
        .collect()
}

pub fn employee_listings<D: Database>(db: &mut D) -> Result<Vec<EmployeeListing>> {
    db.query(SELECT_EMPLOYEES, &[])?
        .iter()
        .map(EmployeeListing::from_row)
        .collect()
}

/// Rows with `id` and `name`.
pub fn department_options<D: Database>(db: &mut D) -> Result<Vec<Row>> {
    db.query(SELECT_DEPARTMENT_OPTIONS, &[])
}

/// Rows with `id` and `title`.
pub fn role_options<D: Database>(db: &mut D) -> Result<Vec<Row>> {
    db.query(SELECT_ROLE_OPTIONS, &[])
}

/// Rows with `id` and the concatenated `name`.
pub fn employee_options<D: Database>(db: &mut D) -> Result<Vec<Row>> {
    db.query(SELECT_EMPLOYEE_OPTIONS, &[])
}

pub fn insert_department<D: Database>(db: &mut D, name: &str) -> Result<u64> {
    db.execute(INSERT_DEPARTMENT, &[name.into()])
}

pub fn insert_role<D: Database>(db: &mut D, role: &NewRole) -> Result<u64> {
    db.execute(
        INSERT_ROLE,
        &[
            role.title.as_str().into(),
            role.salary.into(),
            role.department_id.into(),
        ],
    )
}

pub fn insert_employee<D: Database>(db: &mut D, employee: &NewEmployee) -> Result<u64> {
    db.execute(
        INSERT_EMPLOYEE,
        &[
            employee.first_name.as_str().into(),
            employee.last_name.as_str().into(),
            employee.role_id.into(),
        ],
    )
}

pub fn update_employee_role<D: Database>(db: &mut D, employee_id: i64, role_id: i64) -> Result<u64> {
    db.execute(UPDATE_EMPLOYEE_ROLE, &[role_id.into(), employee_id.into()])
}
