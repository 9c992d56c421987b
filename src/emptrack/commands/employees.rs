use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NewEmployee, Table};
use crate::prompt::{Choice, PromptSpec, Prompter};
use crate::store::{queries, Database};

const FIRST_NAME: &str = "first_name";
const LAST_NAME: &str = "last_name";
const ROLE: &str = "role_id";
const EMPLOYEE: &str = "employee_id";

pub const NO_ROLES: &str = "No roles available, add a role first.";
pub const NO_EMPLOYEES: &str = "No employees available, add an employee first.";

pub fn list<D: Database>(db: &mut D) -> Result<CmdResult> {
    let employees = queries::employee_listings(db)?;
    Ok(CmdResult::default().with_table(Table::from_records(&employees)))
}

fn role_choices<D: Database>(db: &mut D) -> Result<Vec<Choice>> {
    Choice::from_rows(&queries::role_options(db)?, "title", "id")
}

/// Creates an employee with no manager.
pub fn add<D: Database, P: Prompter>(db: &mut D, prompter: &mut P) -> Result<CmdResult> {
    let roles = role_choices(db)?;
    if roles.is_empty() {
        log::info!("add employee: no roles to choose from");
        return Ok(CmdResult::default().with_message(CmdMessage::warning(NO_ROLES)));
    }

    let answers = prompter.ask(&[
        PromptSpec::input(FIRST_NAME, "What is the first name of the employee?"),
        PromptSpec::input(LAST_NAME, "What is the last name of the employee?"),
        PromptSpec::select(ROLE, "What is the role of the employee?", roles),
    ])?;

    let employee = NewEmployee {
        first_name: answers.text(FIRST_NAME)?.to_string(),
        last_name: answers.text(LAST_NAME)?.to_string(),
        role_id: answers.choice(ROLE)?,
    };

    let affected = queries::insert_employee(db, &employee)?;
    Ok(CmdResult::default()
        .with_affected_rows(affected)
        .with_message(CmdMessage::success(format!(
            "{} added as an employee.",
            employee.full_name()
        ))))
}

pub fn update_role<D: Database, P: Prompter>(db: &mut D, prompter: &mut P) -> Result<CmdResult> {
    let employees = Choice::from_rows(&queries::employee_options(db)?, "name", "id")?;
    let roles = role_choices(db)?;

    if employees.is_empty() {
        log::info!("update employee role: no employees to choose from");
        return Ok(CmdResult::default().with_message(CmdMessage::warning(NO_EMPLOYEES)));
    }
    if roles.is_empty() {
        log::info!("update employee role: no roles to choose from");
        return Ok(CmdResult::default().with_message(CmdMessage::warning(NO_ROLES)));
    }

    let answers = prompter.ask(&[
        PromptSpec::select(
            EMPLOYEE,
            "Which employee's role do you want to update?",
            employees,
        ),
        PromptSpec::select(
            ROLE,
            "Which role do you want to assign to the selected employee?",
            roles,
        ),
    ])?;

    let affected =
        queries::update_employee_role(db, answers.choice(EMPLOYEE)?, answers.choice(ROLE)?)?;
    let message = if affected == 0 {
        CmdMessage::warning("No employee matched the selection, nothing was updated.")
    } else {
        CmdMessage::success("Employee role updated successfully.")
    };
    Ok(CmdResult::default()
        .with_affected_rows(affected)
        .with_message(message))
}
