use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TrackerError};
use crate::model::{NewRole, Table};
use crate::prompt::{Choice, PromptSpec, Prompter};
use crate::store::{queries, Database};
use crate::validation::{parse_salary, validate_salary, INVALID_SALARY_MESSAGE};

const TITLE: &str = "title";
const SALARY: &str = "salary";
const DEPARTMENT: &str = "department_id";

pub const NO_DEPARTMENTS: &str = "No departments available, add a department first.";

pub fn list<D: Database>(db: &mut D) -> Result<CmdResult> {
    let roles = queries::role_listings(db)?;
    Ok(CmdResult::default().with_table(Table::from_records(&roles)))
}

pub fn add<D: Database, P: Prompter>(db: &mut D, prompter: &mut P) -> Result<CmdResult> {
    let departments = Choice::from_rows(&queries::department_options(db)?, "name", "id")?;
    if departments.is_empty() {
        log::info!("add role: no departments to choose from");
        return Ok(CmdResult::default().with_message(CmdMessage::warning(NO_DEPARTMENTS)));
    }

    let answers = prompter.ask(&[
        PromptSpec::input(TITLE, "What is the title of the role?"),
        PromptSpec::validated(SALARY, "What is the salary of the role?", validate_salary),
        PromptSpec::select(
            DEPARTMENT,
            "Which department does the role belong to?",
            departments,
        ),
    ])?;

    let salary = parse_salary(answers.text(SALARY)?)
        .ok_or_else(|| TrackerError::Prompt(INVALID_SALARY_MESSAGE.to_string()))?;
    let role = NewRole {
        title: answers.text(TITLE)?.to_string(),
        salary,
        department_id: answers.choice(DEPARTMENT)?,
    };

    let affected = queries::insert_role(db, &role)?;
    Ok(CmdResult::default()
        .with_affected_rows(affected)
        .with_message(CmdMessage::success(format!(
            "{} role added successfully.",
            role.title
        ))))
}
