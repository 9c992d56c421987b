use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Table;
use crate::prompt::{PromptSpec, Prompter};
use crate::store::{queries, Database};

const NAME: &str = "name";

pub fn list<D: Database>(db: &mut D) -> Result<CmdResult> {
    let departments = queries::departments(db)?;
    Ok(CmdResult::default().with_table(Table::from_records(&departments)))
}

pub fn add<D: Database, P: Prompter>(db: &mut D, prompter: &mut P) -> Result<CmdResult> {
    let answers = prompter.ask(&[PromptSpec::input(
        NAME,
        "What is the name of the department?",
    )])?;
    let name = answers.text(NAME)?;

    let affected = queries::insert_department(db, name)?;
    Ok(CmdResult::default()
        .with_affected_rows(affected)
        .with_message(CmdMessage::success(format!(
            "{} department added successfully.",
            name
        ))))
}
