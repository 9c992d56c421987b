//! # Menu Controller
//!
//! A single loop in one state, "awaiting choice":
//!
//! 1. Ask for one of the eight [`MenuAction`]s
//! 2. Dispatch it through the [`TrackerApi`]
//! 3. Hand the result (or the error) to the [`Presenter`]
//! 4. Go back to 1, unless the action was [`MenuAction::Exit`]
//!
//! Handler errors never end the session. They are reported and the menu is shown
//! again. Only a failure of the menu prompt itself stops the loop early, and in that
//! case the connection is released before the error is returned.

use crate::api::TrackerApi;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TrackerError};
use crate::prompt::{Choice, PromptSpec, Prompter};
use crate::store::Database;

const ACTION: &str = "action";
const MENU_MESSAGE: &str = "What would you like to do?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    Exit,
}

impl MenuAction {
    /// In display order.
    pub const ALL: [MenuAction; 8] = [
        MenuAction::ViewDepartments,
        MenuAction::ViewRoles,
        MenuAction::ViewEmployees,
        MenuAction::AddDepartment,
        MenuAction::AddRole,
        MenuAction::AddEmployee,
        MenuAction::UpdateEmployeeRole,
        MenuAction::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::ViewDepartments => "View All Departments",
            MenuAction::ViewRoles => "View All Roles",
            MenuAction::ViewEmployees => "View All Employees",
            MenuAction::AddDepartment => "Add a Department",
            MenuAction::AddRole => "Add a Role",
            MenuAction::AddEmployee => "Add an Employee",
            MenuAction::UpdateEmployeeRole => "Update an Employee Role",
            MenuAction::Exit => "Exit",
        }
    }

    pub fn value(&self) -> i64 {
        Self::ALL.iter().position(|a| a == self).unwrap_or(0) as i64
    }

    pub fn from_value(value: i64) -> Option<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

pub fn menu_prompt() -> PromptSpec {
    let choices = MenuAction::ALL
        .iter()
        .map(|a| Choice::new(a.label(), a.value()))
        .collect();
    PromptSpec::select(ACTION, MENU_MESSAGE, choices)
}

/// Where results and errors end up. The CLI prints them; tests collect them.
pub trait Presenter {
    fn present(&mut self, result: &CmdResult);
    fn report_error(&mut self, error: &TrackerError);
}

fn release<D: Database>(api: &mut TrackerApi<D>) {
    if let Err(e) = api.close() {
        log::debug!("releasing connection after prompt failure: {}", e);
    }
}

/// Runs until the user picks Exit or the menu prompt fails.
pub fn run_menu<D, P, R>(api: &mut TrackerApi<D>, prompter: &mut P, presenter: &mut R) -> Result<()>
where
    D: Database,
    P: Prompter,
    R: Presenter,
{
    loop {
        let value = match prompter
            .ask(&[menu_prompt()])
            .and_then(|answers| answers.choice(ACTION))
        {
            Ok(v) => v,
            Err(e) => {
                release(api);
                return Err(e);
            }
        };

        let Some(action) = MenuAction::from_value(value) else {
            presenter.present(
                &CmdResult::default().with_message(CmdMessage::warning("Invalid action")),
            );
            continue;
        };

        match api.dispatch(action, prompter) {
            Ok(result) => presenter.present(&result),
            Err(e) => {
                log::debug!("{} failed: {}", action.label(), e);
                presenter.report_error(&e);
            }
        }

        if action == MenuAction::Exit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::lines::LinePrompter;
    use crate::prompt::Validator;
    use crate::store::memory::fixtures::RecordingDatabase;
    use crate::store::memory::InMemoryDatabase;
    use crate::store::queries;

    #[derive(Default)]
    struct CapturingPresenter {
        results: Vec<CmdResult>,
        errors: Vec<String>,
    }

    impl Presenter for CapturingPresenter {
        fn present(&mut self, result: &CmdResult) {
            self.results.push(result.clone());
        }

        fn report_error(&mut self, error: &TrackerError) {
            self.errors.push(error.to_string());
        }
    }

    impl CapturingPresenter {
        fn messages(&self) -> Vec<String> {
            self.results
                .iter()
                .flat_map(|r| r.messages.iter().map(|m| m.content.clone()))
                .collect()
        }
    }

    fn api() -> TrackerApi<RecordingDatabase<InMemoryDatabase>> {
        TrackerApi::new(RecordingDatabase::new(InMemoryDatabase::new().unwrap()))
    }

    /// Always answers the menu with a fixed value.
    struct FixedChoice(i64, usize);

    impl Prompter for FixedChoice {
        fn input(&mut self, _: &str) -> Result<String> {
            Err(TrackerError::InputClosed)
        }

        fn input_validated(&mut self, _: &str, _: Validator) -> Result<String> {
            Err(TrackerError::InputClosed)
        }

        fn select(&mut self, _: &str, _: &[Choice]) -> Result<i64> {
            self.1 += 1;
            if self.1 > 1 {
                return Ok(MenuAction::Exit.value());
            }
            Ok(self.0)
        }
    }

    #[test]
    fn menu_lists_eight_actions_in_order() {
        let prompt = menu_prompt();
        match prompt.kind {
            crate::prompt::PromptKind::Select(choices) => {
                let labels: Vec<_> = choices.iter().map(|c| c.label.as_str()).collect();
                assert_eq!(labels.len(), 8);
                assert_eq!(labels[0], "View All Departments");
                assert_eq!(labels[7], "Exit");
            }
            other => panic!("expected a select prompt, got {:?}", other),
        }
    }

    #[test]
    fn values_map_back_to_actions() {
        for action in MenuAction::ALL {
            assert_eq!(MenuAction::from_value(action.value()), Some(action));
        }
        assert_eq!(MenuAction::from_value(8), None);
        assert_eq!(MenuAction::from_value(-1), None);
    }

    #[test]
    fn full_session_against_empty_database() {
        let mut api = api();
        let mut prompter = LinePrompter::scripted(&[
            "Add a Department",
            "Engineering",
            "Add a Role",
            "Engineer",
            "60000",
            "Engineering",
            "Add an Employee",
            "Ada",
            "Lovelace",
            "Engineer",
            "View All Employees",
            "Exit",
        ]);
        let mut presenter = CapturingPresenter::default();

        run_menu(&mut api, &mut prompter, &mut presenter).unwrap();

        assert_eq!(
            presenter.messages(),
            vec![
                "Engineering department added successfully.",
                "Engineer role added successfully.",
                "Ada Lovelace added as an employee.",
                "Goodbye!",
            ]
        );
        let table = presenter.results[3].table.as_ref().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(api.database().close_calls, 1);
        assert!(presenter.errors.is_empty());
    }

    #[test]
    fn handler_failure_returns_to_menu() {
        let db = RecordingDatabase::new(InMemoryDatabase::new().unwrap())
            .failing_on("INSERT INTO department");
        let mut api = TrackerApi::new(db);
        let mut prompter = LinePrompter::scripted(&[
            "Add a Department",
            "Engineering",
            "View All Departments",
            "Exit",
        ]);
        let mut presenter = CapturingPresenter::default();

        run_menu(&mut api, &mut prompter, &mut presenter).unwrap();

        assert_eq!(presenter.errors.len(), 1);
        assert!(presenter.errors[0].contains("injected failure"));
        assert!(presenter.results[0].table.as_ref().unwrap().is_empty());
        assert_eq!(api.database().close_calls, 1);
    }

    #[test]
    fn empty_choice_list_warns_and_continues() {
        let mut api = api();
        let mut prompter = LinePrompter::scripted(&["Add a Role", "Exit"]);
        let mut presenter = CapturingPresenter::default();

        run_menu(&mut api, &mut prompter, &mut presenter).unwrap();

        assert_eq!(
            presenter.messages(),
            vec!["No departments available, add a department first.", "Goodbye!"]
        );
        assert_eq!(api.database().count(queries::INSERT_ROLE), 0);
    }

    #[test]
    fn closed_input_releases_connection() {
        let mut api = api();
        let mut prompter = LinePrompter::scripted(&["View All Roles"]);
        let mut presenter = CapturingPresenter::default();

        let err = run_menu(&mut api, &mut prompter, &mut presenter).unwrap_err();

        assert!(matches!(err, TrackerError::InputClosed));
        assert_eq!(api.database().close_calls, 1);
        assert_eq!(presenter.results.len(), 1);
    }

    #[test]
    fn unknown_choice_redisplays_menu() {
        let mut api = api();
        let mut prompter = FixedChoice(42, 0);
        let mut presenter = CapturingPresenter::default();

        run_menu(&mut api, &mut prompter, &mut presenter).unwrap();

        assert_eq!(presenter.messages(), vec!["Invalid action", "Goodbye!"]);
        assert!(api.database().statements.is_empty());
    }
}
