//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for every tracker action, whatever UI drives it.
//!
//! The facade:
//! - **Dispatches** a [`MenuAction`] to the matching handler in `commands/*`
//! - **Owns** the database capability for the whole session
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business logic. Prompting is passed in per call
//! so the same `TrackerApi` works with a terminal prompter, a line prompter over a
//! pipe, or a scripted one in tests.
//!
//! ## Generic Over Database
//!
//! - Production: `TrackerApi<SqliteDatabase>`
//! - Testing: `TrackerApi<InMemoryDatabase>` or a `RecordingDatabase` wrapper
//!
//! API tests check that each action reaches the right handler and that closing is
//! forwarded. Handler logic is covered in the command modules.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::menu::MenuAction;
use crate::prompt::Prompter;
use crate::store::Database;

pub use crate::commands::{CmdMessage, MessageLevel};

pub struct TrackerApi<D: Database> {
    db: D,
}

impl<D: Database> TrackerApi<D> {
    pub fn new(db: D) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &D {
        &self.db
    }

    pub fn database_mut(&mut self) -> &mut D {
        &mut self.db
    }

    pub fn view_departments(&mut self) -> Result<CmdResult> {
        commands::departments::list(&mut self.db)
    }

    pub fn view_roles(&mut self) -> Result<CmdResult> {
        commands::roles::list(&mut self.db)
    }

    pub fn view_employees(&mut self) -> Result<CmdResult> {
        commands::employees::list(&mut self.db)
    }

    pub fn add_department<P: Prompter>(&mut self, prompter: &mut P) -> Result<CmdResult> {
        commands::departments::add(&mut self.db, prompter)
    }

    pub fn add_role<P: Prompter>(&mut self, prompter: &mut P) -> Result<CmdResult> {
        commands::roles::add(&mut self.db, prompter)
    }

    pub fn add_employee<P: Prompter>(&mut self, prompter: &mut P) -> Result<CmdResult> {
        commands::employees::add(&mut self.db, prompter)
    }

    pub fn update_employee_role<P: Prompter>(&mut self, prompter: &mut P) -> Result<CmdResult> {
        commands::employees::update_role(&mut self.db, prompter)
    }

    /// Runs the handler for `action`. `Exit` closes the connection.
    pub fn dispatch<P: Prompter>(
        &mut self,
        action: MenuAction,
        prompter: &mut P,
    ) -> Result<CmdResult> {
        log::debug!("dispatching {:?}", action);
        match action {
            MenuAction::ViewDepartments => self.view_departments(),
            MenuAction::ViewRoles => self.view_roles(),
            MenuAction::ViewEmployees => self.view_employees(),
            MenuAction::AddDepartment => self.add_department(prompter),
            MenuAction::AddRole => self.add_role(prompter),
            MenuAction::AddEmployee => self.add_employee(prompter),
            MenuAction::UpdateEmployeeRole => self.update_employee_role(prompter),
            MenuAction::Exit => {
                self.close()?;
                Ok(CmdResult::default().with_message(CmdMessage::info("Goodbye!")))
            }
        }
    }

    pub fn close(&mut self) -> Result<()> {
        log::info!("closing database connection");
        self.db.close()
    }
}
