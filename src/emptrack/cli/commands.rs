use super::render::{render_error, render_result};
use super::setup::Cli;
use clap::Parser;
use emptrack::api::{CmdMessage, TrackerApi};
use emptrack::commands::CmdResult;
use emptrack::config::TrackerConfig;
use emptrack::error::{Result, TrackerError};
use emptrack::menu::{run_menu, Presenter};
use emptrack::prompt::lines::LinePrompter;
use emptrack::prompt::terminal::DialoguerPrompter;
use emptrack::store::sqlite::SqliteDatabase;
use std::io::IsTerminal;

const CONNECTED: &str = "Successfully connected to the database.";

/// Prints results to stdout and errors to stderr.
struct TerminalPresenter {
    use_color: Option<bool>,
}

impl Presenter for TerminalPresenter {
    fn present(&mut self, result: &CmdResult) {
        print!("{}", render_result(result, self.use_color));
    }

    fn report_error(&mut self, error: &TrackerError) {
        eprint!("{}", render_error(error, self.use_color));
    }
}

fn init_logging(cli: &Cli) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let cwd = std::env::current_dir()?;
    let config = TrackerConfig::resolve(cli.config.as_deref(), &cwd, cli.database.clone())?;
    log::debug!("using {:?}", config);

    let db = SqliteDatabase::open(&config.database, config.foreign_keys)?;
    let mut api = TrackerApi::new(db);
    let mut presenter = TerminalPresenter {
        use_color: cli.color(),
    };
    presenter.present(&CmdResult::default().with_message(CmdMessage::success(CONNECTED)));

    if std::io::stdin().is_terminal() {
        run_menu(&mut api, &mut DialoguerPrompter::new(), &mut presenter)
    } else {
        run_menu(&mut api, &mut LinePrompter::stdio(), &mut presenter)
    }
}
