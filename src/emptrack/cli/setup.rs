use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "emptrack", bin_name = "emptrack", version)]
#[command(
    about = "Interactive tracker for departments, roles and employees",
    long_about = None
)]
pub struct Cli {
    /// SQLite database file (overrides config and EMPTRACK_DB)
    #[arg(short, long, value_name = "PATH", help_heading = "Options")]
    pub database: Option<PathBuf>,

    /// Config file [default: ./emptrack.json]
    #[arg(short, long, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help_heading = "Options")]
    pub no_color: bool,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// `Some(false)` forces plain output; `None` leaves it to terminal detection.
    pub fn color(&self) -> Option<bool> {
        if self.no_color {
            Some(false)
        } else {
            None
        }
    }
}
