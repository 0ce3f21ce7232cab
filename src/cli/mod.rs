mod session;

pub use session::{LoopControl, Session};

use std::io::{self, IsTerminal};

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;

use crate::application::BudgetService;
use crate::domain::Ledger;
use crate::logging::init_tracing;

/// Budget Tracker - record income and expenses, see what is left
#[derive(Parser)]
#[command(name = "budget-tracker")]
#[command(about = "A personal budget tracker: add income, add expenses, view the remaining budget")]
#[command(
    long_about = "A personal budget tracker.\n\n\
    Commands are read one per line from standard input:\n  \
    income <description> <amount>\n  \
    expense <description> <amount>\n  \
    view\n  \
    exit\n\n\
    Nothing is saved: all data is discarded when the session ends."
)]
#[command(version)]
pub struct Cli {
    /// Output format for the budget view: table, json
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Read commands without showing a prompt, even on a terminal
    #[arg(long)]
    pub script: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// How the budget view is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => bail!("Invalid format '{}'. Use: table, json", s),
        }
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        let format = OutputFormat::parse(&self.format)?;
        let stdin = io::stdin();
        let prompt = !self.script && stdin.is_terminal();

        info!(?format, prompt, "budget session started");

        let service = BudgetService::new(Ledger::new());
        let mut session = Session::new(service, format, io::stdout().lock());
        session.run(stdin.lock(), prompt)?;

        let (service, _) = session.into_parts();
        info!(
            transactions = service.ledger().len(),
            "budget session ended, discarding ledger"
        );
        Ok(())
    }
}
