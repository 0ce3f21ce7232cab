use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::application::{BudgetService, BudgetSummary};
use crate::domain::{format_amount, TransactionKind};

use super::OutputFormat;

const INVALID_INPUT_NOTICE: &str = "Error: Invalid input. Please enter a valid amount.";

/// One line typed into the session.
#[derive(Parser, Debug)]
#[command(name = "budget-tracker", no_binary_name = true)]
#[command(disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum SessionCommand {
    /// Record an income
    #[command(visible_alias = "add-income", allow_negative_numbers = true)]
    Income {
        /// What the money came from (quote it if it contains spaces)
        #[arg(allow_hyphen_values = true)]
        description: Option<String>,

        /// Amount received (e.g., "1000" or "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: Option<String>,
    },

    /// Record an expense
    #[command(visible_alias = "add-expense", allow_negative_numbers = true)]
    Expense {
        /// What the money was spent on (quote it if it contains spaces)
        #[arg(allow_hyphen_values = true)]
        description: Option<String>,

        /// Amount spent (e.g., "400" or "19.99")
        #[arg(allow_hyphen_values = true)]
        amount: Option<String>,
    },

    /// Show income sources, expenses and totals
    View,

    /// Leave the budget tracker (all data is discarded)
    #[command(visible_alias = "quit")]
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// A budget tracking session: reads commands, updates the ledger, writes notices to `out`.
pub struct Session<W: Write> {
    service: BudgetService,
    format: OutputFormat,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(service: BudgetService, format: OutputFormat, out: W) -> Self {
        Self {
            service,
            format,
            out,
        }
    }

    pub fn service(&self) -> &BudgetService {
        &self.service
    }

    pub fn into_parts(self) -> (BudgetService, W) {
        (self.service, self.out)
    }

    /// Run commands from `input` until `exit` or end of input.
    /// When `prompt` is set a prompt is written before each line is read.
    pub fn run<R: BufRead>(&mut self, input: R, prompt: bool) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read command")?;

            if self.handle_line(&line)? == LoopControl::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Execute a single command line.
    pub fn handle_line(&mut self, line: &str) -> Result<LoopControl> {
        let tokens = match shell_words::split(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                writeln!(self.out, "Error: {}", err)?;
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let command = match SessionLine::try_parse_from(&tokens) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                if !matches!(err.kind(), ErrorKind::DisplayHelp) {
                    debug!(line, "unrecognised command");
                }
                write!(self.out, "{}", err.render())?;
                return Ok(LoopControl::Continue);
            }
        };

        match command {
            SessionCommand::Income {
                description,
                amount,
            } => self.add(TransactionKind::Income, description, amount)?,
            SessionCommand::Expense {
                description,
                amount,
            } => self.add(TransactionKind::Expense, description, amount)?,
            SessionCommand::View => self.view()?,
            SessionCommand::Exit => {
                writeln!(self.out, "Goodbye!")?;
                return Ok(LoopControl::Exit);
            }
        }

        Ok(LoopControl::Continue)
    }

    // Missing arguments behave like the empty text fields of a form.
    fn add(
        &mut self,
        kind: TransactionKind,
        description: Option<String>,
        amount: Option<String>,
    ) -> Result<()> {
        let description = description.unwrap_or_default();
        let amount = amount.unwrap_or_default();

        match self.service.add(kind, &description, &amount) {
            Ok(_) => writeln!(
                self.out,
                "{title} Added: {title} has been added successfully.",
                title = kind.title()
            )?,
            Err(_) => writeln!(self.out, "{}", INVALID_INPUT_NOTICE)?,
        }
        Ok(())
    }

    fn view(&mut self) -> Result<()> {
        let summary = self.service.summary();
        match self.format {
            OutputFormat::Table => render_summary(&mut self.out, &summary)?,
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&summary)?;
                writeln!(self.out, "{}", json)?;
            }
        }
        Ok(())
    }
}

fn render_summary<W: Write>(out: &mut W, summary: &BudgetSummary) -> Result<()> {
    writeln!(out, "Income Sources:")?;
    render_list(out, &summary.income_descriptions)?;
    writeln!(out, "Expenses:")?;
    render_list(out, &summary.expense_descriptions)?;
    writeln!(out, "Total Income: ${}", format_amount(summary.total_income))?;
    writeln!(out, "Total Expenses: ${}", format_amount(summary.total_expenses))?;
    writeln!(
        out,
        "Remaining Budget: ${}",
        format_amount(summary.remaining_budget)
    )?;
    Ok(())
}

fn render_list<W: Write>(out: &mut W, items: &[String]) -> Result<()> {
    if items.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for item in items {
        writeln!(out, "  {}", item)?;
    }
    Ok(())
}
