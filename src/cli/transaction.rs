//! Transaction CLI commands
//!
//! Recording income and expenses, listing, filtering and summarizing.

use clap::{Args, Subcommand};

use crate::config::Settings;
use crate::display::{format_summary, format_transaction_added, format_transaction_register};
use crate::error::PocketResult;
use crate::services::{TransactionFilter, TransactionService};
use crate::storage::Storage;

/// Optional predicates shared by `filter` and `summary`
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Category to filter by (exact match)
    #[arg(short, long)]
    pub category: Option<String>,
    /// Month to filter by (MM)
    #[arg(short, long)]
    pub month: Option<String>,
    /// Year to filter by (YYYY)
    #[arg(short, long)]
    pub year: Option<String>,
}

impl FilterArgs {
    fn into_filter(self) -> PocketResult<TransactionFilter> {
        TransactionFilter::from_args(self.category, self.month.as_deref(), self.year.as_deref())
    }
}

/// Transaction commands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Add a new income entry
    AddIncome {
        /// Amount of income (e.g., "1000" or "12.50")
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Description of income
        #[arg(long)]
        description: String,
        /// Date of income (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Add a new expense entry
    AddExpense {
        /// Amount of expense
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Category of expense
        #[arg(long)]
        category: String,
        /// Description of expense
        #[arg(long)]
        description: String,
        /// Date of expense (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// List all transactions
    List,
    /// Show income, expenses, and balance summary
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Filter transactions by category or date
    Filter {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> PocketResult<()> {
    let mut service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::AddIncome {
            amount,
            description,
            date,
        } => {
            let txn = service.add_income(&amount, &description, &date)?;
            println!("{}", format_transaction_added(&txn, settings));
        }

        TransactionCommands::AddExpense {
            amount,
            category,
            description,
            date,
        } => {
            let txn = service.add_expense(&amount, &category, &description, &date)?;
            println!("{}", format_transaction_added(&txn, settings));
        }

        TransactionCommands::List => {
            print!("{}", format_transaction_register(service.list(), settings));
        }

        TransactionCommands::Summary { filter } => {
            let filter = filter.into_filter()?;
            let summary = if filter.is_empty() {
                service.summarize()?
            } else {
                service.summarize_filtered(&filter)?
            };
            print!("{}", format_summary(&summary, settings));
        }

        TransactionCommands::Filter { filter } => {
            let filter = filter.into_filter()?;
            let transactions = service.filter(&filter);
            print!("{}", format_transaction_register(&transactions, settings));
        }
    }

    Ok(())
}
