//! Task management commands.
//!
//! The store is in-memory demo data re-seeded on every invocation;
//! persistence is out of scope, so mutations show the resulting state
//! rather than surviving between runs.

use chrono::NaiveDate;
use clap::Subcommand;
use tidbok_core::bas::{account_name, standard_accounts};
use tidbok_core::store::demo::demo_store;
use tidbok_core::{Config, TaskDraft};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to the demo store
    Add {
        /// Task title (empty is accepted)
        title: String,
        /// Task description
        #[arg(long, default_value = "")]
        description: String,
        /// Estimated hours
        #[arg(long, default_value_t = 1.0)]
        estimated_hours: f64,
        /// Start date (YYYY-MM-DD, default today)
        #[arg(long)]
        start_date: Option<NaiveDate>,
        /// BAS account code (default from config)
        #[arg(long)]
        account: Option<String>,
    },
    /// List tasks
    List,
    /// Show one task with its time entries
    Get {
        /// Task ID
        id: u32,
    },
    /// Mark a task completed
    Complete {
        /// Task ID
        id: u32,
    },
    /// Delete a task and its time entries
    Delete {
        /// Task ID
        id: u32,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = demo_store();

    match action {
        TaskAction::Add {
            title,
            description,
            estimated_hours,
            start_date,
            account,
        } => {
            let config = Config::load_or_default();
            let mut draft = TaskDraft::new(title);
            draft.description = description;
            draft.estimated_hours = estimated_hours;
            if let Some(date) = start_date {
                draft.start_date = date;
            }
            draft.bas_account = account.unwrap_or(config.defaults.bas_account);

            let id = store.add_task(draft);
            println!("Task created: {id}");
            println!("{}", serde_json::to_string_pretty(&store.task(id))?);
        }
        TaskAction::List => {
            println!("{}", serde_json::to_string_pretty(store.tasks())?);
        }
        TaskAction::Get { id } => match store.task(id) {
            Some(task) => {
                println!("{}", serde_json::to_string_pretty(task)?);
                let accounts = standard_accounts();
                if let Some(name) = account_name(&accounts, &task.bas_account) {
                    println!("Account: {} {name}", task.bas_account);
                }
                let entries = store.entries_for_task(id);
                if !entries.is_empty() {
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                }
            }
            None => println!("No task with id {id}"),
        },
        TaskAction::Complete { id } => {
            if store.complete_task(id) {
                println!("{}", serde_json::to_string_pretty(&store.task(id))?);
            } else {
                println!("No task with id {id}; nothing changed");
            }
        }
        TaskAction::Delete { id } => {
            if store.delete_task(id) {
                println!("Task {id} deleted; {} tasks remain", store.tasks().len());
            } else {
                println!("No task with id {id}; nothing changed");
            }
        }
    }
    Ok(())
}
