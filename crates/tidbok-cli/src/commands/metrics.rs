//! Dashboard metrics commands.

use clap::Subcommand;
use tidbok_core::metrics;
use tidbok_core::standard_accounts;
use tidbok_core::store::demo::demo_store;

#[derive(Subcommand)]
pub enum MetricsAction {
    /// Full dashboard snapshot
    Summary,
    /// Status distribution buckets
    Status,
    /// Hours by BAS account
    Accounts,
}

pub fn run(action: MetricsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = demo_store();
    let accounts = standard_accounts();

    match action {
        MetricsAction::Summary => {
            let summary = metrics::summary(store.tasks(), &accounts);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        MetricsAction::Status => {
            let dist = metrics::status_distribution(store.tasks());
            println!("{}", serde_json::to_string_pretty(&dist)?);
        }
        MetricsAction::Accounts => {
            let rows = metrics::hours_by_account(store.tasks(), &accounts);
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}
