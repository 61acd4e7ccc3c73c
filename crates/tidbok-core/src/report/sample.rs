//! Fixed sample payload served by the simulated provider.

use super::{AccountRow, CategoryRow, ReportDataset};

fn account(
    account_id: &str,
    account_name: &str,
    category: &str,
    total_hours: f64,
    task_count: u32,
) -> AccountRow {
    AccountRow {
        account_id: account_id.to_string(),
        account_name: account_name.to_string(),
        category: category.to_string(),
        total_hours,
        task_count,
    }
}

/// The static five-account dataset the real backend would compute.
pub fn sample_dataset() -> ReportDataset {
    ReportDataset {
        accounts: vec![
            account("1930", "Företagskonto", "Tillgångar", 12.5, 3),
            account("5010", "Lokalhyra", "Kostnader", 8.2, 2),
            account("5800", "Resekostnader", "Kostnader", 5.5, 4),
            account("6200", "Telekommunikation", "Kostnader", 3.8, 1),
            account("7010", "Löner", "Personal", 45.2, 8),
        ],
        categories: vec![
            CategoryRow {
                category: "Tillgångar".to_string(),
                total_hours: 12.5,
            },
            CategoryRow {
                category: "Kostnader".to_string(),
                total_hours: 17.5,
            },
            CategoryRow {
                category: "Personal".to_string(),
                total_hours: 45.2,
            },
        ],
        total_hours: 75.2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_totals_are_consistent() {
        let data = sample_dataset();
        let account_sum: f64 = data.accounts.iter().map(|a| a.total_hours).sum();
        assert!((account_sum - data.total_hours).abs() < 1e-9);
        let category_sum: f64 = data.categories.iter().map(|c| c.total_hours).sum();
        assert!((category_sum - data.total_hours).abs() < 1e-9);
    }
}
