//! Chart of accounts loading and structural validation.
//!
//! Every report that walks the chart goes through [`load_chart`] so a
//! corrupt account tree is rejected before any aggregate is produced.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::{debug, instrument};

use model::entities::account;

use crate::error::{ComputeError, Result};

/// Loads the full chart of accounts ordered by account code and validates
/// the parent hierarchy before returning it.
#[instrument(skip(db))]
pub async fn load_chart(db: &DatabaseConnection) -> Result<Vec<account::Model>> {
    let accounts = account::Entity::find()
        .order_by_asc(account::Column::Code)
        .all(db)
        .await?;

    debug!("Loaded {} accounts from the chart", accounts.len());

    validate_chart(&accounts)?;
    Ok(accounts)
}

/// Checks that every parent reference resolves to a loaded account and that
/// no parent chain loops back on itself.
///
/// The hierarchy is flat rows with parent ids, so validation walks each
/// account's ancestor chain through a lookup map. A chain longer than the
/// account count can only mean a cycle that does not pass through the
/// starting account itself.
pub fn validate_chart(accounts: &[account::Model]) -> Result<()> {
    let parents: HashMap<i32, Option<i32>> = accounts
        .iter()
        .map(|account| (account.id, account.parent_account_id))
        .collect();

    for account in accounts {
        let mut cursor = account.parent_account_id;
        let mut hops = 0usize;

        while let Some(parent_id) = cursor {
            if parent_id == account.id {
                return Err(ComputeError::Chart(format!(
                    "account '{}' is its own ancestor",
                    account.code
                )));
            }

            let Some(next) = parents.get(&parent_id) else {
                return Err(ComputeError::Chart(format!(
                    "account '{}' references unknown parent account {}",
                    account.code, parent_id
                )));
            };

            hops += 1;
            if hops > accounts.len() {
                return Err(ComputeError::Chart(format!(
                    "parent chain starting at account '{}' does not terminate",
                    account.code
                )));
            }

            cursor = *next;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::entities::account::AccountType;

    fn account(id: i32, code: &str, parent: Option<i32>) -> account::Model {
        account::Model {
            id,
            company_id: 1,
            code: code.to_string(),
            name: format!("Account {}", code),
            account_type: AccountType::Asset,
            parent_account_id: parent,
        }
    }

    #[test]
    fn test_validate_chart_accepts_tree() {
        let accounts = vec![
            account(1, "1000", None),
            account(2, "1100", Some(1)),
            account(3, "1110", Some(2)),
            account(4, "2000", None),
        ];

        assert!(validate_chart(&accounts).is_ok());
    }

    #[test]
    fn test_validate_chart_accepts_empty_chart() {
        assert!(validate_chart(&[]).is_ok());
    }

    #[test]
    fn test_validate_chart_rejects_self_parent() {
        let accounts = vec![account(1, "1000", Some(1))];

        let err = validate_chart(&accounts).unwrap_err();
        match err {
            ComputeError::Chart(message) => {
                assert!(message.contains("1000"), "unexpected message: {}", message)
            }
            other => panic!("expected chart error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_chart_rejects_two_node_cycle() {
        let accounts = vec![account(1, "1000", Some(2)), account(2, "1100", Some(1))];

        assert!(validate_chart(&accounts).is_err());
    }

    #[test]
    fn test_validate_chart_rejects_unknown_parent() {
        let accounts = vec![account(1, "1000", Some(99))];

        let err = validate_chart(&accounts).unwrap_err();
        match err {
            ComputeError::Chart(message) => {
                assert!(message.contains("99"), "unexpected message: {}", message)
            }
            other => panic!("expected chart error, got {:?}", other),
        }
    }
}
