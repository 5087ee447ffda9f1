//! Trial balance and profit & loss over posted journal lines.
//!
//! Both reports aggregate the whole journal without company or fiscal-year
//! scoping. The schema carries `company_id` on every posting, so scoped
//! variants stay possible without reshaping the data model; until then the
//! figures cover every company in the database at once.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::{debug, instrument, trace};

use common::{ProfitAndLossSummary, TrialBalanceRow};
use model::entities::account::AccountType;
use model::entities::journal_entry_line;

use crate::chart::load_chart;
use crate::error::Result;

/// Computes debit and credit totals and the resulting balance for every
/// account in the chart.
///
/// Accounts without postings are reported with zero totals rather than
/// omitted, so one row exists per account regardless of activity.
#[instrument(skip(db))]
pub async fn trial_balance(db: &DatabaseConnection) -> Result<Vec<TrialBalanceRow>> {
    let accounts = load_chart(db).await?;
    let lines = journal_entry_line::Entity::find().all(db).await?;

    debug!(
        "Computing trial balance over {} accounts and {} journal lines",
        accounts.len(),
        lines.len()
    );

    let mut debit_totals: HashMap<i32, Decimal> = HashMap::new();
    let mut credit_totals: HashMap<i32, Decimal> = HashMap::new();
    for line in &lines {
        *debit_totals.entry(line.account_id).or_insert(Decimal::ZERO) += line.debit;
        *credit_totals
            .entry(line.account_id)
            .or_insert(Decimal::ZERO) += line.credit;
    }

    let rows = accounts
        .iter()
        .map(|account| {
            let debit = debit_totals
                .get(&account.id)
                .copied()
                .unwrap_or(Decimal::ZERO);
            let credit = credit_totals
                .get(&account.id)
                .copied()
                .unwrap_or(Decimal::ZERO);
            trace!(
                "Account '{}': debit={}, credit={}",
                account.name, debit, credit
            );
            TrialBalanceRow::new(account.name.clone(), debit, credit)
        })
        .collect();

    Ok(rows)
}

/// Computes total revenue, total expenses and the resulting profit or loss.
///
/// Revenue accounts contribute their credit side and expense accounts their
/// debit side. A single pass over the lines with an account-type lookup
/// guarantees no line is counted twice; lines posted to asset, liability or
/// equity accounts contribute nothing.
#[instrument(skip(db))]
pub async fn profit_and_loss(db: &DatabaseConnection) -> Result<ProfitAndLossSummary> {
    let accounts = load_chart(db).await?;
    let lines = journal_entry_line::Entity::find().all(db).await?;

    let account_types: HashMap<i32, AccountType> = accounts
        .iter()
        .map(|account| (account.id, account.account_type))
        .collect();

    let mut revenue = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for line in &lines {
        match account_types.get(&line.account_id) {
            Some(AccountType::Revenue) => revenue += line.credit,
            Some(AccountType::Expense) => expenses += line.debit,
            _ => {}
        }
    }

    debug!(
        "Profit and loss over {} lines: revenue={}, expenses={}",
        lines.len(),
        revenue,
        expenses
    );

    Ok(ProfitAndLossSummary::new(revenue, expenses))
}

/// Nets `debit - credit` across the lines of one journal entry.
///
/// A balanced entry nets to exactly zero. Posting collaborators are expected
/// to reject imbalanced entries up front; the reports themselves aggregate
/// whatever was stored.
pub fn entry_imbalance(lines: &[journal_entry_line::Model]) -> Decimal {
    lines
        .iter()
        .fold(Decimal::ZERO, |acc, line| acc + line.debit - line.credit)
}
