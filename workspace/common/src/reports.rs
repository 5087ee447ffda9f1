//! Read-side shapes for the ledger reports. These are distinct from the
//! entity models on purpose: reports expose derived figures, never raw rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::money::money;

/// One row of the trial balance report.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TrialBalanceRow {
    /// Account name as listed in the chart of accounts.
    pub account: String,
    /// Sum of all debits posted to the account.
    pub debit: Decimal,
    /// Sum of all credits posted to the account.
    pub credit: Decimal,
    /// `debit - credit`.
    pub balance: Decimal,
}

impl TrialBalanceRow {
    pub fn new(account: impl Into<String>, debit: Decimal, credit: Decimal) -> Self {
        let debit = money(debit);
        let credit = money(credit);
        Self {
            account: account.into(),
            debit,
            credit,
            balance: debit - credit,
        }
    }
}

/// Profit and loss statement summary.
///
/// Revenue is credit-signed and expenses are debit-signed per double-entry
/// convention, so both figures are reported as positive magnitudes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProfitAndLossSummary {
    /// Total credits posted to Revenue accounts.
    pub revenue: Decimal,
    /// Total debits posted to Expense accounts.
    pub expenses: Decimal,
    /// `revenue - expenses`; negative means a loss.
    pub profit_or_loss: Decimal,
}

impl ProfitAndLossSummary {
    pub fn new(revenue: Decimal, expenses: Decimal) -> Self {
        let revenue = money(revenue);
        let expenses = money(expenses);
        Self {
            revenue,
            expenses,
            profit_or_loss: revenue - expenses,
        }
    }
}

/// Accounts receivable summary.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReceivablesSummary {
    /// Sum of `total_amount` over all sales invoices.
    pub total_sales: Decimal,
    /// Sum of payment entries linked to a sales invoice. Unapplied payments
    /// are excluded.
    pub total_payments_received: Decimal,
    /// `total_sales - total_payments_received`.
    pub outstanding_amount: Decimal,
}

impl ReceivablesSummary {
    pub fn new(total_sales: Decimal, total_payments_received: Decimal) -> Self {
        let total_sales = money(total_sales);
        let total_payments_received = money(total_payments_received);
        Self {
            total_sales,
            total_payments_received,
            outstanding_amount: total_sales - total_payments_received,
        }
    }
}

/// Gross profit summary over sales invoice line items.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GrossProfitSummary {
    /// Sum of `item.cost_price * quantity` over all sales invoice items.
    pub total_cost: Decimal,
    /// Sum of `rate * quantity` over all sales invoice items.
    pub total_revenue: Decimal,
    /// `total_revenue - total_cost`.
    pub gross_profit: Decimal,
}

impl GrossProfitSummary {
    pub fn new(total_cost: Decimal, total_revenue: Decimal) -> Self {
        let total_cost = money(total_cost);
        let total_revenue = money(total_revenue);
        Self {
            total_cost,
            total_revenue,
            gross_profit: total_revenue - total_cost,
        }
    }
}
