//! Receivables summary and gross profit over the invoice tables.
//!
//! Like the ledger reports these aggregate every invoice in the database;
//! company and date scoping is left to future collaborators.

use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::{debug, instrument};

use common::{GrossProfitSummary, ReceivablesSummary};
use model::entities::{item, payment_entry, sales_invoice, sales_invoice_item};

use crate::error::{ComputeError, Result};

/// Summarizes invoiced sales against payments applied to an invoice.
///
/// Payments without a related invoice are deposits rather than receivable
/// settlements and are excluded at the query level.
#[instrument(skip(db))]
pub async fn receivables_summary(db: &DatabaseConnection) -> Result<ReceivablesSummary> {
    let invoices = sales_invoice::Entity::find().all(db).await?;
    let payments = payment_entry::Entity::find()
        .filter(payment_entry::Column::RelatedInvoiceId.is_not_null())
        .all(db)
        .await?;

    let total_sales = invoices
        .iter()
        .fold(Decimal::ZERO, |acc, invoice| acc + invoice.total_amount);
    let total_payments = payments
        .iter()
        .fold(Decimal::ZERO, |acc, payment| acc + payment.amount);

    debug!(
        "Receivables: {} invoices totalling {}, {} applied payments totalling {}",
        invoices.len(),
        total_sales,
        payments.len(),
        total_payments
    );

    Ok(ReceivablesSummary::new(total_sales, total_payments))
}

/// Computes cost, revenue and margin across all sales invoice line items.
///
/// Each line contributes `item.cost_price * quantity` to cost and
/// `rate * quantity` to revenue. With no line items at all, both totals are
/// zero rather than absent.
#[instrument(skip(db))]
pub async fn gross_profit(db: &DatabaseConnection) -> Result<GrossProfitSummary> {
    let lines = sales_invoice_item::Entity::find()
        .find_also_related(item::Entity)
        .all(db)
        .await?;

    let mut total_cost = Decimal::ZERO;
    let mut total_revenue = Decimal::ZERO;
    for (line, line_item) in &lines {
        let Some(line_item) = line_item else {
            return Err(ComputeError::MissingRelation(format!(
                "sales invoice item {} references item {} which does not exist",
                line.id, line.item_id
            )));
        };

        let quantity = Decimal::from(line.quantity);
        total_cost += line_item.cost_price * quantity;
        total_revenue += line.rate * quantity;
    }

    debug!(
        "Gross profit over {} invoice lines: cost={}, revenue={}",
        lines.len(),
        total_cost,
        total_revenue
    );

    Ok(GrossProfitSummary::new(total_cost, total_revenue))
}
