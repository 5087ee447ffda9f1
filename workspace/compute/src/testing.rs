//! Shared fixtures for the report computation tests.

use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, DbErr, Set};

use model::entities::account::{self, AccountType};
use model::entities::{
    company, item, journal_entry, journal_entry_line, payment_entry, purchase_invoice,
    sales_invoice, sales_invoice_item,
};

pub type Result<T> = std::result::Result<T, DbErr>;

/// Creates an in-memory database with the full schema applied.
pub async fn setup_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Parses a decimal literal. Test amounts are written as strings so the
/// scale is visible at the call site.
pub fn dec(value: &str) -> Decimal {
    value.parse().expect("invalid decimal literal in test")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid date in test")
}

pub async fn new_company(db: &DatabaseConnection) -> Result<company::Model> {
    company::ActiveModel {
        name: Set("Test Trading Co".to_string()),
        fiscal_year_start: Set(date(2026, 1, 1)),
        fiscal_year_end: Set(date(2026, 12, 31)),
        currency: Set("USD".to_string()),
        address: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn new_account(
    db: &DatabaseConnection,
    company: &company::Model,
    code: &str,
    name: &str,
    account_type: AccountType,
    parent: Option<i32>,
) -> Result<account::Model> {
    account::ActiveModel {
        company_id: Set(company.id),
        code: Set(code.to_string()),
        name: Set(name.to_string()),
        account_type: Set(account_type),
        parent_account_id: Set(parent),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn new_journal_entry(
    db: &DatabaseConnection,
    company: &company::Model,
    entry_date: NaiveDate,
) -> Result<journal_entry::Model> {
    journal_entry::ActiveModel {
        company_id: Set(company.id),
        date: Set(entry_date),
        reference: Set(None),
        narration: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn new_line(
    db: &DatabaseConnection,
    entry: &journal_entry::Model,
    account: &account::Model,
    debit: &str,
    credit: &str,
) -> Result<journal_entry_line::Model> {
    journal_entry_line::ActiveModel {
        journal_entry_id: Set(entry.id),
        account_id: Set(account.id),
        debit: Set(dec(debit)),
        credit: Set(dec(credit)),
        cost_center_id: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn new_item(
    db: &DatabaseConnection,
    name: &str,
    cost_price: &str,
    sale_price: &str,
) -> Result<item::Model> {
    item::ActiveModel {
        name: Set(name.to_string()),
        description: Set(None),
        cost_price: Set(dec(cost_price)),
        sale_price: Set(dec(sale_price)),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn new_sales_invoice(
    db: &DatabaseConnection,
    company: &company::Model,
    invoice_number: &str,
    invoice_date: NaiveDate,
    total_amount: &str,
) -> Result<sales_invoice::Model> {
    sales_invoice::ActiveModel {
        company_id: Set(company.id),
        invoice_number: Set(invoice_number.to_string()),
        customer_name: Set("Acme Corp".to_string()),
        date: Set(invoice_date),
        total_amount: Set(dec(total_amount)),
        tax_template_id: Set(None),
        payment_term_id: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn new_sales_invoice_item(
    db: &DatabaseConnection,
    invoice: &sales_invoice::Model,
    item: &item::Model,
    quantity: i32,
    rate: &str,
) -> Result<sales_invoice_item::Model> {
    sales_invoice_item::ActiveModel {
        invoice_id: Set(invoice.id),
        item_id: Set(item.id),
        quantity: Set(quantity),
        rate: Set(dec(rate)),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn new_purchase_invoice(
    db: &DatabaseConnection,
    company: &company::Model,
    invoice_number: &str,
    invoice_date: NaiveDate,
    total_amount: &str,
) -> Result<purchase_invoice::Model> {
    purchase_invoice::ActiveModel {
        company_id: Set(company.id),
        invoice_number: Set(invoice_number.to_string()),
        supplier_name: Set("Supply Side Ltd".to_string()),
        date: Set(invoice_date),
        total_amount: Set(dec(total_amount)),
        tax_template_id: Set(None),
        payment_term_id: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn new_payment(
    db: &DatabaseConnection,
    company: &company::Model,
    payment_date: NaiveDate,
    amount: &str,
    related_invoice_id: Option<i32>,
) -> Result<payment_entry::Model> {
    payment_entry::ActiveModel {
        company_id: Set(company.id),
        payment_date: Set(payment_date),
        amount: Set(dec(amount)),
        mode_of_payment_id: Set(None),
        reference: Set(None),
        related_invoice_id: Set(related_invoice_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
