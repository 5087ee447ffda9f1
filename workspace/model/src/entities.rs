//! This file serves as the root for all SeaORM entity modules.
//! The schema models a small double-entry back office: a chart of accounts,
//! journal entries with debit/credit lines, sales and purchase invoices with
//! line items, and the reference data those fact tables point at.

pub mod account;
pub mod company;
pub mod cost_center;
pub mod item;
pub mod journal_entry;
pub mod journal_entry_line;
pub mod payment_entry;
pub mod payment_mode;
pub mod payment_term;
pub mod purchase_invoice;
pub mod purchase_invoice_item;
pub mod sales_invoice;
pub mod sales_invoice_item;
pub mod tax_category;
pub mod tax_template;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::account::Entity as Account;
    pub use super::company::Entity as Company;
    pub use super::cost_center::Entity as CostCenter;
    pub use super::item::Entity as Item;
    pub use super::journal_entry::Entity as JournalEntry;
    pub use super::journal_entry_line::Entity as JournalEntryLine;
    pub use super::payment_entry::Entity as PaymentEntry;
    pub use super::payment_mode::Entity as PaymentMode;
    pub use super::payment_term::Entity as PaymentTerm;
    pub use super::purchase_invoice::Entity as PurchaseInvoice;
    pub use super::purchase_invoice_item::Entity as PurchaseInvoiceItem;
    pub use super::sales_invoice::Entity as SalesInvoice;
    pub use super::sales_invoice_item::Entity as SalesInvoiceItem;
    pub use super::tax_category::Entity as TaxCategory;
    pub use super::tax_template::Entity as TaxTemplate;
}
