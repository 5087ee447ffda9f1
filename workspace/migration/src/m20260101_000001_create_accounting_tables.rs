use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create companies table
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(pk_auto(Companies::Id))
                    .col(string(Companies::Name))
                    .col(date(Companies::FiscalYearStart))
                    .col(date(Companies::FiscalYearEnd))
                    .col(string(Companies::Currency).string_len(10))
                    .col(string_null(Companies::Address))
                    .to_owned(),
            )
            .await?;

        // Create accounts table (chart of accounts, self-referencing tree)
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(pk_auto(Accounts::Id))
                    .col(integer(Accounts::CompanyId))
                    .col(string(Accounts::Code).string_len(20).unique_key())
                    .col(string(Accounts::Name))
                    .col(string(Accounts::AccountType).string_len(20))
                    .col(integer_null(Accounts::ParentAccountId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_company")
                            .from(Accounts::Table, Accounts::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_parent")
                            .from(Accounts::Table, Accounts::ParentAccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create cost_centers table
        manager
            .create_table(
                Table::create()
                    .table(CostCenters::Table)
                    .if_not_exists()
                    .col(pk_auto(CostCenters::Id))
                    .col(string(CostCenters::Name))
                    .col(integer(CostCenters::CompanyId))
                    .col(string_null(CostCenters::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cost_center_company")
                            .from(CostCenters::Table, CostCenters::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create tax_categories table
        manager
            .create_table(
                Table::create()
                    .table(TaxCategories::Table)
                    .if_not_exists()
                    .col(pk_auto(TaxCategories::Id))
                    .col(string(TaxCategories::Name).string_len(100))
                    .col(string_null(TaxCategories::Description))
                    .to_owned(),
            )
            .await?;

        // Create tax_templates table
        manager
            .create_table(
                Table::create()
                    .table(TaxTemplates::Table)
                    .if_not_exists()
                    .col(pk_auto(TaxTemplates::Id))
                    .col(string(TaxTemplates::Name).string_len(100))
                    .col(decimal(TaxTemplates::TaxRate).decimal_len(5, 2))
                    .col(integer(TaxTemplates::TaxCategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tax_template_category")
                            .from(TaxTemplates::Table, TaxTemplates::TaxCategoryId)
                            .to(TaxCategories::Table, TaxCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create payment_terms table
        manager
            .create_table(
                Table::create()
                    .table(PaymentTerms::Table)
                    .if_not_exists()
                    .col(pk_auto(PaymentTerms::Id))
                    .col(string(PaymentTerms::Name).string_len(100))
                    .col(string_null(PaymentTerms::Description))
                    .col(integer(PaymentTerms::Days))
                    .to_owned(),
            )
            .await?;

        // Create payment_modes table
        manager
            .create_table(
                Table::create()
                    .table(PaymentModes::Table)
                    .if_not_exists()
                    .col(pk_auto(PaymentModes::Id))
                    .col(string(PaymentModes::Name).string_len(100))
                    .to_owned(),
            )
            .await?;

        // Create items table
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(pk_auto(Items::Id))
                    .col(string(Items::Name))
                    .col(string_null(Items::Description))
                    .col(decimal(Items::CostPrice).decimal_len(12, 2))
                    .col(decimal(Items::SalePrice).decimal_len(12, 2))
                    .to_owned(),
            )
            .await?;

        // Create journal_entries table
        manager
            .create_table(
                Table::create()
                    .table(JournalEntries::Table)
                    .if_not_exists()
                    .col(pk_auto(JournalEntries::Id))
                    .col(integer(JournalEntries::CompanyId))
                    .col(date(JournalEntries::Date))
                    .col(string_null(JournalEntries::Reference))
                    .col(string_null(JournalEntries::Narration))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journal_entry_company")
                            .from(JournalEntries::Table, JournalEntries::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create journal_entry_lines table. Account deletion is restricted
        // so posted history cannot be orphaned.
        manager
            .create_table(
                Table::create()
                    .table(JournalEntryLines::Table)
                    .if_not_exists()
                    .col(pk_auto(JournalEntryLines::Id))
                    .col(integer(JournalEntryLines::JournalEntryId))
                    .col(integer(JournalEntryLines::AccountId))
                    .col(decimal(JournalEntryLines::Debit).decimal_len(15, 2).default(0))
                    .col(decimal(JournalEntryLines::Credit).decimal_len(15, 2).default(0))
                    .col(integer_null(JournalEntryLines::CostCenterId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journal_entry_line_entry")
                            .from(JournalEntryLines::Table, JournalEntryLines::JournalEntryId)
                            .to(JournalEntries::Table, JournalEntries::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journal_entry_line_account")
                            .from(JournalEntryLines::Table, JournalEntryLines::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journal_entry_line_cost_center")
                            .from(JournalEntryLines::Table, JournalEntryLines::CostCenterId)
                            .to(CostCenters::Table, CostCenters::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sales_invoices table
        manager
            .create_table(
                Table::create()
                    .table(SalesInvoices::Table)
                    .if_not_exists()
                    .col(pk_auto(SalesInvoices::Id))
                    .col(integer(SalesInvoices::CompanyId))
                    .col(string(SalesInvoices::InvoiceNumber).string_len(100).unique_key())
                    .col(string(SalesInvoices::CustomerName))
                    .col(date(SalesInvoices::Date))
                    .col(decimal(SalesInvoices::TotalAmount).decimal_len(15, 2))
                    .col(integer_null(SalesInvoices::TaxTemplateId))
                    .col(integer_null(SalesInvoices::PaymentTermId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_invoice_company")
                            .from(SalesInvoices::Table, SalesInvoices::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_invoice_tax_template")
                            .from(SalesInvoices::Table, SalesInvoices::TaxTemplateId)
                            .to(TaxTemplates::Table, TaxTemplates::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_invoice_payment_term")
                            .from(SalesInvoices::Table, SalesInvoices::PaymentTermId)
                            .to(PaymentTerms::Table, PaymentTerms::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sales_invoice_items table
        manager
            .create_table(
                Table::create()
                    .table(SalesInvoiceItems::Table)
                    .if_not_exists()
                    .col(pk_auto(SalesInvoiceItems::Id))
                    .col(integer(SalesInvoiceItems::InvoiceId))
                    .col(integer(SalesInvoiceItems::ItemId))
                    .col(integer(SalesInvoiceItems::Quantity))
                    .col(decimal(SalesInvoiceItems::Rate).decimal_len(12, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_invoice_item_invoice")
                            .from(SalesInvoiceItems::Table, SalesInvoiceItems::InvoiceId)
                            .to(SalesInvoices::Table, SalesInvoices::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_invoice_item_item")
                            .from(SalesInvoiceItems::Table, SalesInvoiceItems::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create purchase_invoices table
        manager
            .create_table(
                Table::create()
                    .table(PurchaseInvoices::Table)
                    .if_not_exists()
                    .col(pk_auto(PurchaseInvoices::Id))
                    .col(integer(PurchaseInvoices::CompanyId))
                    .col(string(PurchaseInvoices::InvoiceNumber).string_len(100).unique_key())
                    .col(string(PurchaseInvoices::SupplierName))
                    .col(date(PurchaseInvoices::Date))
                    .col(decimal(PurchaseInvoices::TotalAmount).decimal_len(15, 2))
                    .col(integer_null(PurchaseInvoices::TaxTemplateId))
                    .col(integer_null(PurchaseInvoices::PaymentTermId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_invoice_company")
                            .from(PurchaseInvoices::Table, PurchaseInvoices::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_invoice_tax_template")
                            .from(PurchaseInvoices::Table, PurchaseInvoices::TaxTemplateId)
                            .to(TaxTemplates::Table, TaxTemplates::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_invoice_payment_term")
                            .from(PurchaseInvoices::Table, PurchaseInvoices::PaymentTermId)
                            .to(PaymentTerms::Table, PaymentTerms::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create purchase_invoice_items table
        manager
            .create_table(
                Table::create()
                    .table(PurchaseInvoiceItems::Table)
                    .if_not_exists()
                    .col(pk_auto(PurchaseInvoiceItems::Id))
                    .col(integer(PurchaseInvoiceItems::InvoiceId))
                    .col(integer(PurchaseInvoiceItems::ItemId))
                    .col(integer(PurchaseInvoiceItems::Quantity))
                    .col(decimal(PurchaseInvoiceItems::Rate).decimal_len(12, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_invoice_item_invoice")
                            .from(PurchaseInvoiceItems::Table, PurchaseInvoiceItems::InvoiceId)
                            .to(PurchaseInvoices::Table, PurchaseInvoices::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_invoice_item_item")
                            .from(PurchaseInvoiceItems::Table, PurchaseInvoiceItems::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create payment_entries table
        manager
            .create_table(
                Table::create()
                    .table(PaymentEntries::Table)
                    .if_not_exists()
                    .col(pk_auto(PaymentEntries::Id))
                    .col(integer(PaymentEntries::CompanyId))
                    .col(date(PaymentEntries::PaymentDate))
                    .col(decimal(PaymentEntries::Amount).decimal_len(15, 2))
                    .col(integer_null(PaymentEntries::ModeOfPaymentId))
                    .col(string_null(PaymentEntries::Reference))
                    .col(integer_null(PaymentEntries::RelatedInvoiceId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_entry_company")
                            .from(PaymentEntries::Table, PaymentEntries::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_entry_mode")
                            .from(PaymentEntries::Table, PaymentEntries::ModeOfPaymentId)
                            .to(PaymentModes::Table, PaymentModes::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_entry_invoice")
                            .from(PaymentEntries::Table, PaymentEntries::RelatedInvoiceId)
                            .to(SalesInvoices::Table, SalesInvoices::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order to avoid foreign key constraints
        manager
            .drop_table(Table::drop().table(PaymentEntries::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PurchaseInvoiceItems::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PurchaseInvoices::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SalesInvoiceItems::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SalesInvoices::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(JournalEntryLines::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(JournalEntries::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PaymentModes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PaymentTerms::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TaxTemplates::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TaxCategories::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CostCenters::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await?;

        Ok(())
    }
}

// Define identifiers for all tables

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
    Name,
    FiscalYearStart,
    FiscalYearEnd,
    Currency,
    Address,
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    CompanyId,
    Code,
    Name,
    AccountType,
    ParentAccountId,
}

#[derive(DeriveIden)]
enum CostCenters {
    Table,
    Id,
    Name,
    CompanyId,
    Description,
}

#[derive(DeriveIden)]
enum TaxCategories {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum TaxTemplates {
    Table,
    Id,
    Name,
    TaxRate,
    TaxCategoryId,
}

#[derive(DeriveIden)]
enum PaymentTerms {
    Table,
    Id,
    Name,
    Description,
    Days,
}

#[derive(DeriveIden)]
enum PaymentModes {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    Name,
    Description,
    CostPrice,
    SalePrice,
}

#[derive(DeriveIden)]
enum JournalEntries {
    Table,
    Id,
    CompanyId,
    Date,
    Reference,
    Narration,
}

#[derive(DeriveIden)]
enum JournalEntryLines {
    Table,
    Id,
    JournalEntryId,
    AccountId,
    Debit,
    Credit,
    CostCenterId,
}

#[derive(DeriveIden)]
enum SalesInvoices {
    Table,
    Id,
    CompanyId,
    InvoiceNumber,
    CustomerName,
    Date,
    TotalAmount,
    TaxTemplateId,
    PaymentTermId,
}

#[derive(DeriveIden)]
enum SalesInvoiceItems {
    Table,
    Id,
    InvoiceId,
    ItemId,
    Quantity,
    Rate,
}

#[derive(DeriveIden)]
enum PurchaseInvoices {
    Table,
    Id,
    CompanyId,
    InvoiceNumber,
    SupplierName,
    Date,
    TotalAmount,
    TaxTemplateId,
    PaymentTermId,
}

#[derive(DeriveIden)]
enum PurchaseInvoiceItems {
    Table,
    Id,
    InvoiceId,
    ItemId,
    Quantity,
    Rate,
}

#[derive(DeriveIden)]
enum PaymentEntries {
    Table,
    Id,
    CompanyId,
    PaymentDate,
    Amount,
    ModeOfPaymentId,
    Reference,
    RelatedInvoiceId,
}
