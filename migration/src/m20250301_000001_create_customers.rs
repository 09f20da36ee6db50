use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Customers {
    Table,
    CustomerId,
    CustomerName,
    AssignedRm,
    CustomerType,
    PriorityPrivate,
    TransactionLabel,
    AumLabel,
    PropensityBac,
    PropensitySb,
    PropensityRd,
    ScoreOverall,
    ScoreBac,
    ScoreSb,
    ScoreRd,
    RiskProfile,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::CustomerId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::CustomerName).string_len(255).not_null())
                    .col(ColumnDef::new(Customers::AssignedRm).string_len(64).not_null())
                    .col(ColumnDef::new(Customers::CustomerType).text().not_null())
                    .col(
                        ColumnDef::new(Customers::PriorityPrivate)
                            .string_len(32)
                            .not_null()
                            .default("Priority"),
                    )
                    // NULL means the customer has no transaction label yet
                    .col(ColumnDef::new(Customers::TransactionLabel).text().null())
                    .col(ColumnDef::new(Customers::AumLabel).text().not_null())
                    .col(ColumnDef::new(Customers::PropensityBac).text().not_null())
                    .col(ColumnDef::new(Customers::PropensitySb).text().not_null())
                    .col(ColumnDef::new(Customers::PropensityRd).text().not_null())
                    .col(
                        ColumnDef::new(Customers::ScoreOverall)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Customers::ScoreBac).double().not_null().default(0.0))
                    .col(ColumnDef::new(Customers::ScoreSb).double().not_null().default(0.0))
                    .col(ColumnDef::new(Customers::ScoreRd).double().not_null().default(0.0))
                    .col(ColumnDef::new(Customers::RiskProfile).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_customers_assigned_rm")
                    .table(Customers::Table)
                    .col(Customers::AssignedRm)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_customers_aum_label")
                    .table(Customers::Table)
                    .col(Customers::AumLabel)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Customers::Table).to_owned())
            .await?;
        Ok(())
    }
}
