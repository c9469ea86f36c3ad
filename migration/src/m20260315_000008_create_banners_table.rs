use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Banners::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Banners::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Banners::Message).text().not_null())
                    .col(ColumnDef::new(Banners::Link).text())
                    .col(ColumnDef::new(Banners::LinkText).string_len(100))
                    .col(
                        ColumnDef::new(Banners::Variant)
                            .string_len(20)
                            .not_null()
                            .default("info"),
                    )
                    .col(ColumnDef::new(Banners::PagePath).string_len(250))
                    .col(
                        ColumnDef::new(Banners::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Banners::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Banners::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Banners {
    Table,
    Id,
    Message,
    Link,
    LinkText,
    Variant,
    PagePath,
    Active,
    Order,
}
