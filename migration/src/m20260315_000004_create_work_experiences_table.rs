use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkExperiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkExperiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::Company)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::Title)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::Location)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::Start)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::End)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::Bullets)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::Order)
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
            .drop_table(Table::drop().table(WorkExperiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WorkExperiences {
    Table,
    Id,
    Company,
    Title,
    Location,
    Start,
    End,
    Bullets,
    Order,
}
