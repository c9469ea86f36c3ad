use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EducationEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EducationEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(EducationEntries::School)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EducationEntries::Degree)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EducationEntries::Field)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EducationEntries::Start)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EducationEntries::End)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(EducationEntries::Gpa).string_len(20))
                    .col(ColumnDef::new(EducationEntries::Bullets).json_binary())
                    .col(
                        ColumnDef::new(EducationEntries::Order)
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
            .drop_table(Table::drop().table(EducationEntries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EducationEntries {
    Table,
    Id,
    School,
    Degree,
    Field,
    Start,
    End,
    Gpa,
    Bullets,
    Order,
}
