use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResumeProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResumeProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ResumeProfiles::Name)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResumeProfiles::Title)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResumeProfiles::Email)
                            .string_len(254)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResumeProfiles::Phone)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResumeProfiles::Location)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ResumeProfiles::Website).text().not_null())
                    .col(
                        ColumnDef::new(ResumeProfiles::Github)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResumeProfiles::Linkedin)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ResumeProfiles::Summary).text().not_null())
                    .col(
                        ColumnDef::new(ResumeProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ResumeProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResumeProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ResumeProfiles {
    Table,
    Id,
    Name,
    Title,
    Email,
    Phone,
    Location,
    Website,
    Github,
    Linkedin,
    Summary,
    CreatedAt,
    UpdatedAt,
}
