use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioProjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioProjects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::Slug)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::Title)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::Subdomain)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::Tagline)
                            .string_len(250)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::TechStack)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::Features)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioProjects::HeroImage).text())
                    .col(ColumnDef::new(PortfolioProjects::GithubUrl).text())
                    .col(ColumnDef::new(PortfolioProjects::LiveUrl).text().not_null())
                    .col(
                        ColumnDef::new(PortfolioProjects::Order)
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
            .drop_table(Table::drop().table(PortfolioProjects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PortfolioProjects {
    Table,
    Id,
    Slug,
    Title,
    Subdomain,
    Tagline,
    Description,
    TechStack,
    Features,
    HeroImage,
    GithubUrl,
    LiveUrl,
    Order,
}
