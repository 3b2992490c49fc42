use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BlogPosts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(BlogPosts::AuthorFirstName).string().not_null())
                    .col(ColumnDef::new(BlogPosts::AuthorLastName).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Title).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Content).text().not_null())
                    .col(
                        ColumnDef::new(BlogPosts::Created)
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
            .drop_table(Table::drop().table(BlogPosts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Id,
    AuthorFirstName,
    AuthorLastName,
    Title,
    Content,
    Created,
}
