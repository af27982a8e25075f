use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create topics table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Topics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Topics::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    // Identity comes from the token issuer; there is no local users table.
                    .col(ColumnDef::new(Topics::UserId).uuid().not_null())
                    .col(ColumnDef::new(Topics::Text).string_len(200).not_null())
                    .col(ColumnDef::new(Topics::Slug).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Topics::DateAdded)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Fast lookup by owner
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_topics_user_id
                ON topics (user_id);
                "#,
            )
            .await?;

        // No owner may log the same slug twice
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_topics_user_slug_unique
                ON topics (user_id, slug);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_topics_user_id;
                DROP INDEX IF EXISTS idx_topics_user_slug_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Topics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
    UserId,
    Text,
    Slug,
    DateAdded,
}
