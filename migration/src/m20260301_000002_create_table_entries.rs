use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create entries table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Entries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Entries::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Entries::TopicId).uuid().not_null())
                    .col(ColumnDef::new(Entries::Text).text().not_null())
                    .col(ColumnDef::new(Entries::Slug).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Entries::DateAdded)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Entries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entries_topic_id")
                            .from(Entries::Table, Entries::TopicId)
                            .to(Topics::Table, Topics::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_entries_topic_id
                ON entries (topic_id);
                "#,
            )
            .await?;

        // Entry slugs are scoped to their topic
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_entries_topic_slug_unique
                ON entries (topic_id, slug);
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
                DROP INDEX IF EXISTS idx_entries_topic_id;
                DROP INDEX IF EXISTS idx_entries_topic_slug_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Entries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Entries {
    Table,
    Id,
    TopicId,
    Text,
    Slug,
    DateAdded,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
}
