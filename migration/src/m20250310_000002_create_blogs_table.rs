use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create blogs table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Blogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Blogs::AuthorId).integer().not_null())
                    .col(ColumnDef::new(Blogs::Title).string_len(125).not_null())
                    .col(ColumnDef::new(Blogs::Content).text().not_null())
                    .col(
                        ColumnDef::new(Blogs::LikeValue)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Blogs::IsDelete)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Blogs::CreateTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Blogs::LastUpdateTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blogs_author_id")
                            .from(Blogs::Table, Blogs::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Listing only ever reads live rows
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_blogs_live_create_time
                ON blogs (create_time)
                WHERE is_delete = false;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_blogs_author_id
                ON blogs (author_id)
                WHERE is_delete = false;
                "#,
            )
            .await?;

        // =====================================================
        // last_update_time trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_last_update_time_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.last_update_time = CURRENT_TIMESTAMP;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_blogs_last_update_time
                BEFORE UPDATE ON blogs
                FOR EACH ROW
                EXECUTE FUNCTION update_last_update_time_column();
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
                DROP TRIGGER IF EXISTS update_blogs_last_update_time ON blogs;
                DROP FUNCTION IF EXISTS update_last_update_time_column;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_blogs_live_create_time;
                DROP INDEX IF EXISTS idx_blogs_author_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Blogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Blogs {
    Table,
    Id,
    AuthorId,
    Title,
    Content,
    LikeValue,
    IsDelete,
    CreateTime,
    LastUpdateTime,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
