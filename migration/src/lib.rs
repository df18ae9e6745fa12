pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250310_000001_create_follows_table;
mod m20250310_000002_create_blogs_table;
mod m20250310_000003_create_comments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250310_000001_create_follows_table::Migration),
            Box::new(m20250310_000002_create_blogs_table::Migration),
            Box::new(m20250310_000003_create_comments_table::Migration),
        ]
    }
}
