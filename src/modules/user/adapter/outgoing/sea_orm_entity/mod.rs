pub mod follows;
