use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};
use tracing::info;

use crate::db::entities::prelude::Todo;

/// Creates the `todos` table from its entity definition when it does not exist yet.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut create_todos = schema.create_table_from_entity(Todo);
    create_todos.if_not_exists();
    db.execute(backend.build(&create_todos)).await?;

    info!(backend = ?backend, "Database schema is ready.");
    Ok(())
}
