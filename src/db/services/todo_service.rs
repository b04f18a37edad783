use sea_orm::{
    sea_query::Expr, ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DbConn, DbErr,
    EntityTrait, QueryFilter, Set,
};
use tracing::debug;

use crate::db::entities::{prelude::Todo, todo};

#[derive(Debug, thiserror::Error)]
pub enum TodoServiceError {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),
    #[error("Name must contain at least 1 character")]
    EmptyName,
    #[error("Id must contain at least 1 character")]
    EmptyId,
}

pub struct TodoService;

impl TodoService {
    /// Returns every todo in storage order.
    pub async fn list_todos(db: &DbConn) -> Result<Vec<todo::Model>, TodoServiceError> {
        Ok(Todo::find().all(db).await?)
    }

    /// Inserts a new, incomplete todo. Names are not checked for duplicates.
    pub async fn create_todo(db: &DbConn, name: String) -> Result<todo::Model, TodoServiceError> {
        if name.is_empty() {
            return Err(TodoServiceError::EmptyName);
        }

        let new_todo = todo::ActiveModel {
            name: Set(name),
            ..todo::ActiveModel::new()
        };

        let created = new_todo.insert(db).await?;
        debug!(todo_id = %created.id, "Todo created.");
        Ok(created)
    }

    /// Overwrites the completion flag of the todo with `id`.
    ///
    /// Returns the number of affected rows. An unknown id affects zero rows and is not an error.
    pub async fn set_completion(
        db: &DbConn,
        id: &str,
        is_complete: bool,
    ) -> Result<u64, TodoServiceError> {
        if id.is_empty() {
            return Err(TodoServiceError::EmptyId);
        }

        let rows_affected = Todo::update_many()
            .col_expr(todo::Column::IsComplete, Expr::value(is_complete))
            .filter(todo::Column::Id.eq(id))
            .exec(db)
            .await?
            .rows_affected;

        debug!(todo_id = %id, is_complete, rows_affected, "Todo completion updated.");
        Ok(rows_affected)
    }

    /// Deletes the todo with `id`, returning the number of removed rows (0 or 1).
    pub async fn delete_todo(db: &DbConn, id: &str) -> Result<u64, TodoServiceError> {
        if id.is_empty() {
            return Err(TodoServiceError::EmptyId);
        }

        let rows_affected = Todo::delete_by_id(id.to_string())
            .exec(db)
            .await?
            .rows_affected;

        debug!(todo_id = %id, rows_affected, "Todo deleted.");
        Ok(rows_affected)
    }
}
