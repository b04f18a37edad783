use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

use crate::db::entities::todo;
use crate::db::services::todo_service::{TodoService, TodoServiceError};
use crate::web::models::{CreateTodoRequest, DeleteTodoRequest, DeleteTodoResponse, ToggleTodoRequest};
use crate::web::{AppError, AppState};

pub fn todo_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_todos))
        .route("/create", post(create_todo))
        .route("/toggle", post(toggle_todo))
        .route("/delete", post(delete_todo))
}

async fn list_todos(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<todo::Model>>, AppError> {
    let todos = TodoService::list_todos(&app_state.db_pool).await?;
    Ok(Json(todos))
}

async fn create_todo(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<Redirect, AppError> {
    let Json(payload) = payload?;
    let todo = TodoService::create_todo(&app_state.db_pool, payload.name).await?;
    info!(todo_id = %todo.id, "Todo created.");
    Ok(Redirect::to("/"))
}

async fn toggle_todo(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<ToggleTodoRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(payload) = payload?;
    TodoService::set_completion(&app_state.db_pool, &payload.id, payload.is_complete).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_todo(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<DeleteTodoRequest>, JsonRejection>,
) -> Result<Json<DeleteTodoResponse>, AppError> {
    let Json(payload) = payload?;
    let rows_affected = TodoService::delete_todo(&app_state.db_pool, &payload.id).await?;
    info!(todo_id = %payload.id, rows_affected, "Todo delete handled.");
    Ok(Json(DeleteTodoResponse { error: false }))
}

impl From<TodoServiceError> for AppError {
    fn from(err: TodoServiceError) -> Self {
        match err {
            TodoServiceError::DbErr(e) => AppError::DatabaseError(e.to_string()),
            TodoServiceError::EmptyName | TodoServiceError::EmptyId => {
                AppError::InvalidInput(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::db::schema::ensure_schema;
    use crate::web::{create_axum_router, views::load_templates};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        Router,
    };
    use http_body_util::BodyExt;
    use sea_orm::Database;
    use tower::ServiceExt;

    async fn setup_app() -> Router {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        ensure_schema(&db).await.unwrap();
        create_axum_router(db, load_templates().unwrap())
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn list(app: &Router) -> serde_json::Value {
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/todos").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_redirects_to_list() {
        let app = setup_app().await;

        let response = app
            .clone()
            .oneshot(post_json("/api/todos/create", serde_json::json!({ "name": "Buy milk" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        let todos = list(&app).await;
        assert_eq!(todos.as_array().unwrap().len(), 1);
        assert_eq!(todos[0]["name"], "Buy milk");
        assert_eq!(todos[0]["isComplete"], false);
        assert!(todos[0]["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_create_with_empty_name_is_rejected() {
        let app = setup_app().await;

        let response = app
            .clone()
            .oneshot(post_json("/api/todos/create", serde_json::json!({ "name": "" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(list(&app).await.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_with_wrong_shape_is_rejected() {
        let app = setup_app().await;

        let response = app
            .oneshot(post_json("/api/todos/toggle", serde_json::json!({ "id": "a" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_toggle_unknown_id_is_no_content() {
        let app = setup_app().await;

        let response = app
            .oneshot(post_json(
                "/api/todos/toggle",
                serde_json::json!({ "id": "missing", "isComplete": true }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_reports_no_error() {
        let app = setup_app().await;

        let response = app
            .oneshot(post_json("/api/todos/delete", serde_json::json!({ "id": "missing" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": false }));
    }

    #[tokio::test]
    async fn test_delete_with_empty_id_is_rejected() {
        let app = setup_app().await;

        let response = app
            .oneshot(post_json("/api/todos/delete", serde_json::json!({ "id": "" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
