use axum::{
    extract::{rejection::FormRejection, Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::info;

use crate::db::services::todo_service::{TodoService, TodoServiceError};
use crate::web::models::CreateTodoRequest;
use crate::web::views::{self, TodoListView};
use crate::web::{AppError, AppState};

pub fn page_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_page))
        .route("/todos/new", get(new_todo_page).post(submit_new_todo))
}

async fn list_page(State(app_state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let todos = TodoService::list_todos(&app_state.db_pool).await?;
    let view = TodoListView::new(todos);
    Ok(Html(views::render_list(&app_state.templates, &view)?))
}

async fn new_todo_page(State(app_state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    Ok(Html(views::render_new_form(&app_state.templates, None, "")?))
}

fn invalid_form(app_state: &AppState, message: &str) -> Result<Response, AppError> {
    let html = views::render_new_form(&app_state.templates, Some(message), "")?;
    Ok((StatusCode::BAD_REQUEST, Html(html)).into_response())
}

async fn submit_new_todo(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Form<CreateTodoRequest>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(payload) = match payload {
        Ok(form) => form,
        Err(rejection) => return invalid_form(&app_state, &rejection.body_text()),
    };

    match TodoService::create_todo(&app_state.db_pool, payload.name).await {
        Ok(todo) => {
            info!(todo_id = %todo.id, "Todo created from form.");
            Ok(Redirect::to("/").into_response())
        }
        Err(err @ TodoServiceError::EmptyName) => invalid_form(&app_state, &err.to_string()),
        Err(err) => Err(err.into()),
    }
}
