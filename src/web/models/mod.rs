use serde::{Deserialize, Serialize};

/// Body of the create endpoint and the creation form.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleTodoRequest {
    pub id: String,
    pub is_complete: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteTodoRequest {
    pub id: String,
}

/// Success body of the delete endpoint. Failures use the regular error response instead.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteTodoResponse {
    pub error: bool,
}
