pub mod page_routes;
pub mod todo_routes;
