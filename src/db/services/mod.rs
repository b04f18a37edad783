//! Data access for the application. Handlers call into these services and never
//! build queries themselves.

pub mod todo_service;

pub use todo_service::*;
