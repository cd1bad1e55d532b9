//! Business services sitting between HTTP handlers and repositories.

pub mod todo_service;

pub use todo_service::TodoService;
