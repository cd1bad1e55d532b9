//! Repository abstraction over the todo entity store.

pub mod memory;
pub mod todo_item_repo;

pub use memory::MemoryTodoRepo;
pub use todo_item_repo::{PgTodoRepo, TodoRepository};
