//! In-process todo store.
//!
//! Used when no database is configured and by tests. Data lives only as long
//! as the process.

use async_trait::async_trait;
use tokio::sync::RwLock;
use todo_core::types::DbId;

use super::todo_item_repo::TodoRepository;
use crate::models::todo_item::TodoItem;

#[derive(Debug, Default)]
struct MemoryState {
    items: Vec<TodoItem>,
    last_id: DbId,
}

/// [`TodoRepository`] holding rows in a `Vec` behind an async lock.
///
/// Ids are assigned sequentially starting at 1, matching BIGSERIAL.
#[derive(Debug, Default)]
pub struct MemoryTodoRepo {
    state: RwLock<MemoryState>,
}

impl MemoryTodoRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows, soft-deleted ones included.
    pub async fn len(&self) -> usize {
        self.state.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TodoRepository for MemoryTodoRepo {
    async fn find_all(&self) -> Result<Vec<TodoItem>, sqlx::Error> {
        Ok(self.state.read().await.items.clone())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<TodoItem>, sqlx::Error> {
        let state = self.state.read().await;
        Ok(state.items.iter().find(|i| i.todo_id == id).cloned())
    }

    async fn add(&self, item: &mut TodoItem) -> Result<(), sqlx::Error> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        item.todo_id = state.last_id;
        state.items.push(item.clone());
        Ok(())
    }

    async fn update(&self, item: &TodoItem) -> Result<(), sqlx::Error> {
        let mut state = self.state.write().await;
        let slot = state
            .items
            .iter_mut()
            .find(|i| i.todo_id == item.todo_id)
            .ok_or(sqlx::Error::RowNotFound)?;
        *slot = item.clone();
        Ok(())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
