use async_trait::async_trait;
use todo_core::types::DbId;
use todo_db::models::todo_item::TodoItem;
use todo_db::TodoRepository;

/// A store that is unreachable: every call fails.
pub struct FailingRepo;

fn unavailable() -> sqlx::Error {
    sqlx::Error::PoolTimedOut
}

#[async_trait]
impl TodoRepository for FailingRepo {
    async fn find_all(&self) -> Result<Vec<TodoItem>, sqlx::Error> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<TodoItem>, sqlx::Error> {
        Err(unavailable())
    }

    async fn add(&self, _item: &mut TodoItem) -> Result<(), sqlx::Error> {
        Err(unavailable())
    }

    async fn update(&self, _item: &TodoItem) -> Result<(), sqlx::Error> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Err(unavailable())
    }
}
