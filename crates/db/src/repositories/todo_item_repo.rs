//! Repository for the `todo_items` table.

use async_trait::async_trait;
use sqlx::PgPool;
use todo_core::types::DbId;

use crate::models::todo_item::TodoItem;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "todo_id, title, content, created_at, updated_at, deleted_at";

/// Typed CRUD access to stored todo items.
///
/// There is no delete primitive: soft deletion is an [`update`] of an item
/// whose `deleted_at` has been set. Every write is durable when the call
/// returns.
///
/// [`update`]: TodoRepository::update
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// All items in insertion order, soft-deleted ones included.
    async fn find_all(&self) -> Result<Vec<TodoItem>, sqlx::Error>;

    /// Find an item by id, soft-deleted or not.
    async fn find_by_id(&self, id: DbId) -> Result<Option<TodoItem>, sqlx::Error>;

    /// Persist a new item and write the generated id back into it.
    async fn add(&self, item: &mut TodoItem) -> Result<(), sqlx::Error>;

    /// Persist the current field state of a previously loaded item.
    async fn update(&self, item: &TodoItem) -> Result<(), sqlx::Error>;

    /// Cheap liveness probe of the underlying store.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// [`TodoRepository`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgTodoRepo {
    pool: PgPool,
}

impl PgTodoRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepo {
    async fn find_all(&self) -> Result<Vec<TodoItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todo_items ORDER BY todo_id ASC");
        sqlx::query_as::<_, TodoItem>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<TodoItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todo_items WHERE todo_id = $1");
        sqlx::query_as::<_, TodoItem>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn add(&self, item: &mut TodoItem) -> Result<(), sqlx::Error> {
        let todo_id: DbId = sqlx::query_scalar(
            "INSERT INTO todo_items (title, content, created_at, updated_at, deleted_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING todo_id",
        )
        .bind(&item.title)
        .bind(&item.content)
        .bind(item.created_at)
        .bind(item.updated_at)
        .bind(item.deleted_at)
        .fetch_one(&self.pool)
        .await?;

        item.todo_id = todo_id;
        tracing::debug!(todo_id, "Inserted todo item");
        Ok(())
    }

    async fn update(&self, item: &TodoItem) -> Result<(), sqlx::Error> {
        let result = sqlx::query(
            "UPDATE todo_items SET
                title = $2,
                content = $3,
                updated_at = $4,
                deleted_at = $5
             WHERE todo_id = $1",
        )
        .bind(item.todo_id)
        .bind(&item.title)
        .bind(&item.content)
        .bind(item.updated_at)
        .bind(item.deleted_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
