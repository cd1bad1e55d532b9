//! Todo orchestration: validation, soft-delete policy, and partial updates.
//!
//! Every operation returns `Ok(Outcome)` for expected results, including
//! business failures. `Err` is reserved for store faults.

use std::sync::Arc;

use chrono::Utc;
use todo_core::envelope::{
    FailureKind, Outcome, MSG_CREATED, MSG_DELETED, MSG_MISSING_ID, MSG_NOT_FOUND,
    MSG_NOT_FOUND_OR_DELETED, MSG_UPDATED,
};
use todo_core::lifecycle::LifecycleStatus;
use todo_core::types::DbId;
use todo_core::validation::{evaluate_rules, save_todo_rules, RuleSet};
use todo_db::models::todo_item::{SaveTodoRequest, TodoItem, TodoItemView};
use todo_db::TodoRepository;

pub type ServiceResult<T> = Result<Outcome<T>, sqlx::Error>;

/// Orchestrates validation and repository calls for todo items.
#[derive(Clone)]
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
    create_rules: RuleSet,
    update_rules: RuleSet,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodoRepository>, create_rules: RuleSet, update_rules: RuleSet) -> Self {
        Self {
            repo,
            create_rules,
            update_rules,
        }
    }

    /// Service with the standard save rules for both create and update.
    pub fn with_default_rules(repo: Arc<dyn TodoRepository>) -> Self {
        Self::new(repo, save_todo_rules(), save_todo_rules())
    }

    pub fn repository(&self) -> &Arc<dyn TodoRepository> {
        &self.repo
    }

    /// All active items in insertion order.
    pub async fn list(&self) -> ServiceResult<Vec<TodoItemView>> {
        let views = self
            .repo
            .find_all()
            .await?
            .iter()
            .filter(|item| item.is_active())
            .map(TodoItem::to_view)
            .collect();
        Ok(Outcome::success(views, ""))
    }

    pub async fn get_by_id(&self, id: DbId) -> ServiceResult<TodoItemView> {
        let outcome = match self.load_active(id).await? {
            Ok(item) => Outcome::success(item.to_view(), ""),
            Err(kind) => Outcome::failure(kind, MSG_NOT_FOUND),
        };
        Ok(outcome)
    }

    /// Create an item. Any `todo_id` in the request is ignored.
    pub async fn create(&self, request: &SaveTodoRequest) -> ServiceResult<DbId> {
        let validation = evaluate_rules(&self.create_rules, request);
        if !validation.is_valid() {
            return Ok(Outcome::invalid(validation.errors));
        }

        let mut item = TodoItem::new(&request.title, &request.content, Utc::now());
        self.repo.add(&mut item).await?;

        tracing::info!(todo_id = item.todo_id, "Todo item created");
        Ok(Outcome::success(item.todo_id, MSG_CREATED))
    }

    /// Update an active item, keeping stored values for blank fields.
    pub async fn update(&self, request: &SaveTodoRequest) -> ServiceResult<bool> {
        let validation = evaluate_rules(&self.update_rules, request);
        if !validation.is_valid() {
            return Ok(Outcome::invalid(validation.errors));
        }

        let id = match request.todo_id {
            Some(id) if id != 0 => id,
            _ => return Ok(Outcome::failure(FailureKind::MissingIdentifier, MSG_MISSING_ID)),
        };

        let mut item = match self.load_active(id).await? {
            Ok(item) => item,
            Err(kind) => return Ok(Outcome::failure(kind, MSG_NOT_FOUND_OR_DELETED)),
        };

        item.apply_changes(&request.title, &request.content, Utc::now());
        self.repo.update(&item).await?;

        tracing::info!(todo_id = id, "Todo item updated");
        Ok(Outcome::success(true, MSG_UPDATED))
    }

    /// Soft-delete an active item.
    pub async fn delete(&self, id: DbId) -> ServiceResult<bool> {
        let mut item = match self.load_active(id).await? {
            Ok(item) => item,
            Err(kind) => return Ok(Outcome::failure(kind, MSG_NOT_FOUND_OR_DELETED)),
        };

        item.mark_deleted(Utc::now());
        self.repo.update(&item).await?;

        tracing::info!(todo_id = id, "Todo item soft-deleted");
        Ok(Outcome::success(true, MSG_DELETED))
    }

    /// Load an item and classify why it is unusable, if it is.
    async fn load_active(&self, id: DbId) -> Result<Result<TodoItem, FailureKind>, sqlx::Error> {
        let Some(item) = self.repo.find_by_id(id).await? else {
            return Ok(Err(FailureKind::NotFound));
        };

        match item.status() {
            LifecycleStatus::Active => Ok(Ok(item)),
            LifecycleStatus::Deleted { deleted_at } => {
                tracing::debug!(todo_id = id, %deleted_at, "Todo item is soft-deleted");
                Ok(Err(FailureKind::AlreadyDeleted))
            }
        }
    }
}
