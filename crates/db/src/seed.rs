//! Sample rows for a fresh store.

use chrono::Utc;

use crate::models::todo_item::TodoItem;
use crate::repositories::TodoRepository;

const SEED_ITEMS: &[(&str, &str)] = &[
    ("Seed - Buy groceries", "Milk, eggs, bread, and vegetables."),
    (
        "Seed - Clean the house",
        "Vacuum, mop floors, and organize the kitchen.",
    ),
    (
        "Seed - Finish coding assignment",
        "Implement backend CRUD endpoints and add API docs.",
    ),
    (
        "Seed - Read a book",
        "Read at least 30 pages of a self-development book.",
    ),
    (
        "Seed - Exercise",
        "Go for a 30-minute run or do a workout routine.",
    ),
];

/// Insert the sample items if the store holds no rows at all.
///
/// Returns the number of rows inserted (0 when the store was not empty).
pub async fn seed_if_empty<R: TodoRepository + ?Sized>(repo: &R) -> Result<usize, sqlx::Error> {
    if !repo.find_all().await?.is_empty() {
        tracing::debug!("Store already populated, skipping seed data");
        return Ok(0);
    }

    let now = Utc::now();
    for (title, content) in SEED_ITEMS {
        let mut item = TodoItem::new(*title, *content, now);
        repo.add(&mut item).await?;
    }

    tracing::info!(count = SEED_ITEMS.len(), "Seeded todo items");
    Ok(SEED_ITEMS.len())
}
