//! Todo CRUD operations.

use sqlx::PgPool;

use crate::{models::Todo, DbError};

/// Return every todo ordered by `id` ascending.
pub async fn list_todos(pool: &PgPool) -> Result<Vec<Todo>, DbError> {
    let rows = sqlx::query_as::<_, Todo>(
        r#"SELECT id, body, completed FROM todos ORDER BY id ASC"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Insert a new, not-yet-completed todo. The store assigns the `id`.
///
/// `body` must already be validated by the caller.
pub async fn insert_todo(pool: &PgPool, body: &str) -> Result<Todo, DbError> {
    let row = sqlx::query_as::<_, Todo>(
        r#"
        INSERT INTO todos (body, completed)
        VALUES ($1, false)
        RETURNING id, body, completed
        "#,
    )
    .bind(body)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Flip `completed` and return the row as it stands afterwards.
///
/// Update and read-back happen in one statement, so a concurrent delete can
/// only show up as `None`.
pub async fn toggle_todo(pool: &PgPool, id: i32) -> Result<Option<Todo>, DbError> {
    let row = sqlx::query_as::<_, Todo>(
        r#"
        UPDATE todos
        SET completed = NOT completed
        WHERE id = $1
        RETURNING id, body, completed
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Permanently delete a todo by its primary key.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn delete_todo(pool: &PgPool, id: i32) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM todos WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}
