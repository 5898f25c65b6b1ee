//! Todo item operations for the TodoService.

use super::TodoService;
use crate::{
    error::Result,
    models::{IntoTodoId, IntoTodoItem, TodoItem},
    repository::TodoRepository,
};

impl TodoService {
    /// Stores a new todo item and returns it carrying its generated key.
    pub async fn create_todo(&self, todo: impl IntoTodoItem) -> Result<TodoItem> {
        let mut todo = todo.into_todo_item()?;
        let record = todo.clone();

        let id = self
            .with_session(move |session| TodoRepository::new(session).create(record))
            .await?;

        todo.id = Some(id);
        Ok(todo)
    }

    /// Retrieves a todo item by key.
    pub async fn get_todo(&self, id: impl IntoTodoId) -> Result<TodoItem> {
        let id = id.into_todo_id()?;

        self.with_session(move |session| TodoRepository::new(session).read(id))
            .await
    }

    /// Replaces every field of an existing item. `false` when the key is
    /// unknown.
    pub async fn update_todo(&self, id: impl IntoTodoId, todo: impl IntoTodoItem) -> Result<bool> {
        let id = id.into_todo_id()?;
        let todo = todo.into_todo_item()?;

        self.with_session(move |session| TodoRepository::new(session).update(id, todo))
            .await
    }

    /// Permanently deletes a todo item.
    pub async fn delete_todo(&self, id: impl IntoTodoId) -> Result<()> {
        let id = id.into_todo_id()?;

        self.with_session(move |session| TodoRepository::new(session).delete(id))
            .await
    }

    /// Lists every todo item, oldest first.
    pub async fn list_todos(&self) -> Result<Vec<TodoItem>> {
        self.with_session(|session| TodoRepository::new(session).list())
            .await
    }
}
