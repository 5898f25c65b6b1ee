//! Command handlers.
//!
//! Each handler converts its clap arguments into core types, calls the
//! [`TodoService`] and renders the result. Errors carry `anyhow` context and
//! end the process with a non-zero status; an update that finds no item is
//! reported but is not an error.

use anyhow::{Context, Result};
use todo_core::{
    params::{CollectionName, FindDocuments, InsertDocument, RemoveDocuments, ReplaceDocument},
    CreateResult, DeleteResult, Documents, IntoTodoId, OperationStatus, TodoItem, TodoItems,
    TodoService,
};

use crate::{
    args::{AddArgs, Commands, DeleteArgs, DocCommands, ShowArgs, UpdateArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    service: TodoService,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(service: TodoService, renderer: TerminalRenderer) -> Self {
        Self { service, renderer }
    }

    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Add(args) => self.add(args).await,
            Commands::Show(args) => self.show(args).await,
            Commands::Update(args) => self.update(args).await,
            Commands::Delete(args) => self.delete(args).await,
            Commands::List => self.list().await,
            Commands::Doc { command } => self.handle_doc_command(command).await,
        }
    }

    async fn add(&self, args: AddArgs) -> Result<()> {
        let todo = TodoItem::try_from(args.fields)?;
        let todo = self
            .service
            .create_todo(todo)
            .await
            .context("Failed to create todo item")?;

        self.renderer.render(&CreateResult::new(todo));
        Ok(())
    }

    async fn show(&self, args: ShowArgs) -> Result<()> {
        let todo = self
            .service
            .get_todo(args.id.as_str())
            .await
            .with_context(|| format!("Failed to get todo item {}", args.id))?;

        self.renderer.render(&todo);
        Ok(())
    }

    async fn update(&self, args: UpdateArgs) -> Result<()> {
        let todo = TodoItem::try_from(args.fields)?;
        let updated = self
            .service
            .update_todo(args.id.as_str(), todo)
            .await
            .with_context(|| format!("Failed to update todo item {}", args.id))?;

        let status = if updated {
            OperationStatus::success(format!("Updated todo item {}", args.id))
        } else {
            OperationStatus::failure(format!("Todo item {} does not exist", args.id))
        };
        self.renderer.render(&status);
        Ok(())
    }

    async fn delete(&self, args: DeleteArgs) -> Result<()> {
        let id = args.id.as_str().into_todo_id()?;

        self.service
            .delete_todo(id)
            .await
            .with_context(|| format!("Failed to delete todo item {id}"))?;

        self.renderer.render(&DeleteResult::new(id));
        Ok(())
    }

    pub async fn list(&self) -> Result<()> {
        let todos = self
            .service
            .list_todos()
            .await
            .context("Failed to list todo items")?;

        self.renderer.render(&TodoItems(todos));
        Ok(())
    }

    async fn handle_doc_command(&self, command: DocCommands) -> Result<()> {
        match command {
            DocCommands::Insert(args) => {
                let params = InsertDocument::try_from(args)?;
                let document = self
                    .service
                    .insert_document(&params)
                    .await
                    .with_context(|| format!("Failed to insert into '{}'", params.collection))?;
                self.renderer.render(&CreateResult::new(document));
            }
            DocCommands::Find(args) => {
                let params = FindDocuments::try_from(args)?;
                let documents = self
                    .service
                    .find_documents(&params)
                    .await
                    .with_context(|| format!("Failed to search '{}'", params.collection))?;
                self.renderer.render(&Documents(documents));
            }
            DocCommands::Replace(args) => {
                let params = ReplaceDocument::try_from(args)?;
                let replaced = self
                    .service
                    .replace_document(&params)
                    .await
                    .with_context(|| format!("Failed to replace document {}", params.key))?;
                let status = if replaced {
                    OperationStatus::success(format!("Replaced document {}", params.key))
                } else {
                    OperationStatus::failure(format!(
                        "Document {} does not exist in '{}'",
                        params.key, params.collection
                    ))
                };
                self.renderer.render(&status);
            }
            DocCommands::Remove(args) => {
                let params = RemoveDocuments::try_from(args)?;
                let removed = self
                    .service
                    .remove_documents(&params)
                    .await
                    .with_context(|| format!("Failed to remove from '{}'", params.collection))?;
                self.renderer.render(&OperationStatus::success(format!(
                    "Removed {removed} document(s) from '{}'",
                    params.collection
                )));
            }
            DocCommands::Drop(args) => {
                let params = CollectionName::from(args);
                let dropped = self
                    .service
                    .drop_collection(&params)
                    .await
                    .with_context(|| format!("Failed to drop '{}'", params.collection))?;
                let status = if dropped {
                    OperationStatus::success(format!("Dropped collection '{}'", params.collection))
                } else {
                    OperationStatus::failure(format!(
                        "Collection '{}' does not exist",
                        params.collection
                    ))
                };
                self.renderer.render(&status);
            }
        }
        Ok(())
    }
}
