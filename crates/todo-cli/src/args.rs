//! Command-line argument definitions using clap's derive API.
//!
//! The structures here carry only what the terminal needs (flags, help text,
//! defaults). Each one converts into the core's own types, so the core stays
//! free of clap derives:
//!
//! ```text
//! User Input → clap Args → TodoItem / core params → TodoService
//! ```
//!
//! Conversions that can fail (timestamps, JSON bodies) use `TryFrom` and
//! surface the core's `InvalidArgument` error.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use jiff::Timestamp;
use todo_core::{
    params::{CollectionName, FindDocuments, InsertDocument, RemoveDocuments, ReplaceDocument},
    parse_timestamp, Priority, TodoError, TodoItem,
};

/// Keep track of todo items and JSON documents in a local SQLite database
#[derive(Parser)]
#[command(version, about, name = "todo")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/todo/todo.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Running `todo` without one lists all items.
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new todo item
    #[command(alias = "a")]
    Add(AddArgs),
    /// Show a single todo item
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Replace every field of an existing todo item
    #[command(alias = "u")]
    Update(UpdateArgs),
    /// Delete a todo item
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
    /// List all todo items
    #[command(aliases = ["l", "ls"])]
    List,
    /// Manage JSON documents in named collections
    Doc {
        #[command(subcommand)]
        command: DocCommands,
    },
}

/// Fields shared by `add` and `update`.
#[derive(ClapArgs)]
pub struct TodoFields {
    /// Short description of the work
    pub name: String,
    #[arg(short, long, value_enum, default_value_t = PriorityArg::Low)]
    pub priority: PriorityArg,
    /// When the item was created (RFC 3339 timestamp or YYYY-MM-DD); defaults to now
    #[arg(long)]
    pub created: Option<String>,
    /// When the item is due (RFC 3339 timestamp or YYYY-MM-DD)
    #[arg(long)]
    pub due: String,
    /// Mark the item as done
    #[arg(long)]
    pub done: bool,
}

impl TryFrom<TodoFields> for TodoItem {
    type Error = TodoError;

    fn try_from(val: TodoFields) -> Result<Self, Self::Error> {
        let created = match val.created {
            Some(created) => parse_timestamp("created", &created)?,
            None => Timestamp::now(),
        };
        let due_date = parse_timestamp("due", &val.due)?;

        let mut todo = TodoItem::new(val.name, val.priority.into(), created, due_date);
        todo.done = val.done;
        Ok(todo)
    }
}

#[derive(ClapArgs)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: TodoFields,
}

#[derive(ClapArgs)]
pub struct ShowArgs {
    #[arg(help = "Key of the todo item to show")]
    pub id: String,
}

/// Update is a full replace: fields that are not given fall back to their
/// defaults rather than keeping the stored value.
#[derive(ClapArgs)]
pub struct UpdateArgs {
    #[arg(help = "Key of the todo item to replace")]
    pub id: String,
    #[command(flatten)]
    pub fields: TodoFields,
}

#[derive(ClapArgs)]
pub struct DeleteArgs {
    #[arg(help = "Key of the todo item to delete")]
    pub id: String,
}

/// Command-line representation of [`Priority`].
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

#[derive(Subcommand)]
pub enum DocCommands {
    /// Insert a JSON object into a collection, creating the collection if needed
    #[command(alias = "i")]
    Insert(InsertDocArgs),
    /// Find documents matching a query-by-example filter
    #[command(alias = "f")]
    Find(FindDocArgs),
    /// Replace the content of the document with the given key
    #[command(alias = "r")]
    Replace(ReplaceDocArgs),
    /// Remove every document matching a filter
    #[command(alias = "rm")]
    Remove(RemoveDocArgs),
    /// Drop a collection and all of its documents
    Drop(DropCollectionArgs),
}

#[derive(ClapArgs)]
pub struct InsertDocArgs {
    pub collection: String,
    #[arg(help = "Document body as a JSON object")]
    pub content: String,
}

impl TryFrom<InsertDocArgs> for InsertDocument {
    type Error = TodoError;

    fn try_from(val: InsertDocArgs) -> Result<Self, Self::Error> {
        Ok(InsertDocument {
            collection: val.collection,
            content: parse_json("content", &val.content)?,
        })
    }
}

#[derive(ClapArgs)]
pub struct FindDocArgs {
    pub collection: String,
    /// JSON object of field/value pairs, e.g. '{"ename":"JONES"}'
    #[arg(short, long)]
    pub filter: Option<String>,
}

impl TryFrom<FindDocArgs> for FindDocuments {
    type Error = TodoError;

    fn try_from(val: FindDocArgs) -> Result<Self, Self::Error> {
        Ok(FindDocuments {
            collection: val.collection,
            filter: val
                .filter
                .map(|filter| parse_json("filter", &filter))
                .transpose()?,
        })
    }
}

#[derive(ClapArgs)]
pub struct ReplaceDocArgs {
    pub collection: String,
    pub key: String,
    #[arg(help = "New document body as a JSON object")]
    pub content: String,
}

impl TryFrom<ReplaceDocArgs> for ReplaceDocument {
    type Error = TodoError;

    fn try_from(val: ReplaceDocArgs) -> Result<Self, Self::Error> {
        Ok(ReplaceDocument {
            collection: val.collection,
            key: val.key,
            content: parse_json("content", &val.content)?,
        })
    }
}

#[derive(ClapArgs)]
pub struct RemoveDocArgs {
    pub collection: String,
    /// JSON object of field/value pairs; `{}` removes everything
    #[arg(short, long)]
    pub filter: String,
}

impl TryFrom<RemoveDocArgs> for RemoveDocuments {
    type Error = TodoError;

    fn try_from(val: RemoveDocArgs) -> Result<Self, Self::Error> {
        Ok(RemoveDocuments {
            collection: val.collection,
            filter: parse_json("filter", &val.filter)?,
        })
    }
}

#[derive(ClapArgs)]
pub struct DropCollectionArgs {
    pub collection: String,
}

impl From<DropCollectionArgs> for CollectionName {
    fn from(val: DropCollectionArgs) -> Self {
        CollectionName {
            collection: val.collection,
        }
    }
}

fn parse_json(field: &str, input: &str) -> Result<serde_json::Value, TodoError> {
    serde_json::from_str(input)
        .map_err(|e| TodoError::invalid_argument(field).with_reason(e.to_string()))
}
