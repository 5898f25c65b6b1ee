//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{Document, TodoItem};

/// Newtype wrapper for displaying a list of todo items.
///
/// # Examples
///
/// ```rust
/// use todo_core::display::TodoItems;
///
/// let output = format!("{}", TodoItems(vec![]));
/// assert_eq!(output, "No todo items found.\n");
/// ```
pub struct TodoItems(pub Vec<TodoItem>);

impl TodoItems {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for TodoItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No todo items found.");
        }

        for (index, todo) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{todo}")?;
        }

        Ok(())
    }
}

/// Newtype wrapper for displaying the documents found in a collection.
pub struct Documents(pub Vec<Document>);

impl Documents {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Documents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No documents found.");
        }

        for (index, document) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{document}")?;
        }

        Ok(())
    }
}
