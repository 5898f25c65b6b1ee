//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data structures carry no
//! presentation logic. Everything renders as markdown.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Document, Priority, TodoItem};

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TodoItem {
    /// Completion state with a leading icon.
    pub fn status_with_icon(&self) -> &'static str {
        if self.done {
            "✓ Done"
        } else {
            "○ Open"
        }
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => writeln!(f, "# {id}. {}", self.name)?,
            None => writeln!(f, "# {}", self.name)?,
        }
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status_with_icon())?;
        writeln!(f, "- Priority: {}", self.priority)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created))?;
        writeln!(f, "- Due: {}", LocalDateTime(&self.due_date))?;

        Ok(())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.key)?;
        writeln!(f)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Modified: {}", LocalDateTime(&self.last_modified))?;
        writeln!(f)?;

        let body = serde_json::to_string_pretty(&self.content).map_err(|_| fmt::Error)?;
        writeln!(f, "```json")?;
        writeln!(f, "{body}")?;
        writeln!(f, "```")
    }
}
