//! Todo model.
//!
//! A [`Todo`] is a single task record: a title plus a done flag.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::RenderConfig;

/// A single task with a title and a completion flag.
///
/// The title is fixed at construction. Unknown fields are rejected on
/// deserialization so that other shapes (a serialized list, for instance)
/// are never mistaken for a todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Todo {
    /// The text of the task.
    title: String,

    /// Whether the task is completed.
    #[serde(default)]
    done: bool,
}

impl Todo {
    /// Creates a new, not yet done, todo.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
        }
    }

    /// Returns the title of the todo.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Marks the todo as done.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Marks the todo as not done.
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Returns true if the todo is done.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Renders the todo as a single checkbox line.
    pub fn render(&self, config: &RenderConfig) -> String {
        let mark = if self.done {
            &config.done_mark
        } else {
            &config.undone_mark
        };
        format!("[{}] {}", mark, self.title)
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_new_is_not_done() {
        let todo = Todo::new("Buy milk");
        assert_eq!(todo.title(), "Buy milk");
        assert!(!todo.is_done());
    }

    #[test]
    fn test_todo_mark_done_and_undone() {
        let mut todo = Todo::new("Clean room");

        todo.mark_done();
        assert!(todo.is_done());

        // Marking twice leaves it done
        todo.mark_done();
        assert!(todo.is_done());

        todo.mark_undone();
        assert!(!todo.is_done());
    }

    #[test]
    fn test_todo_display() {
        let mut todo = Todo::new("Go to the gym");
        assert_eq!(todo.to_string(), "[ ] Go to the gym");

        todo.mark_done();
        assert_eq!(todo.to_string(), "[X] Go to the gym");
    }

    #[test]
    fn test_todo_render_custom_marks() {
        let config = RenderConfig {
            done_mark: "x".to_string(),
            undone_mark: "_".to_string(),
            ..RenderConfig::default()
        };
        let mut todo = Todo::new("Read");
        assert_eq!(todo.render(&config), "[_] Read");
        todo.mark_done();
        assert_eq!(todo.render(&config), "[x] Read");
    }

    #[test]
    fn test_todo_deserialize_minimal() {
        let todo: Todo = serde_json::from_str(r#"{"title": "Buy milk"}"#).unwrap();
        assert_eq!(todo.title(), "Buy milk");
        assert!(!todo.is_done());
    }

    #[test]
    fn test_todo_deserialize_done() {
        let todo: Todo = serde_json::from_str(r#"{"title": "Buy milk", "done": true}"#).unwrap();
        assert!(todo.is_done());
    }

    #[test]
    fn test_todo_deserialize_rejects_unknown_fields() {
        let result = serde_json::from_str::<Todo>(r#"{"title": "Today", "todos": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_todo_serialize() {
        let json = serde_json::to_string(&Todo::new("Buy milk")).unwrap();
        assert_eq!(json, r#"{"title":"Buy milk","done":false}"#);
    }
}
