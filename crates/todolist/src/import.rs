//! Type-checked conversion of dynamic JSON values into todos and lists.
//!
//! Inside Rust the element type of a [`TodoList`] is fixed to [`Todo`], so
//! [`TodoList::add`] cannot be handed anything else. JSON is where untyped
//! data enters; this module rejects every value that is not a todo with
//! [`Error::InvalidType`].

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::list::TodoList;
use crate::models::Todo;

/// Keys allowed in a serialized list.
const LIST_KEYS: [&str; 2] = ["title", "todos"];

/// Describes a JSON value for type errors.
///
/// Objects shaped like a serialized list are reported as `TodoList`, and
/// objects shaped like a serialized todo as `Todo`.
pub(crate) fn describe_value(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(map) if map.contains_key("todos") => "TodoList",
        Value::Object(map) if is_todo_shaped(map) => "Todo",
        Value::Object(_) => "object",
    }
}

fn is_todo_shaped(map: &serde_json::Map<String, Value>) -> bool {
    matches!(map.get("title"), Some(Value::String(_)))
        && map.get("done").map_or(true, Value::is_boolean)
        && map.keys().all(|key| key == "title" || key == "done")
}

impl Todo {
    /// Converts a JSON value into a todo, rejecting anything else.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidType`] if the value is not an object of the
    /// form `{"title": <string>, "done": <bool>}` (`done` optional).
    pub fn from_value(value: &Value) -> Result<Todo> {
        if !value.is_object() {
            return Err(Error::invalid_type(describe_value(value)));
        }
        Todo::deserialize(value).map_err(|e| {
            tracing::debug!(error = %e, "rejected value as todo");
            Error::invalid_type(describe_value(value))
        })
    }
}

impl TryFrom<Value> for Todo {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Todo::from_value(&value)
    }
}

impl TodoList {
    /// Adds a dynamically typed value to the end of the list.
    ///
    /// The list is unchanged when the value is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidType`] if the value is not a todo, e.g. a
    /// string, a number, or a serialized list.
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    /// use todolist_rs::TodoList;
    ///
    /// let mut list = TodoList::new("Chores");
    /// assert!(list.add_value(json!({"title": "Buy milk"})).is_ok());
    /// assert!(list.add_value(json!("a todo")).is_err());
    /// assert_eq!(list.size(), 1);
    /// ```
    pub fn add_value(&mut self, value: Value) -> Result<&Todo> {
        let todo = Todo::try_from(value)?;
        let index = self.todos.len();
        self.add(todo);
        Ok(&self.todos[index])
    }

    /// Parses a serialized list, checking that every element is a todo.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed JSON, and [`Error::InvalidType`]
    /// if the document is not a list or contains an element that is not a todo.
    pub fn from_json(json: &str) -> Result<TodoList> {
        let value: Value = serde_json::from_str(json)?;
        TodoList::from_value(value)
    }

    /// Builds a list from a JSON value of the form `{"title": ..., "todos": [...]}`.
    ///
    /// Any other key is rejected, so a serialized todo is never read as an
    /// empty list. Elements are inserted through [`TodoList::add_value`].
    pub fn from_value(value: Value) -> Result<TodoList> {
        let found = describe_value(&value);
        let mut map = match value {
            Value::Object(map) if map.keys().all(|key| LIST_KEYS.contains(&key.as_str())) => map,
            _ => {
                return Err(Error::InvalidType {
                    expected: "a TodoList",
                    found: found.to_string(),
                });
            }
        };

        let title = match map.remove("title") {
            Some(Value::String(title)) => title,
            None => String::new(),
            Some(other) => {
                return Err(Error::InvalidType {
                    expected: "a string title",
                    found: describe_value(&other).to_string(),
                });
            }
        };

        let items = match map.remove("todos") {
            Some(Value::Array(items)) => items,
            None => Vec::new(),
            Some(other) => {
                return Err(Error::InvalidType {
                    expected: "an array of todos",
                    found: describe_value(&other).to_string(),
                });
            }
        };

        let mut list = TodoList::new(title);
        for item in items {
            list.add_value(item)?;
        }
        Ok(list)
    }

    /// Serializes the list to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
