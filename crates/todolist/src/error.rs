//! Error types for todo list operations.

use thiserror::Error;

/// A specialized Result type for todo list operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when manipulating a todo list.
///
/// Every failing operation returns before touching the list, so a list is
/// never left partially modified.
#[derive(Debug, Error)]
pub enum Error {
    /// A value that is not a todo was offered where a todo is required.
    #[error("expected {expected}, found {found}")]
    InvalidType {
        /// The type that was required.
        expected: &'static str,
        /// A short description of what was found instead.
        found: String,
    },

    /// An index-based operation was given an index outside `0..len`.
    #[error("index {index} is out of range for a list of {len} todos")]
    IndexOutOfRange {
        /// The rejected index.
        index: isize,
        /// The length of the list at the time of the call.
        len: usize,
    },

    /// No todo with the given title exists in the list.
    #[error("{}", format_title_not_found(.title, .suggestion.as_deref()))]
    TitleNotFound {
        /// The title that was looked up.
        title: String,
        /// The closest existing title, if one is near enough.
        suggestion: Option<String>,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The render configuration could not be parsed or written.
    #[error("invalid render config: {message}")]
    Config {
        /// Parser or serializer message.
        message: String,
    },
}

fn format_title_not_found(title: &str, suggestion: Option<&str>) -> String {
    let base = format!("todo '{}' not found", title);
    match suggestion {
        Some(s) => format!("{}. Did you mean '{}'?", base, s),
        None => base,
    }
}

impl Error {
    /// Creates an invalid type error for a value that should have been a todo.
    pub fn invalid_type(found: impl Into<String>) -> Self {
        Error::InvalidType {
            expected: "a Todo",
            found: found.into(),
        }
    }

    /// Creates an index out of range error.
    pub fn index_out_of_range(index: isize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Creates a config error from any displayable parser message.
    pub fn config(message: impl std::fmt::Display) -> Self {
        Error::Config {
            message: message.to_string(),
        }
    }

    /// Returns true if this is a type-validation failure.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Error::InvalidType { .. })
    }

    /// Returns true if an index-based operation was given an index outside
    /// `0..len`.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::IndexOutOfRange { .. })
    }

    /// Returns true if this is any lookup failure.
    ///
    /// Broader than [`Error::is_out_of_range`]: an unknown title from
    /// [`TodoList::mark_done`](crate::TodoList::mark_done) also counts.
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            Error::IndexOutOfRange { .. } | Error::TitleNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_type_display() {
        let error = Error::invalid_type("string");
        assert_eq!(error.to_string(), "expected a Todo, found string");
        assert!(error.is_type_error());
        assert!(!error.is_lookup_error());
        assert!(!error.is_out_of_range());
    }

    #[test]
    fn test_index_out_of_range_display() {
        let error = Error::index_out_of_range(-5, 3);
        assert_eq!(
            error.to_string(),
            "index -5 is out of range for a list of 3 todos"
        );
        assert!(error.is_out_of_range());
        assert!(error.is_lookup_error());
        assert!(!error.is_type_error());
    }

    #[test]
    fn test_title_not_found_without_suggestion() {
        let error = Error::TitleNotFound {
            title: "Walk dog".to_string(),
            suggestion: None,
        };
        assert_eq!(error.to_string(), "todo 'Walk dog' not found");
        assert!(error.is_lookup_error());
        assert!(!error.is_out_of_range());
    }

    #[test]
    fn test_title_not_found_with_suggestion() {
        let error = Error::TitleNotFound {
            title: "Buy mlk".to_string(),
            suggestion: Some("Buy milk".to_string()),
        };
        assert_eq!(
            error.to_string(),
            "todo 'Buy mlk' not found. Did you mean 'Buy milk'?"
        );
    }

    #[test]
    fn test_json_error_from() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = parse_err.into();
        assert!(error.to_string().starts_with("JSON error:"));
        assert!(!error.is_type_error());
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(Error::config("bad key"));
        assert!(error.to_string().contains("bad key"));
    }
}
