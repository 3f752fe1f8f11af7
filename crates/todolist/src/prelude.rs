//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the todolist crate,
//! so library consumers can import everything they need with a single
//! use statement.
//!
//! # Example
//!
//! ```
//! use todolist_rs::prelude::*;
//!
//! // Now you have access to:
//! // - Todo, TodoList (data model)
//! // - Error, Result (error handling)
//! // - RenderConfig (string rendering)
//! ```

// Data model
pub use crate::list::TodoList;
pub use crate::models::Todo;

// Error types
pub use crate::error::{Error, Result};

// Rendering
pub use crate::render::RenderConfig;
