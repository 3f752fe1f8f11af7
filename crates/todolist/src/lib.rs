//! In-memory todo items and ordered todo lists.
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use todolist_rs::prelude::*;
//!
//! let mut list = TodoList::new("Today's Todos");
//! list.add(Todo::new("Buy milk"));
//! list.add(Todo::new("Clean room"));
//!
//! list.mark_done_at(0)?;
//! assert_eq!(list.to_string(), "---- Today's Todos ----\n[X] Buy milk\n[ ] Clean room");
//! # Ok::<(), todolist_rs::Error>(())
//! ```
//!
//! This re-exports [`Todo`], [`TodoList`], [`RenderConfig`] and the error types.

pub mod error;
pub mod import;
pub mod list;
pub mod lookup;
pub mod models;
pub mod prelude;
pub mod render;

pub use error::{Error, Result};
pub use list::TodoList;
pub use models::Todo;
pub use render::RenderConfig;
