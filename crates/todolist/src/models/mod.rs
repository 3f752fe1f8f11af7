//! Data types shared by the todo list operations.

mod todo;

pub use todo::*;
