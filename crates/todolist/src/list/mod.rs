//! Ordered, named collection of todos.
//!
//! [`TodoList`] keeps insertion order for every operation. Index-based
//! operations take an `isize` so that negative indices can be rejected with
//! the same [`Error::IndexOutOfRange`] as indices past the end; indices are
//! never clamped or wrapped.
//!
//! # Example
//!
//! ```
//! use todolist_rs::{Todo, TodoList};
//!
//! let mut list = TodoList::new("Today's Todos");
//! list.add(Todo::new("Buy milk"));
//! list.add(Todo::new("Clean room"));
//! list.add(Todo::new("Go to the gym"));
//!
//! let removed = list.remove_at(1)?;
//! assert_eq!(removed, vec![Todo::new("Clean room")]);
//! assert!(list.item_at(5).is_err());
//!
//! list.mark_all_done();
//! assert!(list.is_done());
//! # Ok::<(), todolist_rs::Error>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lookup::find_similar_title;
use crate::models::Todo;
use crate::render::RenderConfig;

/// A named, ordered collection of todos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// The list title, shown in the rendered header.
    pub title: String,

    /// Items in insertion order.
    #[serde(default)]
    pub(crate) todos: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty list with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// Appends a todo to the end of the list.
    pub fn add(&mut self, todo: Todo) {
        tracing::debug!(list = %self.title, todo = %todo.title(), "adding todo");
        self.todos.push(todo);
    }

    /// Returns the number of todos in the list.
    pub fn size(&self) -> usize {
        self.todos.len()
    }

    /// Alias for [`TodoList::size`].
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns true if the list has no todos.
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the first todo, if any.
    pub fn first(&self) -> Option<&Todo> {
        self.todos.first()
    }

    /// Returns the last todo, if any.
    pub fn last(&self) -> Option<&Todo> {
        self.todos.last()
    }

    /// Returns a copy of the todos in order.
    ///
    /// Changing the returned vector, or the todos in it, does not affect the list.
    pub fn to_vec(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Returns the todos as a slice.
    pub fn as_slice(&self) -> &[Todo] {
        &self.todos
    }

    /// Removes and returns the first todo, or `None` if the list is empty.
    pub fn shift(&mut self) -> Option<Todo> {
        if self.todos.is_empty() {
            return None;
        }
        let todo = self.todos.remove(0);
        tracing::debug!(list = %self.title, todo = %todo.title(), "shifted todo");
        Some(todo)
    }

    /// Removes and returns the last todo, or `None` if the list is empty.
    pub fn pop(&mut self) -> Option<Todo> {
        let todo = self.todos.pop()?;
        tracing::debug!(list = %self.title, todo = %todo.title(), "popped todo");
        Some(todo)
    }

    /// Validates an index against the current length.
    fn checked_index(&self, index: isize) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.todos.len())
            .ok_or_else(|| Error::index_out_of_range(index, self.todos.len()))
    }

    /// Returns the todo at `index`.
    ///
    /// Indices are signed so that a negative index, e.g. one computed from
    /// user input, reaches the range check and fails with
    /// [`Error::IndexOutOfRange`] instead of being unrepresentable. Callers
    /// holding a `usize` convert with `isize::try_from`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is negative or not less
    /// than [`TodoList::size`].
    ///
    /// # Example
    ///
    /// ```
    /// use todolist_rs::{Todo, TodoList};
    ///
    /// let mut list = TodoList::new("Chores");
    /// list.add(Todo::new("Buy milk"));
    ///
    /// let last = isize::try_from(list.len() - 1).expect("index fits in isize");
    /// assert_eq!(list.item_at(last)?.title(), "Buy milk");
    /// assert!(list.item_at(-1).unwrap_err().is_out_of_range());
    /// # Ok::<(), todolist_rs::Error>(())
    /// ```
    pub fn item_at(&self, index: isize) -> Result<&Todo> {
        let i = self.checked_index(index)?;
        Ok(&self.todos[i])
    }

    /// Returns the todo at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is out of range.
    pub fn item_at_mut(&mut self, index: isize) -> Result<&mut Todo> {
        let i = self.checked_index(index)?;
        Ok(&mut self.todos[i])
    }

    /// Removes the todo at `index` and returns it in a one-element vector.
    ///
    /// Use [`TodoList::take_at`] to get the todo itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is out of range; the list
    /// is left unchanged.
    pub fn remove_at(&mut self, index: isize) -> Result<Vec<Todo>> {
        self.take_at(index).map(|todo| vec![todo])
    }

    /// Removes and returns the todo at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is out of range; the list
    /// is left unchanged.
    pub fn take_at(&mut self, index: isize) -> Result<Todo> {
        let i = self.checked_index(index)?;
        let todo = self.todos.remove(i);
        tracing::debug!(list = %self.title, index = i, todo = %todo.title(), "removed todo");
        Ok(todo)
    }

    /// Marks the todo at `index` as done.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is out of range.
    pub fn mark_done_at(&mut self, index: isize) -> Result<()> {
        self.item_at_mut(index)?.mark_done();
        Ok(())
    }

    /// Marks the todo at `index` as not done.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is out of range.
    pub fn mark_undone_at(&mut self, index: isize) -> Result<()> {
        self.item_at_mut(index)?.mark_undone();
        Ok(())
    }

    /// Marks the first todo with exactly this title as done.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TitleNotFound`], with the closest title as a
    /// suggestion when one is near enough.
    pub fn mark_done(&mut self, title: &str) -> Result<()> {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.title() == title) {
            todo.mark_done();
            return Ok(());
        }
        Err(Error::TitleNotFound {
            title: title.to_string(),
            suggestion: self.suggest_title(title).map(str::to_string),
        })
    }

    /// Marks every todo as done.
    pub fn mark_all_done(&mut self) {
        tracing::debug!(list = %self.title, count = self.todos.len(), "marking all todos done");
        self.todos.iter_mut().for_each(Todo::mark_done);
    }

    /// Marks every todo as not done.
    pub fn mark_all_undone(&mut self) {
        tracing::debug!(list = %self.title, count = self.todos.len(), "marking all todos undone");
        self.todos.iter_mut().for_each(Todo::mark_undone);
    }

    /// Returns true if every todo is done. An empty list is done.
    pub fn is_done(&self) -> bool {
        self.todos.iter().all(Todo::is_done)
    }

    /// Builds a new list with the same title holding clones of the todos that
    /// satisfy `predicate`, in their original order.
    pub fn filter<P>(&self, mut predicate: P) -> TodoList
    where
        P: FnMut(&Todo) -> bool,
    {
        let mut filtered = TodoList::new(self.title.clone());
        for todo in &self.todos {
            if predicate(todo) {
                filtered.add(todo.clone());
            }
        }
        filtered
    }

    /// Returns the first todo whose title is exactly `title`.
    pub fn find_by_title(&self, title: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.title() == title)
    }

    /// Returns the closest existing title to `query`, ignoring case.
    ///
    /// Exact matches and titles more than a few edits away give `None`.
    pub fn suggest_title(&self, query: &str) -> Option<&str> {
        find_similar_title(query, self.todos.iter().map(Todo::title))
    }

    /// Returns a list of the todos that are done.
    pub fn all_done(&self) -> TodoList {
        self.filter(Todo::is_done)
    }

    /// Returns the todos that are not done, in order.
    pub fn all_not_done(&self) -> Vec<&Todo> {
        self.todos.iter().filter(|todo| !todo.is_done()).collect()
    }

    /// Calls `f` on every todo in order.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&Todo),
    {
        self.todos.iter().for_each(f);
    }

    /// Returns an iterator over the todos.
    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    /// Returns an iterator that allows modifying each todo.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Todo> {
        self.todos.iter_mut()
    }

    /// Renders the list with the given settings.
    ///
    /// The header line comes first, then one line per todo. Lines are joined
    /// with `\n` and there is no trailing newline.
    pub fn render(&self, config: &RenderConfig) -> String {
        std::iter::once(config.header(&self.title))
            .chain(self.todos.iter().map(|todo| todo.render(config)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderConfig::default()))
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}

impl<'a> IntoIterator for &'a mut TodoList {
    type Item = &'a mut Todo;
    type IntoIter = std::slice::IterMut<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter_mut()
    }
}

impl IntoIterator for TodoList {
    type Item = Todo;
    type IntoIter = std::vec::IntoIter<Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.into_iter()
    }
}

impl Extend<Todo> for TodoList {
    fn extend<I: IntoIterator<Item = Todo>>(&mut self, iter: I) {
        for todo in iter {
            self.add(todo);
        }
    }
}
