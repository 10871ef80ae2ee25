//! Client-side narrowing of an already fetched list.

use crate::model::Todo;

/// Criteria applied locally to the server's list.
///
/// All checks are case-sensitive substring containment. Criteria are ANDed and
/// a `None` criterion always matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalFilter {
    pub owner: Option<String>,
    pub category: Option<String>,
    /// Keyword looked up in the todo body.
    pub body: Option<String>,
}

impl LocalFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn body(mut self, keyword: impl Into<String>) -> Self {
        self.body = Some(keyword.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.owner.is_none() && self.category.is_none() && self.body.is_none()
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        contains(&todo.owner, self.owner.as_deref())
            && contains(&todo.category, self.category.as_deref())
            && contains(&todo.body, self.body.as_deref())
    }

    /// Matching todos in input order. The input is left as is.
    pub fn apply(&self, todos: &[Todo]) -> Vec<Todo> {
        todos.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

fn contains(field: &str, needle: Option<&str>) -> bool {
    needle.is_none_or(|needle| field.contains(needle))
}

/// Narrow `todos` by `filter`.
pub fn filter_todos(todos: &[Todo], filter: &LocalFilter) -> Vec<Todo> {
    filter.apply(todos)
}

/// Map a text input to a criterion: blank input means no constraint.
pub fn criterion(input: &str) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}
