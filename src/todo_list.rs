//! Todo List Operations
//!
//! Pure list transformations. Each returns a replacement list so the
//! store can swap it in wholesale.

use crate::models::TodoItem;

/// Pick an id for a todo created at `now_ms`.
///
/// Uses the timestamp unless an existing id is equal or later, in which
/// case the id is one past the largest id in the list. If the largest id
/// is `u64::MAX`, the smallest unused id is taken instead.
pub fn next_id(todos: &[TodoItem], now_ms: u64) -> u64 {
    match todos.iter().map(|todo| todo.id).max() {
        Some(max_id) if max_id >= now_ms => max_id
            .checked_add(1)
            .unwrap_or_else(|| (0..).find(|id| find(todos, *id).is_none()).unwrap_or(0)),
        _ => now_ms,
    }
}

/// Look up a todo by ID
pub fn find(todos: &[TodoItem], id: u64) -> Option<&TodoItem> {
    todos.iter().find(|todo| todo.id == id)
}

/// Append a new default todo created at `now_ms`
pub fn add(todos: &[TodoItem], now_ms: u64) -> Vec<TodoItem> {
    let mut next = todos.to_vec();
    next.push(TodoItem::new(next_id(todos, now_ms)));
    next
}

/// Drop the todo with `id`, if any
pub fn remove(todos: &[TodoItem], id: u64) -> Vec<TodoItem> {
    todos.iter().filter(|todo| todo.id != id).cloned().collect()
}

/// Flip the done flag of the todo with `id`
pub fn toggle_done(todos: &[TodoItem], id: u64) -> Vec<TodoItem> {
    todos
        .iter()
        .map(|todo| {
            if todo.id == id {
                TodoItem { done: !todo.done, ..todo.clone() }
            } else {
                todo.clone()
            }
        })
        .collect()
}

/// Replace the text of the todo with `id`.
///
/// Blank text leaves the list untouched; otherwise the text is stored as typed.
pub fn set_text(todos: &[TodoItem], id: u64, text: &str) -> Vec<TodoItem> {
    if text.trim().is_empty() {
        return todos.to_vec();
    }
    todos
        .iter()
        .map(|todo| {
            if todo.id == id {
                TodoItem { text: text.to_string(), ..todo.clone() }
            } else {
                todo.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn make_todo(id: u64, text: &str, done: bool) -> TodoItem {
        TodoItem { id, text: text.to_string(), done }
    }

    #[test]
    fn test_add_n_items_unique_ids() {
        let mut todos = Vec::new();
        // Same timestamp every time, as with several clicks within one millisecond
        for _ in 0..5 {
            todos = add(&todos, 1_000);
        }

        assert_eq!(todos.len(), 5);
        let ids: HashSet<u64> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 5);
        assert!(todos.iter().all(|t| t.text == "New todo" && !t.done));
    }

    #[test]
    fn test_add_uses_timestamp() {
        let todos = add(&[make_todo(10, "a", false)], 500);
        assert_eq!(todos[1].id, 500);
    }

    #[test]
    fn test_next_id_after_clock_skew() {
        // Stored ids newer than the current clock
        let todos = vec![make_todo(900, "a", false), make_todo(2_000, "b", false)];
        assert_eq!(next_id(&todos, 1_500), 2_001);
        assert_eq!(next_id(&[], 1_500), 1_500);
    }

    #[test]
    fn test_next_id_at_u64_max() {
        let todos = vec![make_todo(0, "a", false), make_todo(u64::MAX, "b", false)];
        assert_eq!(next_id(&todos, 1_700_000_000_000), 1);

        let next = add(&todos, 1_700_000_000_000);
        assert_eq!(next.len(), 3);
        let ids: HashSet<u64> = next.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_find() {
        let todos = vec![make_todo(1, "a", false), make_todo(2, "b", true)];
        assert_eq!(find(&todos, 2).map(|t| t.text.as_str()), Some("b"));
        assert!(find(&todos, 3).is_none());
    }

    #[test]
    fn test_add_appends_at_end() {
        let todos = vec![make_todo(1, "first", true)];
        let next = add(&todos, 5);
        assert_eq!(next[0], todos[0]);
        assert_eq!(next[1].id, 5);
    }

    #[test]
    fn test_remove() {
        let todos = vec![make_todo(1, "a", false), make_todo(2, "b", false), make_todo(3, "c", true)];
        let next = remove(&todos, 2);
        assert_eq!(next.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_remove_missing_id_unchanged() {
        let todos = vec![make_todo(1, "a", false), make_todo(2, "b", true)];
        assert_eq!(remove(&todos, 99), todos);
    }

    #[test]
    fn test_toggle_done_twice_restores() {
        let todos = vec![make_todo(1, "a", false), make_todo(2, "b", true)];

        let once = toggle_done(&todos, 1);
        assert!(once[0].done);
        assert!(once[1].done);

        let twice = toggle_done(&once, 1);
        assert_eq!(twice, todos);
    }

    #[test]
    fn test_set_text() {
        let todos = vec![make_todo(1, "a", false), make_todo(2, "b", false)];
        let next = set_text(&todos, 2, "  buy milk ");
        assert_eq!(next[0].text, "a");
        assert_eq!(next[1].text, "  buy milk ");
        assert_eq!(next[1].id, 2);
    }

    #[test]
    fn test_set_text_empty_keeps_original() {
        let todos = vec![make_todo(1, "keep me", false)];
        assert_eq!(set_text(&todos, 1, ""), todos);
        assert_eq!(set_text(&todos, 1, "   "), todos);
    }

    #[test]
    fn test_set_text_missing_id_unchanged() {
        let todos = vec![make_todo(1, "a", false)];
        assert_eq!(set_text(&todos, 7, "other"), todos);
    }
}
