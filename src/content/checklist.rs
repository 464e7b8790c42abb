//! Checklist mutation for `list` notes.
//!
//! Item order is significant and ids stay unique within the note. An
//! emptied list survives: the note is not removed with its last item.

use crate::types::ListItem;

/// Insert a new empty, unchecked item immediately after `current_id` (what
/// Enter does inside an item). Returns the new item's id, or `None` when
/// `current_id` is not in the list.
pub fn insert_after(items: &mut Vec<ListItem>, current_id: &str) -> Option<String> {
    let index = items.iter().position(|item| item.id == current_id)?;
    let new_item = ListItem::new("");
    let new_id = new_item.id.clone();
    items.insert(index + 1, new_item);
    Some(new_id)
}

/// Append an item at the end of the list.
pub fn push_item(items: &mut Vec<ListItem>, text: impl Into<String>) -> String {
    let item = ListItem::new(text);
    let id = item.id.clone();
    items.push(item);
    id
}

/// Remove an item. Removing the last one leaves an empty list.
pub fn remove_item(items: &mut Vec<ListItem>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id != id);
    items.len() != before
}

/// Flip an item's checked state.
pub fn toggle_item(items: &mut [ListItem], id: &str) -> bool {
    match items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.checked = !item.checked;
            true
        }
        None => false,
    }
}

/// Replace an item's text.
pub fn set_item_text(items: &mut [ListItem], id: &str, text: impl Into<String>) -> bool {
    match items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.text = text.into();
            true
        }
        None => false,
    }
}
