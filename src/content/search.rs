//! Free-text search indexing over notes.
//!
//! A note's searchable text is its markup-stripped `content`, plus the
//! space-joined checklist item texts, plus the link URL, case-folded.
//! Queries filter by substring.

use crate::types::{Note, NoteKind};

/// Strip editor markup: tags are dropped, a few common entities decoded.
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                // Tag boundaries separate words.
                out.push(' ');
            }
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

/// The case-folded index text for one note.
pub fn searchable_text(note: &Note) -> String {
    let mut parts = vec![strip_markup(&note.content)];
    match &note.kind {
        NoteKind::List { list_items } => {
            parts.extend(list_items.iter().map(|item| item.text.clone()));
        }
        NoteKind::Link { link_url } => {
            if let Some(url) = link_url {
                parts.push(url.clone());
            }
        }
        NoteKind::Text | NoteKind::Image { .. } | NoteKind::Audio | NoteKind::Calculator => {}
    }
    parts.retain(|p| !p.trim().is_empty());
    parts.join(" ").to_lowercase()
}

/// Does this note match the query?
pub fn matches(note: &Note, query: &str) -> bool {
    searchable_text(note).contains(&query.trim().to_lowercase())
}

/// Filter a note set down to query matches, preserving order.
pub fn filter<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    let needle = query.trim().to_lowercase();
    notes
        .iter()
        .filter(|note| searchable_text(note).contains(&needle))
        .collect()
}
